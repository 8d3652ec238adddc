//! Hardware sink
//!
//! Drives the e-paper refresh sequence around an opaque [`PanelDevice`]:
//! fast init, write the rotated and packed raster, then put the panel back
//! to sleep. Sleep always runs, even when an earlier step failed, so the
//! panel is never left powered between ticks.

use async_trait::async_trait;
use render::Frame;
use tracing::{debug, instrument};

use crate::sink::{OutputSink, SinkError};

/// Low-level panel operations, one method per controller command
pub trait PanelDevice: Send {
    /// Wake the panel with the fast (partial-capable) init sequence
    fn init_fast(&mut self) -> Result<(), SinkError>;

    /// Write a packed 1bpp raster and trigger a refresh
    fn write_frame(&mut self, packed: &[u8]) -> Result<(), SinkError>;

    /// Put the panel into deep sleep
    fn sleep(&mut self) -> Result<(), SinkError>;
}

/// Sink that refreshes a physical panel
pub struct HardwareSink<D: PanelDevice> {
    device: D,
}

impl<D: PanelDevice> HardwareSink<D> {
    /// Wrap a panel device
    pub const fn new(device: D) -> Self {
        Self { device }
    }

    fn refresh(&mut self, frame: &Frame) -> Result<(), SinkError> {
        // The panel is mounted upside down and its controller is portrait
        let packed = frame.rotated_180().to_packed_portrait_1bpp();

        let written = self
            .device
            .init_fast()
            .and_then(|()| self.device.write_frame(&packed));

        // The panel sleeps between ticks regardless of how the write went
        let slept = self.device.sleep();
        written.and(slept)
    }
}

#[async_trait]
impl<D: PanelDevice> OutputSink for HardwareSink<D> {
    #[instrument(skip(self, frame))]
    async fn present(&mut self, frame: Frame) -> Result<(), SinkError> {
        debug!(
            width = frame.width(),
            height = frame.height(),
            "Refreshing panel"
        );
        self.refresh(&frame)
    }
}
