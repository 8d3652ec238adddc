//! Output sink seam
//!
//! The tick pipeline hands every composed frame to an [`OutputSink`] and
//! does not care whether pixels end up on the panel or in a window.

use async_trait::async_trait;
use render::Frame;
use thiserror::Error;

/// Errors from presenting a frame
#[derive(Debug, Error)]
pub enum SinkError {
    /// Talking to the panel failed
    #[error("Panel I/O failed: {0}")]
    PanelIo(String),

    /// The simulator window is gone
    #[error("Simulator window closed")]
    ShellClosed,
}

/// Destination for composed frames
#[async_trait]
pub trait OutputSink: Send {
    /// Present one frame
    async fn present(&mut self, frame: Frame) -> Result<(), SinkError>;
}
