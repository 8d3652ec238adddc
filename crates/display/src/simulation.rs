//! Simulation sink
//!
//! Frames cross from the async tick pipeline to the windowing thread over
//! an unbounded channel. Sending never blocks a tick; the shell keeps only
//! the newest frame when it falls behind.

use async_trait::async_trait;
use render::Frame;
use tokio::sync::mpsc;
use tracing::debug;

use crate::sink::{OutputSink, SinkError};

/// Sink that forwards frames to the simulator window
#[derive(Debug)]
pub struct SimulationSink {
    sender: mpsc::UnboundedSender<Frame>,
}

impl SimulationSink {
    /// Create a sink and the receiving end for the window shell
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Frame>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl OutputSink for SimulationSink {
    async fn present(&mut self, frame: Frame) -> Result<(), SinkError> {
        debug!("Forwarding frame to simulator window");
        self.sender.send(frame).map_err(|_| SinkError::ShellClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn presented_frames_arrive_on_the_receiver() {
        let (mut sink, mut receiver) = SimulationSink::channel();

        sink.present(Frame::new()).await.expect("send succeeds");

        let frame = receiver.try_recv().expect("frame waiting");
        assert_eq!(frame.width(), render::DISPLAY_WIDTH);
    }

    #[tokio::test]
    async fn newer_frames_queue_behind_older_ones() {
        let (mut sink, mut receiver) = SimulationSink::channel();

        let mut inverted = Frame::new();
        inverted.invert();
        sink.present(Frame::new()).await.expect("send succeeds");
        sink.present(inverted.clone()).await.expect("send succeeds");

        // Draining keeps the latest
        let mut latest = None;
        while let Ok(frame) = receiver.try_recv() {
            latest = Some(frame);
        }
        assert_eq!(latest, Some(inverted));
    }

    #[tokio::test]
    async fn closed_shell_surfaces_as_an_error() {
        let (mut sink, receiver) = SimulationSink::channel();
        drop(receiver);

        let err = sink.present(Frame::new()).await.expect_err("shell gone");
        assert!(matches!(err, SinkError::ShellClosed));
    }
}
