//! Desktop simulator window
//!
//! Owns the SDL window on the main thread and polls the frame channel
//! every 100ms, keeping only the newest frame when several queued up.
//! Closing the window ends the loop.

use std::time::Duration;

use embedded_graphics::pixelcolor::Gray8;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use render::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Frame};
use tokio::sync::mpsc;
use tracing::info;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Window shell around the simulated panel
pub struct SimulationShell {
    receiver: mpsc::UnboundedReceiver<Frame>,
    title: String,
}

impl SimulationShell {
    /// Create a shell reading frames from the given channel
    #[must_use]
    pub fn new(receiver: mpsc::UnboundedReceiver<Frame>, title: impl Into<String>) -> Self {
        Self {
            receiver,
            title: title.into(),
        }
    }

    /// Run the window loop until the user closes it
    ///
    /// Blocks the calling thread; SDL wants to live on the main thread.
    pub fn run(mut self) {
        let mut display =
            SimulatorDisplay::<Gray8>::new(Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT));
        let settings = OutputSettingsBuilder::new().scale(3).build();
        let mut window = Window::new(&self.title, &settings);

        info!("Simulator window open");
        'shell: loop {
            let mut latest = None;
            while let Ok(frame) = self.receiver.try_recv() {
                latest = Some(frame);
            }
            if let Some(frame) = latest {
                blit(&frame, &mut display);
            }

            window.update(&display);
            for event in window.events() {
                if matches!(event, SimulatorEvent::Quit) {
                    info!("Simulator window closed");
                    break 'shell;
                }
            }

            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

/// Copy a frame into the simulator display pixel by pixel
fn blit(frame: &Frame, display: &mut SimulatorDisplay<Gray8>) {
    let pixels = (0..frame.height()).flat_map(|y| {
        (0..frame.width()).filter_map(move |x| {
            frame.get(x, y).map(|luma| {
                #[allow(clippy::cast_possible_wrap)]
                Pixel(Point::new(x as i32, y as i32), Gray8::new(luma))
            })
        })
    });

    match display.draw_iter(pixels) {
        Ok(()) => {},
        Err(e) => match e {},
    }
}
