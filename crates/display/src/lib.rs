//! Display layer - panel and simulator sinks
//!
//! One [`OutputSink`] seam with two implementations: [`HardwareSink`]
//! drives the Waveshare panel through an opaque [`PanelDevice`], and
//! [`SimulationSink`] feeds the desktop window shell. [`hardware_detected`]
//! picks between them at startup.

pub mod hardware;
pub mod probe;
pub mod simulation;
pub mod sink;

#[cfg(feature = "simulator")]
pub mod shell;

#[cfg(feature = "panel")]
pub mod waveshare;

pub use hardware::{HardwareSink, PanelDevice};
pub use probe::{hardware_detected, is_panel_host};
pub use simulation::SimulationSink;
pub use sink::{OutputSink, SinkError};

#[cfg(feature = "simulator")]
pub use shell::SimulationShell;

#[cfg(feature = "panel")]
pub use waveshare::WaveshareDevice;
