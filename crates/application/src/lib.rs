//! Application layer - the tick pipeline and its schedule
//!
//! Fetch, compose, rasterize, present: [`TickService`] runs one tick;
//! [`scheduler::run_loop`] repeats it on quarter-hour boundaries.

pub mod scheduler;
pub mod tick;

pub use scheduler::{TICK_PERIOD_SECS, run_loop, secs_until_next_tick};
pub use tick::TickService;
