//! Rendering layer
//!
//! Turns one tick's data into the panel raster: compose a [`Scene`], then
//! [`rasterize`] it into a [`Frame`]. Everything here is pure and runs the
//! same against the hardware panel and the simulator window.

pub mod frame;
pub mod icons;
pub mod scene;
pub mod text;

pub use frame::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Frame};
pub use icons::{ICON_SIZE, draw_icon};
pub use scene::{Scene, rasterize};
pub use text::{HAlign, VAlign, aligned_origin, draw_text, measure_block};
