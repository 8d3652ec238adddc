//! In-memory grayscale framebuffer
//!
//! The panel is 250x122 at one bit per pixel, but composition happens in
//! 8-bit grayscale so inversion is a plain per-pixel complement. Packing
//! down to the panel's bit format happens at the very end.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Gray8;
use embedded_graphics::prelude::*;

/// Panel width in pixels
pub const DISPLAY_WIDTH: u32 = 250;

/// Panel height in pixels
pub const DISPLAY_HEIGHT: u32 = 122;

/// One composed raster, white background with black content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Create a panel-sized frame filled with white
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }

    /// Create a frame of an arbitrary size filled with white
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xFF; (width * height) as usize],
        }
    }

    /// Frame width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Luma value at a coordinate, None when out of bounds
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Complement every pixel in place
    ///
    /// Applying this twice restores the original frame.
    pub fn invert(&mut self) {
        for px in &mut self.pixels {
            *px = 255 - *px;
        }
    }

    /// A copy rotated by 180 degrees
    ///
    /// The panel is mounted upside down in the enclosure, so the buffer is
    /// flipped before it is written out.
    #[must_use]
    pub fn rotated_180(&self) -> Self {
        let mut pixels = self.pixels.clone();
        pixels.reverse();
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Pack into the panel's native 1-bit layout, MSB first, set bit = white
    ///
    /// The controller is portrait: it scans rows of `height` pixels, one
    /// row per landscape column, so the frame gets a quarter turn while
    /// packing. Rows are padded to a whole byte, matching the panel's
    /// line stride.
    #[must_use]
    pub fn to_packed_portrait_1bpp(&self) -> Vec<u8> {
        let stride = (self.height as usize).div_ceil(8);
        let mut packed = vec![0u8; stride * self.width as usize];

        for py in 0..self.width {
            for px in 0..self.height {
                let x = py;
                let y = self.height - 1 - px;
                if self.pixels[(y * self.width + x) as usize] >= 128 {
                    let byte = py as usize * stride + px as usize / 8;
                    packed[byte] |= 0x80 >> (px % 8);
                }
            }
        }
        packed
    }

    /// Fraction of pixels that are dark, handy for sanity checks
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn dark_ratio(&self) -> f32 {
        let dark = self.pixels.iter().filter(|&&px| px < 128).count();
        dark as f32 / self.pixels.len() as f32
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Frame {
    type Color = Gray8;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.width
                && (point.y as u32) < self.height
            {
                let idx = (point.y as u32 * self.width + point.x as u32) as usize;
                self.pixels[idx] = color.luma();
            }
        }
        Ok(())
    }
}
