//! Anchored text drawing
//!
//! Text blocks are placed by an anchor point plus horizontal and vertical
//! alignment. Alignment shifts the block's origin by half or all of its
//! measured size, so a centered line lands symmetrically around the anchor.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Gray8;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::frame::Frame;

/// Horizontal placement relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical placement relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Measure a block of text in the given font
///
/// Width is the widest line; height covers every line including empty ones.
#[must_use]
pub fn measure_block(font: &MonoFont<'_>, text: &str) -> Size {
    let advance = font.character_size.width + font.character_spacing;
    let width = text
        .lines()
        .map(|line| {
            let chars = line.chars().count() as u32;
            (chars * advance).saturating_sub(font.character_spacing)
        })
        .max()
        .unwrap_or(0);
    let lines = text.lines().count().max(1) as u32;
    Size::new(width, lines * font.character_size.height)
}

/// Shift an anchor into the top-left origin of a block of the given size
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn aligned_origin(anchor: Point, size: Size, halign: HAlign, valign: VAlign) -> Point {
    let dx = match halign {
        HAlign::Left => 0,
        HAlign::Center => size.width as i32 / 2,
        HAlign::Right => size.width as i32,
    };
    let dy = match valign {
        VAlign::Top => 0,
        VAlign::Middle => size.height as i32 / 2,
        VAlign::Bottom => size.height as i32,
    };
    Point::new(anchor.x - dx, anchor.y - dy)
}

/// Draw a block of text anchored at a point
///
/// The block is aligned as a whole; every line starts at the block's left
/// edge regardless of the horizontal alignment.
#[allow(clippy::cast_possible_wrap)]
pub fn draw_text(
    frame: &mut Frame,
    text: &str,
    anchor: Point,
    font: &'static MonoFont<'static>,
    halign: HAlign,
    valign: VAlign,
) {
    let style = MonoTextStyle::new(font, Gray8::BLACK);
    let block = measure_block(font, text);
    let block_origin = aligned_origin(anchor, block, halign, valign);

    for (i, line) in text.lines().enumerate() {
        let origin = Point::new(
            block_origin.x,
            block_origin.y + i as i32 * font.character_size.height as i32,
        );

        // Frame drawing is infallible
        let result = Text::with_baseline(line, origin, style, Baseline::Top).draw(frame);
        match result {
            Ok(_) => {},
            Err(e) => match e {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::iso_8859_1::{FONT_6X13, FONT_9X15};

    #[test]
    fn measure_single_line() {
        let size = measure_block(&FONT_6X13, "abc");
        // Three 6px glyphs, no spacing in this font
        assert_eq!(size, Size::new(18, 13));
    }

    #[test]
    fn measure_takes_widest_line() {
        let size = measure_block(&FONT_6X13, "ab\nlonger\nc");
        assert_eq!(size.width, 36);
        assert_eq!(size.height, 39);
    }

    #[test]
    fn measure_empty_text_is_one_line_tall() {
        let size = measure_block(&FONT_9X15, "");
        assert_eq!(size, Size::new(0, 15));
    }

    #[test]
    fn origin_shifts_by_half_for_center_middle() {
        let origin = aligned_origin(
            Point::new(100, 50),
            Size::new(40, 20),
            HAlign::Center,
            VAlign::Middle,
        );
        assert_eq!(origin, Point::new(80, 40));
    }

    #[test]
    fn origin_shifts_fully_for_right_bottom() {
        let origin = aligned_origin(
            Point::new(100, 50),
            Size::new(40, 20),
            HAlign::Right,
            VAlign::Bottom,
        );
        assert_eq!(origin, Point::new(60, 30));
    }

    #[test]
    fn origin_unchanged_for_left_top() {
        let anchor = Point::new(7, 9);
        assert_eq!(
            aligned_origin(anchor, Size::new(40, 20), HAlign::Left, VAlign::Top),
            anchor
        );
    }

    #[test]
    fn centered_block_keeps_lines_flush_left() {
        let mut frame = Frame::new();
        // Block is 12px wide, so its left edge lands at x = 119
        draw_text(
            &mut frame,
            "M\nMM",
            Point::new(125, 60),
            &FONT_6X13,
            HAlign::Center,
            VAlign::Middle,
        );

        let leftmost_ink = |rows: std::ops::Range<u32>| {
            (0..frame.width())
                .find(|&x| rows.clone().any(|y| frame.get(x, y) == Some(0)))
                .expect("line drew something")
        };

        // Both lines start at the block's left edge, not their own centers
        let top = leftmost_ink(47..60);
        let bottom = leftmost_ink(60..73);
        assert_eq!(top, bottom);
        assert!(top >= 119);
    }

    #[test]
    fn drawing_marks_pixels_near_the_anchor() {
        let mut frame = Frame::new();
        draw_text(
            &mut frame,
            "X",
            Point::new(125, 60),
            &FONT_9X15,
            HAlign::Center,
            VAlign::Middle,
        );
        assert!(frame.dark_ratio() > 0.0);

        // All ink stays within the glyph box around the anchor
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if frame.get(x, y) == Some(0) {
                    assert!((118..=133).contains(&x), "x={x}");
                    assert!((51..=69).contains(&y), "y={y}");
                }
            }
        }
    }
}
