//! Procedural weather glyphs
//!
//! Each condition is drawn from primitives into an 80x80 box, so the
//! binary ships no image assets and the glyphs invert cleanly at night.

use core::convert::Infallible;

use domain::Icon;
use embedded_graphics::pixelcolor::Gray8;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};

use crate::frame::Frame;

/// Side length of the square icon box
pub const ICON_SIZE: u32 = 80;

const STROKE: u32 = 2;

fn paint<T>(result: Result<T, Infallible>) {
    match result {
        Ok(_) => {},
        Err(e) => match e {},
    }
}

fn stroke() -> PrimitiveStyle<Gray8> {
    PrimitiveStyle::with_stroke(Gray8::BLACK, STROKE)
}

fn fill_black() -> PrimitiveStyle<Gray8> {
    PrimitiveStyle::with_fill(Gray8::BLACK)
}

fn fill_white() -> PrimitiveStyle<Gray8> {
    PrimitiveStyle::with_fill(Gray8::WHITE)
}

/// Draw the glyph for a condition with its box anchored at `top_left`
pub fn draw_icon(frame: &mut Frame, icon: Icon, top_left: Point) {
    match icon {
        Icon::ClearDay => sun(frame, top_left + Point::new(40, 40), 16),
        Icon::ClearNight => moon(frame, top_left + Point::new(40, 40), 20),
        Icon::PartlyCloudyDay => {
            sun(frame, top_left + Point::new(28, 28), 11);
            cloud(frame, top_left + Point::new(14, 38));
        },
        Icon::PartlyCloudyNight => {
            moon(frame, top_left + Point::new(28, 26), 13);
            cloud(frame, top_left + Point::new(14, 38));
        },
        Icon::Overcast => cloud(frame, top_left + Point::new(14, 24)),
        Icon::Fog => {
            cloud(frame, top_left + Point::new(14, 14));
            for i in 0..3 {
                let y = 52 + i * 9;
                paint(
                    Line::new(top_left + Point::new(16, y), top_left + Point::new(64, y))
                        .into_styled(stroke())
                        .draw(frame),
                );
            }
        },
        Icon::Rain => {
            cloud(frame, top_left + Point::new(14, 14));
            for i in 0..4 {
                let x = 22 + i * 12;
                paint(
                    Line::new(top_left + Point::new(x, 52), top_left + Point::new(x - 5, 66))
                        .into_styled(stroke())
                        .draw(frame),
                );
            }
        },
        Icon::RainSnowMix => {
            cloud(frame, top_left + Point::new(14, 14));
            for i in 0..4 {
                let x = 22 + i * 12;
                if i % 2 == 0 {
                    paint(
                        Line::new(top_left + Point::new(x, 52), top_left + Point::new(x - 4, 64))
                            .into_styled(stroke())
                            .draw(frame),
                    );
                } else {
                    flake(frame, top_left + Point::new(x, 60), 4);
                }
            }
        },
        Icon::Snow => {
            cloud(frame, top_left + Point::new(14, 14));
            for i in 0..3 {
                flake(frame, top_left + Point::new(22 + i * 16, 60), 5);
            }
        },
        Icon::Thunderstorm => {
            cloud(frame, top_left + Point::new(14, 14));
            paint(
                Triangle::new(
                    top_left + Point::new(42, 48),
                    top_left + Point::new(30, 62),
                    top_left + Point::new(40, 62),
                )
                .into_styled(fill_black())
                .draw(frame),
            );
            paint(
                Triangle::new(
                    top_left + Point::new(44, 56),
                    top_left + Point::new(34, 72),
                    top_left + Point::new(36, 58),
                )
                .into_styled(fill_black())
                .draw(frame),
            );
        },
    }
}

/// Disc with eight rays
fn sun(frame: &mut Frame, center: Point, radius: u32) {
    paint(
        Circle::with_center(center, radius * 2)
            .into_styled(fill_black())
            .draw(frame),
    );

    let reach = radius as i32 + 10;
    let near = radius as i32 + 4;
    let diag_near = (near * 7 + 5) / 10;
    let diag_reach = (reach * 7 + 5) / 10;
    let rays = [
        (Point::new(0, -near), Point::new(0, -reach)),
        (Point::new(0, near), Point::new(0, reach)),
        (Point::new(-near, 0), Point::new(-reach, 0)),
        (Point::new(near, 0), Point::new(reach, 0)),
        (
            Point::new(diag_near, diag_near),
            Point::new(diag_reach, diag_reach),
        ),
        (
            Point::new(-diag_near, diag_near),
            Point::new(-diag_reach, diag_reach),
        ),
        (
            Point::new(diag_near, -diag_near),
            Point::new(diag_reach, -diag_reach),
        ),
        (
            Point::new(-diag_near, -diag_near),
            Point::new(-diag_reach, -diag_reach),
        ),
    ];
    for (from, to) in rays {
        paint(
            Line::new(center + from, center + to)
                .into_styled(stroke())
                .draw(frame),
        );
    }
}

/// Crescent, a disc with an offset white disc punched out
fn moon(frame: &mut Frame, center: Point, radius: u32) {
    paint(
        Circle::with_center(center, radius * 2)
            .into_styled(fill_black())
            .draw(frame),
    );
    paint(
        Circle::with_center(center + Point::new(radius as i32 / 2, -(radius as i32) / 3), radius * 2)
            .into_styled(fill_white())
            .draw(frame),
    );
}

/// Two lobes over a flat base, drawn from the box's top-left corner
fn cloud(frame: &mut Frame, top_left: Point) {
    paint(
        Circle::new(top_left + Point::new(6, 12), 24)
            .into_styled(fill_black())
            .draw(frame),
    );
    paint(
        Circle::new(top_left + Point::new(22, 2), 30)
            .into_styled(fill_black())
            .draw(frame),
    );
    paint(
        Rectangle::new(top_left + Point::new(10, 20), Size::new(42, 16))
            .into_styled(fill_black())
            .draw(frame),
    );
}

/// Six-armed asterisk
fn flake(frame: &mut Frame, center: Point, arm: i32) {
    let arms = [
        (Point::new(0, -arm), Point::new(0, arm)),
        (Point::new(-arm, -arm / 2), Point::new(arm, arm / 2)),
        (Point::new(-arm, arm / 2), Point::new(arm, -arm / 2)),
    ];
    for (from, to) in arms {
        paint(
            Line::new(center + from, center + to)
                .into_styled(PrimitiveStyle::with_stroke(Gray8::BLACK, 1))
                .draw(frame),
        );
    }
}
