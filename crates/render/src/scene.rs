//! Scene composition and rasterization
//!
//! A [`Scene`] is the declarative description of one panel refresh: which
//! glyph, which text columns, whether the palette is inverted. Composition
//! from a [`TickContext`] is pure and cheap to assert on; [`rasterize`]
//! turns the scene into pixels.

use domain::{Icon, TickContext, TickOutcome, Units};
use embedded_graphics::mono_font::iso_8859_1::{FONT_6X13, FONT_9X15};
use embedded_graphics::prelude::*;

use crate::frame::Frame;
use crate::icons::draw_icon;
use crate::text::{HAlign, VAlign, draw_text};

/// Icon box position
const ICON_ANCHOR: Point = Point::new(20, 20);

/// Left text column anchor, vertically centered on the icon
const LEFT_COLUMN_ANCHOR: Point = Point::new(112, 51);

/// Right text column anchor
const RIGHT_COLUMN_ANCHOR: Point = Point::new(182, 51);

/// Bottom-center anchor for the "updated at" line
const TIMESTAMP_ANCHOR: Point = Point::new(125, 120);

/// Anchors for the two error lines
const ERROR_LINE_ANCHORS: [Point; 2] = [Point::new(125, 30), Point::new(125, 60)];

/// Declarative description of one panel refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scene {
    /// Normal weather layout
    Weather {
        /// Condition glyph, already night-adjusted
        icon: Icon,
        /// Actual temperature, wind speed and direction, one value per line
        left_column: String,
        /// Feels-like temperature, gusts and humidity, one value per line
        right_column: String,
        /// "Updated at" footer
        updated_line: String,
        /// Whether the palette flips to white-on-black
        invert: bool,
    },
    /// Fetch-failure layout, two message lines and nothing else
    Error {
        /// Headline and failure detail
        lines: [String; 2],
    },
}

impl Scene {
    /// Compose the scene for one tick
    #[must_use]
    pub fn compose(ctx: &TickContext, units: Units) -> Self {
        match &ctx.outcome {
            TickOutcome::Observation(obs) => {
                let updated_line = ctx.local_time.format("Updated at %m/%d %H:%M").to_string();
                let icon = {
                    let base = Icon::from_weather_code(obs.weather_code);
                    if ctx.is_night { base.night_variant() } else { base }
                };
                let degree = units.temperature.symbol();
                let wind = units.wind.label();

                Self::Weather {
                    icon,
                    left_column: format!(
                        "{:.0}{degree}\n{:.0} {wind}\n{}\u{b0}",
                        obs.temperature, obs.wind_speed, obs.wind_direction
                    ),
                    right_column: format!(
                        "{:.0}{degree}\n{:.0} {wind}\n{}%",
                        obs.apparent_temperature, obs.wind_gusts, obs.humidity
                    ),
                    updated_line,
                    invert: ctx.is_night,
                }
            },
            TickOutcome::Failed { message } => Self::Error {
                lines: ["Weather unavailable".to_string(), message.clone()],
            },
        }
    }
}

/// Rasterize a scene into a panel-sized frame
#[must_use]
pub fn rasterize(scene: &Scene) -> Frame {
    let mut frame = Frame::new();

    match scene {
        Scene::Weather {
            icon,
            left_column,
            right_column,
            updated_line,
            invert,
        } => {
            draw_icon(&mut frame, *icon, ICON_ANCHOR);
            draw_text(
                &mut frame,
                left_column,
                LEFT_COLUMN_ANCHOR,
                &FONT_9X15,
                HAlign::Left,
                VAlign::Middle,
            );
            draw_text(
                &mut frame,
                right_column,
                RIGHT_COLUMN_ANCHOR,
                &FONT_9X15,
                HAlign::Left,
                VAlign::Middle,
            );
            draw_text(
                &mut frame,
                updated_line,
                TIMESTAMP_ANCHOR,
                &FONT_6X13,
                HAlign::Center,
                VAlign::Bottom,
            );
            if *invert {
                frame.invert();
            }
        },
        Scene::Error { lines } => {
            for (line, anchor) in lines.iter().zip(ERROR_LINE_ANCHORS) {
                draw_text(&mut frame, line, anchor, &FONT_6X13, HAlign::Center, VAlign::Top);
            }
        },
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domain::WeatherObservation;

    fn observation() -> WeatherObservation {
        WeatherObservation {
            temperature: 72.4,
            apparent_temperature: 70.1,
            wind_speed: 5.0,
            wind_gusts: 10.0,
            wind_direction: 180,
            humidity: 40,
            weather_code: 0,
            sunrise: Utc.with_ymd_and_hms(2025, 6, 21, 10, 26, 0).single().expect("valid"),
            sunset: Utc.with_ymd_and_hms(2025, 6, 22, 2, 3, 0).single().expect("valid"),
        }
    }

    fn context_at(hour: u32) -> TickContext {
        let now = Utc.with_ymd_and_hms(2025, 6, 21, hour, 0, 0).single().expect("valid");
        TickContext::new(
            domain::TickOutcome::Observation(observation()),
            now,
            chrono_tz::America::Chicago,
        )
    }

    #[test]
    fn daytime_scene_uses_day_icon_and_normal_palette() {
        let scene = Scene::compose(&context_at(18), Units::default());

        let Scene::Weather {
            icon,
            left_column,
            right_column,
            updated_line,
            invert,
        } = scene
        else {
            panic!("expected weather scene");
        };

        assert_eq!(icon, Icon::ClearDay);
        assert!(!invert);
        assert_eq!(left_column, "72°F\n5 MPH\n180°");
        assert_eq!(right_column, "70°F\n10 MPH\n40%");
        // 18:00 UTC is 13:00 in Chicago in June
        assert_eq!(updated_line, "Updated at 06/21 13:00");
    }

    #[test]
    fn night_scene_swaps_icon_and_inverts() {
        let scene = Scene::compose(&context_at(8), Units::default());

        let Scene::Weather { icon, invert, .. } = scene else {
            panic!("expected weather scene");
        };
        assert_eq!(icon, Icon::ClearNight);
        assert!(invert);
    }

    #[test]
    fn failed_tick_composes_error_scene() {
        let now = Utc.with_ymd_and_hms(2025, 6, 21, 18, 0, 0).single().expect("valid");
        let ctx = TickContext::new(
            domain::TickOutcome::Failed {
                message: "connection refused".to_string(),
            },
            now,
            chrono_tz::America::Chicago,
        );

        let scene = Scene::compose(&ctx, Units::default());
        let Scene::Error { lines } = scene else {
            panic!("expected error scene");
        };
        assert_eq!(lines[0], "Weather unavailable");
        assert_eq!(lines[1], "connection refused");
    }

    #[test]
    fn rasterized_day_frame_has_white_margins() {
        let frame = rasterize(&Scene::compose(&context_at(18), Units::default()));
        assert!(frame.dark_ratio() > 0.0);
        assert_eq!(frame.get(0, 0), Some(255));
        assert_eq!(frame.get(249, 0), Some(255));
    }

    #[test]
    fn rasterized_night_frame_has_dark_margins() {
        let frame = rasterize(&Scene::compose(&context_at(8), Units::default()));
        assert_eq!(frame.get(0, 0), Some(0));
        assert_eq!(frame.get(249, 121), Some(0));
        assert!(frame.dark_ratio() > 0.5);
    }

    #[test]
    fn inverted_frame_is_the_complement_of_the_day_layout() {
        let scene = Scene::compose(&context_at(18), Units::default());
        let Scene::Weather {
            icon,
            left_column,
            right_column,
            updated_line,
            ..
        } = scene
        else {
            panic!("expected weather scene");
        };

        let day = rasterize(&Scene::Weather {
            icon,
            left_column: left_column.clone(),
            right_column: right_column.clone(),
            updated_line: updated_line.clone(),
            invert: false,
        });
        let mut night = rasterize(&Scene::Weather {
            icon,
            left_column,
            right_column,
            updated_line,
            invert: true,
        });

        night.invert();
        assert_eq!(day, night);
    }

    #[test]
    fn error_frame_renders_both_lines() {
        let scene = Scene::Error {
            lines: [
                "Weather unavailable".to_string(),
                "HTTP 503".to_string(),
            ],
        };
        let frame = rasterize(&scene);
        assert!(frame.dark_ratio() > 0.0);
        // Error layout never inverts
        assert_eq!(frame.get(0, 0), Some(255));
    }

    #[test]
    fn error_frame_has_no_footer() {
        let scene = Scene::Error {
            lines: [
                "Weather unavailable".to_string(),
                "HTTP 503".to_string(),
            ],
        };
        let frame = rasterize(&scene);

        // The two message lines are all the error layout shows
        for y in 90..frame.height() {
            for x in 0..frame.width() {
                assert_eq!(frame.get(x, y), Some(255), "ink at ({x}, {y})");
            }
        }
    }

    #[test]
    fn rainy_night_keeps_rain_icon() {
        let mut obs = observation();
        obs.weather_code = 61;
        let now = Utc.with_ymd_and_hms(2025, 6, 21, 8, 0, 0).single().expect("valid");
        let ctx = TickContext::new(
            domain::TickOutcome::Observation(obs),
            now,
            chrono_tz::America::Chicago,
        );

        let scene = Scene::compose(&ctx, Units::default());
        let Scene::Weather { icon, invert, .. } = scene else {
            panic!("expected weather scene");
        };
        assert_eq!(icon, Icon::Rain);
        assert!(invert);
    }
}
