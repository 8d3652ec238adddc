//! Scoreboard integration
//!
//! Independent of the weather pipeline: fetches an ESPN-style scoreboard,
//! filters events by game state and formats them for the console. Shares no
//! state with the display loop.

mod client;
mod format;
mod models;

pub use client::{EspnScoreboardClient, ScoreboardClient, ScoreboardConfig, ScoreboardError};
pub use format::{format_event, format_scoreboard};
pub use models::{Competitor, Event, GameState, Scoreboard, Team};
