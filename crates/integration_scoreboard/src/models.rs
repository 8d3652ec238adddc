//! Scoreboard response models
//!
//! Mirrors the ESPN site API's scoreboard shape, keeping only what the
//! console output needs.

use serde::Deserialize;

/// Game lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// Scheduled, not started
    Pre,
    /// In progress
    In,
    /// Finished
    Post,
}

impl std::str::FromStr for GameState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pre" => Ok(Self::Pre),
            "in" | "live" => Ok(Self::In),
            "post" => Ok(Self::Post),
            _ => Err(format!("Invalid game state: {s}. Use 'pre', 'in' or 'post'")),
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pre => write!(f, "scheduled"),
            Self::In => write!(f, "live"),
            Self::Post => write!(f, "completed"),
        }
    }
}

/// Top-level scoreboard response
#[derive(Debug, Clone, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    pub events: Vec<Event>,
    pub week: Option<Week>,
}

impl Scoreboard {
    /// Events currently in the given state
    pub fn events_in_state(&self, state: GameState) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.state() == Some(state))
    }

    /// Week number, if the response carries one
    #[must_use]
    pub fn week_number(&self) -> Option<u32> {
        self.week.as_ref().map(|w| w.number)
    }
}

/// Week block
#[derive(Debug, Clone, Deserialize)]
pub struct Week {
    pub number: u32,
}

/// One scheduled, live or finished game
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    pub short_name: String,
    pub status: EventStatus,
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

impl Event {
    /// Lifecycle state of this event
    #[must_use]
    pub fn state(&self) -> Option<GameState> {
        self.status.kind.as_ref().map(|k| k.state)
    }

    /// Status detail line ("Halftime", "Final", kickoff time)
    #[must_use]
    pub fn status_detail(&self) -> &str {
        self.status
            .kind
            .as_ref()
            .and_then(|k| k.detail.as_deref())
            .unwrap_or("In Progress")
    }

    fn competition(&self) -> Option<&Competition> {
        self.competitions.first()
    }

    /// The away competitor (first listed when `homeAway` is absent)
    #[must_use]
    pub fn away(&self) -> Option<&Competitor> {
        self.competitor("away", 0)
    }

    /// The home competitor (second listed when `homeAway` is absent)
    #[must_use]
    pub fn home(&self) -> Option<&Competitor> {
        self.competitor("home", 1)
    }

    fn competitor(&self, side: &str, fallback: usize) -> Option<&Competitor> {
        let competitors = &self.competition()?.competitors;
        competitors
            .iter()
            .find(|c| c.home_away.as_deref() == Some(side))
            .or_else(|| competitors.get(fallback))
    }

    /// Venue name, if present
    #[must_use]
    pub fn venue_name(&self) -> Option<&str> {
        self.competition()?.venue.as_ref().map(|v| v.full_name.as_str())
    }

    /// Broadcast channel, if present
    #[must_use]
    pub fn broadcast(&self) -> Option<&str> {
        self.competition()?.broadcast.as_deref()
    }

    /// Game clock and period for a live game
    #[must_use]
    pub fn clock(&self) -> (String, u8) {
        let status = self.competition().and_then(|c| c.status.as_ref());
        let clock = status
            .and_then(|s| s.display_clock.clone())
            .unwrap_or_else(|| "0:00".to_string());
        let period = status.and_then(|s| s.period).unwrap_or(0);
        (clock, period)
    }
}

/// Event status wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct EventStatus {
    #[serde(rename = "type")]
    pub kind: Option<StatusType>,
}

/// Event status type
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusType {
    pub state: GameState,
    #[serde(default)]
    pub detail: Option<String>,
}

/// One competition of an event (events carry exactly one)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    pub venue: Option<Venue>,
    #[serde(default)]
    pub broadcast: Option<String>,
    pub status: Option<CompetitionStatus>,
}

/// Clock state of a competition
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionStatus {
    #[serde(default)]
    pub display_clock: Option<String>,
    #[serde(default)]
    pub period: Option<u8>,
}

/// One side of a competition
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    #[serde(default)]
    pub home_away: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
    pub team: Team,
}

impl Competitor {
    /// Score string, "0" when the game has not started
    #[must_use]
    pub fn score_or_zero(&self) -> &str {
        self.score.as_deref().unwrap_or("0")
    }
}

/// Team identity
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub display_name: String,
    pub abbreviation: String,
}

/// Venue block
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub full_name: String,
}

/// Fixture shared by model and formatter tests
#[cfg(test)]
pub(crate) fn sample_scoreboard() -> Scoreboard {
    let body = serde_json::json!({
        "week": { "number": 12 },
        "events": [
            {
                "name": "Dallas Cowboys at Philadelphia Eagles",
                "shortName": "DAL @ PHI",
                "status": { "type": { "state": "in", "detail": "10:32 - 3rd Quarter" } },
                "competitions": [{
                    "competitors": [
                        { "homeAway": "away", "score": "21",
                          "team": { "displayName": "Dallas Cowboys", "abbreviation": "DAL" } },
                        { "homeAway": "home", "score": "17",
                          "team": { "displayName": "Philadelphia Eagles", "abbreviation": "PHI" } }
                    ],
                    "venue": { "fullName": "Lincoln Financial Field" },
                    "broadcast": "FOX",
                    "status": { "displayClock": "10:32", "period": 3 }
                }]
            },
            {
                "name": "Green Bay Packers at Chicago Bears",
                "shortName": "GB @ CHI",
                "status": { "type": { "state": "pre", "detail": "Sun 12:00 PM CST" } },
                "competitions": [{
                    "competitors": [
                        { "homeAway": "away",
                          "team": { "displayName": "Green Bay Packers", "abbreviation": "GB" } },
                        { "homeAway": "home",
                          "team": { "displayName": "Chicago Bears", "abbreviation": "CHI" } }
                    ],
                    "venue": { "fullName": "Soldier Field" }
                }]
            }
        ]
    });
    serde_json::from_value(body).expect("valid scoreboard")
}
