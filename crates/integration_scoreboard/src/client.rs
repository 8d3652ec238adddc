//! ESPN scoreboard client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::Scoreboard;

/// Scoreboard client errors
#[derive(Debug, Error)]
pub enum ScoreboardError {
    /// Connection to the scoreboard service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the scoreboard service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the scoreboard response
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Scoreboard integration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardConfig {
    /// Scoreboard API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 15)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://site.api.espn.com/apis/site/v2/sports/football/nfl".to_string()
}

const fn default_timeout() -> u64 {
    15
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Trait for scoreboard clients
#[async_trait]
pub trait ScoreboardClient: Send + Sync {
    /// Fetch the current scoreboard
    async fn fetch_scoreboard(&self) -> Result<Scoreboard, ScoreboardError>;
}

/// HTTP scoreboard client against the ESPN site API
#[derive(Debug)]
pub struct EspnScoreboardClient {
    client: Client,
    config: ScoreboardConfig,
}

impl EspnScoreboardClient {
    /// Create a new scoreboard client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ScoreboardConfig) -> Result<Self, ScoreboardError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ScoreboardError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ScoreboardClient for EspnScoreboardClient {
    #[instrument(skip(self))]
    async fn fetch_scoreboard(&self) -> Result<Scoreboard, ScoreboardError> {
        let url = format!("{}/scoreboard", self.config.base_url);
        debug!(url = %url, "Fetching scoreboard");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ScoreboardError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoreboardError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| ScoreboardError::ParseError(e.to_string()))
    }
}
