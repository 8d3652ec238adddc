//! Scoreboard console output

use anyhow::Context;
use integration_scoreboard::{
    EspnScoreboardClient, GameState, ScoreboardClient, ScoreboardConfig, format_scoreboard,
};

/// Fetch the scoreboard and print games in the requested state
pub async fn run(config: &ScoreboardConfig, state: GameState) -> anyhow::Result<()> {
    let client =
        EspnScoreboardClient::new(config.clone()).context("building scoreboard client")?;
    let scoreboard = client
        .fetch_scoreboard()
        .await
        .context("fetching scoreboard")?;

    println!("{}", format_scoreboard(&scoreboard, state));
    Ok(())
}
