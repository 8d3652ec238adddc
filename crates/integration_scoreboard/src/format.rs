//! Console formatting for scoreboard events

use crate::models::{Event, GameState, Scoreboard};

/// Format one event as a multi-line console block
#[must_use]
pub fn format_event(index: usize, event: &Event) -> String {
    let mut out = String::new();
    out.push_str(&format!("Game {index}: {}\n", event.short_name));
    if let Some(venue) = event.venue_name() {
        out.push_str(&format!("  Venue: {venue}\n"));
    }
    if let Some(broadcast) = event.broadcast() {
        out.push_str(&format!("  Broadcast: {broadcast}\n"));
    }
    out.push_str(&format!("  Status: {}\n", event.status_detail()));

    if event.state() == Some(GameState::In) {
        let (clock, period) = event.clock();
        out.push_str(&format!("  Clock: {clock} - Period {period}\n"));
    }

    for competitor in [event.away(), event.home()].into_iter().flatten() {
        out.push_str(&format!(
            "  {:<4} {:>3}  |  {}\n",
            competitor.team.abbreviation,
            competitor.score_or_zero(),
            competitor.team.display_name
        ));
    }
    out
}

/// Format the whole scoreboard, filtered to one game state
#[must_use]
pub fn format_scoreboard(scoreboard: &Scoreboard, state: GameState) -> String {
    let week = scoreboard
        .week_number()
        .map_or_else(|| "?".to_string(), |n| n.to_string());

    let mut out = format!("NFL WEEK {week} - {} GAMES\n", state.to_string().to_uppercase());
    out.push_str(&"=".repeat(60));
    out.push('\n');

    let events: Vec<_> = scoreboard.events_in_state(state).collect();
    if events.is_empty() {
        out.push_str(&format!("No {state} games.\n"));
        return out;
    }

    for (i, event) in events.iter().enumerate() {
        out.push_str(&format_event(i + 1, event));
        out.push_str(&"-".repeat(40));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_scoreboard;

    #[test]
    fn live_block_contains_scores_venue_and_clock() {
        let sb = sample_scoreboard();
        let block = format_event(1, &sb.events[0]);
        assert!(block.contains("Game 1: DAL @ PHI"));
        assert!(block.contains("Venue: Lincoln Financial Field"));
        assert!(block.contains("Broadcast: FOX"));
        assert!(block.contains("Clock: 10:32 - Period 3"));
        assert!(block.contains("DAL   21  |  Dallas Cowboys"));
        assert!(block.contains("PHI   17  |  Philadelphia Eagles"));
    }

    #[test]
    fn pre_game_block_has_no_clock_line() {
        let sb = sample_scoreboard();
        let block = format_event(1, &sb.events[1]);
        assert!(block.contains("Status: Sun 12:00 PM CST"));
        assert!(!block.contains("Clock:"));
        assert!(block.contains("GB     0  |  Green Bay Packers"));
    }

    #[test]
    fn scoreboard_filters_to_requested_state() {
        let sb = sample_scoreboard();

        let live = format_scoreboard(&sb, GameState::In);
        assert!(live.contains("NFL WEEK 12 - LIVE GAMES"));
        assert!(live.contains("DAL @ PHI"));
        assert!(!live.contains("GB @ CHI"));

        let pre = format_scoreboard(&sb, GameState::Pre);
        assert!(pre.contains("GB @ CHI"));
        assert!(!pre.contains("DAL @ PHI"));
    }

    #[test]
    fn empty_state_prints_placeholder() {
        let sb = sample_scoreboard();
        let post = format_scoreboard(&sb, GameState::Post);
        assert!(post.contains("No completed games."));
    }
}
