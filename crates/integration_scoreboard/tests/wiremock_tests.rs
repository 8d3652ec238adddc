//! Integration tests for the scoreboard client using wiremock

use integration_scoreboard::{
    EspnScoreboardClient, GameState, ScoreboardClient, ScoreboardConfig, ScoreboardError,
    format_scoreboard,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> EspnScoreboardClient {
    EspnScoreboardClient::new(ScoreboardConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .expect("client should build")
}

fn scoreboard_body() -> serde_json::Value {
    serde_json::json!({
        "week": { "number": 8 },
        "events": [
            {
                "name": "Kansas City Chiefs at Buffalo Bills",
                "shortName": "KC @ BUF",
                "status": { "type": { "state": "in", "detail": "2:15 - 4th Quarter" } },
                "competitions": [{
                    "competitors": [
                        { "homeAway": "away", "score": "24",
                          "team": { "displayName": "Kansas City Chiefs", "abbreviation": "KC" } },
                        { "homeAway": "home", "score": "27",
                          "team": { "displayName": "Buffalo Bills", "abbreviation": "BUF" } }
                    ],
                    "venue": { "fullName": "Highmark Stadium" },
                    "broadcast": "CBS",
                    "status": { "displayClock": "2:15", "period": 4 }
                }]
            },
            {
                "name": "Detroit Lions at Minnesota Vikings",
                "shortName": "DET @ MIN",
                "status": { "type": { "state": "post", "detail": "Final" } },
                "competitions": [{
                    "competitors": [
                        { "homeAway": "away", "score": "31",
                          "team": { "displayName": "Detroit Lions", "abbreviation": "DET" } },
                        { "homeAway": "home", "score": "28",
                          "team": { "displayName": "Minnesota Vikings", "abbreviation": "MIN" } }
                    ]
                }]
            }
        ]
    })
}

#[tokio::test]
async fn fetches_and_deserializes_scoreboard() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scoreboard_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let scoreboard = client.fetch_scoreboard().await.expect("should fetch");

    assert_eq!(scoreboard.week_number(), Some(8));
    assert_eq!(scoreboard.events.len(), 2);
    assert_eq!(scoreboard.events_in_state(GameState::In).count(), 1);
    assert_eq!(scoreboard.events_in_state(GameState::Post).count(), 1);
}

#[tokio::test]
async fn formats_fetched_live_games() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scoreboard_body()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let scoreboard = client.fetch_scoreboard().await.expect("should fetch");

    let live = format_scoreboard(&scoreboard, GameState::In);
    assert!(live.contains("NFL WEEK 8 - LIVE GAMES"));
    assert!(live.contains("KC @ BUF"));
    assert!(live.contains("Clock: 2:15 - Period 4"));
    assert!(!live.contains("DET @ MIN"));
}

#[tokio::test]
async fn server_error_maps_to_request_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.fetch_scoreboard().await.expect_err("should fail");

    assert!(matches!(err, ScoreboardError::RequestFailed(_)));
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.fetch_scoreboard().await.expect_err("should fail");

    assert!(matches!(err, ScoreboardError::ParseError(_)));
}

#[tokio::test]
async fn empty_events_produce_placeholder_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "week": { "number": 8 }, "events": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let scoreboard = client.fetch_scoreboard().await.expect("should fetch");

    let out = format_scoreboard(&scoreboard, GameState::In);
    assert!(out.contains("No live games."));
}
