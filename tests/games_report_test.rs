//! End-to-end game day report against mocked schedule and weather APIs

use chrono::NaiveDate;
use nfl_weather_factors::{
    commands::games::games_report, providers::WeatherSettings, reference::ReferenceData,
};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn event(home: &str, away: &str, venue: &str) -> serde_json::Value {
    json!({
        "date": "2024-12-22T18:00Z",
        "competitions": [{
            "date": "2024-12-22T18:00Z",
            "venue": { "fullName": venue },
            "competitors": [
                { "homeAway": "home", "team": { "displayName": home } },
                { "homeAway": "away", "team": { "displayName": away } }
            ],
            "status": { "type": { "description": "Scheduled" } }
        }]
    })
}

fn weather(main: &str, temp: f64, wind: f64) -> serde_json::Value {
    json!({
        "weather": [{ "main": main, "description": main.to_lowercase() }],
        "main": { "temp": temp, "humidity": 70 },
        "wind": { "speed": wind },
        "visibility": 8000
    })
}

fn game_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 22).unwrap()
}

#[tokio::test]
async fn test_games_report_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .and(query_param("dates", "20241222"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [
                event("Detroit Lions", "Chicago Bears", "Ford Field"),
                event("Green Bay Packers", "Miami Dolphins", "Lambeau Field"),
                event("Seattle Seahawks", "Minnesota Vikings", "Lumen Field")
            ]
        })))
        .mount(&mock_server)
        .await;

    // Lambeau
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "44.5013"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather("Snow", 14.6, 21.8)))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Lumen Field is down
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "47.5952"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let settings = WeatherSettings::new("test-key")
        .with_base_url(mock_server.uri())
        .with_timeout(Duration::from_secs(2));
    let reference = ReferenceData::builtin();

    let report = games_report(
        &Client::new(),
        &settings,
        &mock_server.uri(),
        game_day(),
        &reference,
    )
    .await;

    assert_eq!(report.date, game_day());
    assert!(report.message.is_none());
    assert_eq!(report.stadium_factors.len(), 3);

    let lambeau = &report.stadium_factors[0];
    assert_eq!(lambeau.stadium_name, "Lambeau Field");
    assert_eq!(lambeau.passing_factor, 0.582);
    assert_eq!(lambeau.weather_summary, "15°F, 22 mph wind, snow");
    assert!(lambeau.team_weather_advantage.advantage_score > 100);

    let lumen = &report.stadium_factors[1];
    assert_eq!(lumen.stadium_name, "Lumen Field");
    assert_eq!(lumen.weather_summary, "Weather unavailable");
    assert_eq!(lumen.passing_factor, 0.99);

    let ford = &report.stadium_factors[2];
    assert!(ford.is_dome);
    assert_eq!(ford.weather_summary, "Indoor (Dome)");
}

#[tokio::test]
async fn test_games_report_with_schedule_outage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let settings = WeatherSettings::new("test-key").with_base_url(mock_server.uri());
    let reference = ReferenceData::builtin();

    let report = games_report(
        &Client::new(),
        &settings,
        &mock_server.uri(),
        game_day(),
        &reference,
    )
    .await;

    assert!(report.stadium_factors.is_empty());
    assert_eq!(
        report.message.as_deref(),
        Some("No games scheduled for 2024-12-22")
    );
}
