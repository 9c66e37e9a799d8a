//! Stadiums command implementation

use chrono::NaiveDate;
use reqwest::Client;
use tracing::info;

use crate::{
    cli::{types::GameDate, LiveOptions},
    providers::{http_client, WeatherSettings},
    reference::ReferenceData,
    scoring::{build_report, ScheduledGame, StadiumFactorsReport},
    Result,
};

use super::{
    common::{resolve_inputs, sample_visitor},
    load_reference,
    output::print_report,
    weather_settings,
};

/// One game per reference stadium, home team against a sample visitor.
pub fn sample_games(reference: &ReferenceData, date: NaiveDate) -> Vec<ScheduledGame> {
    reference
        .stadiums
        .iter()
        .map(|(name, stadium)| ScheduledGame {
            stadium_name: name.to_string(),
            home_team: stadium.home_team.clone(),
            away_team: sample_visitor(stadium.is_dome).to_string(),
            kickoff_time: None,
            date,
            status: None,
        })
        .collect()
}

/// Every reference stadium scored under its current weather.
pub async fn stadiums_report(
    client: &Client,
    settings: &WeatherSettings,
    date: NaiveDate,
    reference: &ReferenceData,
) -> StadiumFactorsReport {
    let games = sample_games(reference, date);
    info!(stadiums = games.len(), "scoring reference stadiums");

    let inputs = resolve_inputs(client, settings, games, reference).await;
    build_report(date, &inputs, reference)
}

/// Handle the stadiums command
pub async fn handle_stadiums(options: LiveOptions) -> Result<()> {
    let settings = weather_settings(&options)?;
    let reference = load_reference(options.reference.clone())?;
    let client = http_client()?;

    // tarpaulin::skip - HTTP calls, tested via stadiums_report
    let report = stadiums_report(
        &client,
        &settings,
        GameDate::today().as_naive_date(),
        &reference,
    )
    .await;

    print_report(&report, options.json)
}
