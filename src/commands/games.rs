//! Games command implementation

use chrono::NaiveDate;
use reqwest::Client;
use tracing::info;

use crate::{
    cli::{types::GameDate, LiveOptions},
    providers::{fetch_schedule_with_base_url, http_client, WeatherSettings, ESPN_NFL_BASE_URL},
    reference::ReferenceData,
    scoring::{build_report, StadiumFactorsReport},
    Result,
};

use super::{common::resolve_inputs, load_reference, output::print_report, weather_settings};

/// Schedule, weather and scoring for every game on `date`.
pub async fn games_report(
    client: &Client,
    settings: &WeatherSettings,
    schedule_base_url: &str,
    date: NaiveDate,
    reference: &ReferenceData,
) -> StadiumFactorsReport {
    let games =
        fetch_schedule_with_base_url(client, schedule_base_url, date, &reference.stadiums).await;
    info!(%date, games = games.len(), "schedule loaded");

    let inputs = resolve_inputs(client, settings, games, reference).await;
    build_report(date, &inputs, reference)
}

/// Handle the games command
pub async fn handle_games(date: GameDate, options: LiveOptions) -> Result<()> {
    let settings = weather_settings(&options)?;
    let reference = load_reference(options.reference.clone())?;
    let client = http_client()?;

    // tarpaulin::skip - HTTP calls, tested via games_report
    let report = games_report(
        &client,
        &settings,
        ESPN_NFL_BASE_URL,
        date.as_naive_date(),
        &reference,
    )
    .await;

    print_report(&report, options.json)
}
