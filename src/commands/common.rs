//! Shared helpers for the live commands

use reqwest::Client;
use tracing::debug;

use crate::{
    providers::{fetch_observations, WeatherSettings},
    reference::{GeoPoint, ReferenceData},
    scoring::{ScheduledGame, ScoringInput},
};

/// Visitor used when a stadium is scored without a real opponent.
pub fn sample_visitor(is_dome: bool) -> &'static str {
    if is_dome {
        "Green Bay Packers"
    } else {
        "Miami Dolphins"
    }
}

/// Pair every game with its stadium and current weather.
///
/// Lookups for all outdoor venues run concurrently and are joined before
/// this returns. Domes and venues without a location are never looked up.
pub async fn resolve_inputs(
    client: &Client,
    settings: &WeatherSettings,
    games: Vec<ScheduledGame>,
    reference: &ReferenceData,
) -> Vec<ScoringInput> {
    let stadiums: Vec<_> = games
        .iter()
        .map(|game| reference.stadium_or_neutral(&game.stadium_name, &game.home_team))
        .collect();

    let targets: Vec<Option<(&str, GeoPoint)>> = games
        .iter()
        .zip(&stadiums)
        .map(|(game, stadium)| {
            stadium
                .location
                .filter(|_| !stadium.is_dome)
                .map(|location| (game.stadium_name.as_str(), location))
        })
        .collect();

    let lookups = targets.iter().filter(|t| t.is_some()).count();
    debug!(games = games.len(), lookups, "fetching weather");

    let observations = fetch_observations(client, settings, targets).await;

    games
        .into_iter()
        .zip(stadiums)
        .zip(observations)
        .map(|((game, stadium), observation)| ScoringInput::new(game, stadium, observation))
        .collect()
}
