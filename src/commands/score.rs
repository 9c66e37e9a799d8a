//! Offline score command implementation

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::{
    cli::types::GameDate,
    error::WeatherFactorsError,
    reference::ReferenceData,
    scoring::{
        build_report, Precipitation, ScheduledGame, ScoringInput, StadiumFactorsReport,
        WeatherObservation,
    },
    Result,
};

use super::{common::sample_visitor, load_reference, output::print_report};

/// Parameters for the score command
#[derive(Debug)]
pub struct ScoreParams {
    pub stadium: String,
    pub away: Option<String>,
    pub temperature_f: Option<f64>,
    pub wind_mph: Option<f64>,
    pub precipitation: Option<Precipitation>,
    pub reference: Option<PathBuf>,
    pub as_json: bool,
}

/// Observation from the command line; both readings are needed.
fn observation_from(params: &ScoreParams) -> Option<WeatherObservation> {
    match (params.temperature_f, params.wind_mph) {
        (Some(temperature_f), Some(wind_mph)) => Some(WeatherObservation::new(
            temperature_f,
            wind_mph,
            params.precipitation,
        )),
        _ => None,
    }
}

/// Score one named stadium against the supplied conditions.
pub fn score_stadium(
    params: &ScoreParams,
    date: NaiveDate,
    reference: &ReferenceData,
) -> Result<StadiumFactorsReport> {
    let stadium = reference
        .stadiums
        .get(&params.stadium)
        .cloned()
        .ok_or_else(|| WeatherFactorsError::UnknownStadium {
            name: params.stadium.clone(),
        })?;

    let game = ScheduledGame {
        stadium_name: params.stadium.clone(),
        home_team: stadium.home_team.clone(),
        away_team: params
            .away
            .clone()
            .unwrap_or_else(|| sample_visitor(stadium.is_dome).to_string()),
        kickoff_time: None,
        date,
        status: None,
    };

    let input = ScoringInput::new(game, stadium, observation_from(params));
    Ok(build_report(date, &[input], reference))
}

/// Handle the score command
pub fn handle_score(params: ScoreParams) -> Result<()> {
    let reference = load_reference(params.reference.clone())?;
    let report = score_stadium(&params, GameDate::today().as_naive_date(), &reference)?;
    print_report(&report, params.as_json)
}
