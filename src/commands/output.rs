//! Text and JSON rendering of a report

use crate::{
    scoring::{StadiumFactorResult, StadiumFactorsReport},
    Result,
};

/// One text line per result.
pub fn format_result(result: &StadiumFactorResult) -> String {
    let advantage = &result.team_weather_advantage;
    format!(
        "{} ({} @ {}): pass {:.3} rush {:.3} kick {:.3} | {} | {} [{}]",
        result.stadium_name,
        result.away_team,
        result.home_team,
        result.passing_factor,
        result.rushing_factor,
        result.kicking_factor,
        result.weather_summary,
        advantage.narrative,
        advantage.advantage_score,
    )
}

pub fn print_report(report: &StadiumFactorsReport, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?); // tarpaulin::skip
        return Ok(());
    }

    if let Some(message) = &report.message {
        println!("{message}"); // tarpaulin::skip
    }
    for result in &report.stadium_factors {
        println!("{}", format_result(result)); // tarpaulin::skip
    }

    Ok(())
}
