//! Per-position-group weather multipliers.

use super::impact::{impact_for, round3};
use super::types::{FactorKind, PositionImpacts, WeatherObservation};
use crate::reference::PositionWeatherImpact;

#[cfg(test)]
mod tests;

const FREEZING_F: f64 = 32.0;

pub fn compute_position_impacts(
    observation: Option<&WeatherObservation>,
    is_dome: bool,
    coefficients: &PositionWeatherImpact,
) -> PositionImpacts {
    let Some(observation) = observation.filter(|_| !is_dome) else {
        return PositionImpacts::NEUTRAL;
    };

    let temperature = observation.temperature_f;
    let wet = observation.has_precipitation();
    let freezing = temperature <= FREEZING_F;

    let mut defense = 1.0;
    if wet {
        defense *= coefficients.defense_precipitation;
    }
    if freezing {
        defense *= coefficients.defense_freezing;
    }

    let mut turnover_rate = 1.0;
    if freezing {
        turnover_rate *= coefficients.turnover_freezing;
    }
    if wet {
        turnover_rate *= coefficients.turnover_precipitation;
    }

    PositionImpacts {
        passing_offense: impact_for(FactorKind::Passing, observation),
        rushing_offense: impact_for(FactorKind::Rushing, observation),
        field_goal_unit: impact_for(FactorKind::Kicking, observation),
        defense: round3(defense),
        turnover_rate: round3(turnover_rate),
    }
}
