//! Passing, rushing and kicking weather multipliers.
//!
//! Each curve multiplies together one step from each of its own threshold
//! tables and rounds the product to three decimals.

use super::types::{FactorKind, Precipitation, WeatherObservation};


/// `(threshold, multiplier)`, highest threshold first; first match wins.
type Steps = [(f64, f64)];

const PASSING_WIND: [(f64, f64); 3] = [(20.0, 0.85), (15.0, 0.92), (10.0, 0.97)];
const PASSING_COLD: [(f64, f64); 3] = [(20.0, 0.88), (32.0, 0.94), (40.0, 0.98)];

const RUSHING_COLD: [(f64, f64); 2] = [(20.0, 1.06), (32.0, 1.04)];
const RUSHING_GALE_MPH: f64 = 25.0;
const RUSHING_GALE: f64 = 0.98;

const KICKING_WIND: [(f64, f64); 3] = [(20.0, 0.77), (15.0, 0.85), (10.0, 0.92)];
const KICKING_COLD: [(f64, f64); 2] = [(30.0, 0.82), (40.0, 0.90)];

/// Round to the nearest 0.001.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Multiplier of the first step with `value >= threshold`, else 1.0.
fn at_least(value: f64, steps: &Steps) -> f64 {
    steps
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(1.0, |(_, multiplier)| *multiplier)
}

/// Multiplier of the first step with `value <= threshold`, else 1.0.
/// Steps are ordered coldest first.
fn at_most(value: f64, steps: &Steps) -> f64 {
    steps
        .iter()
        .find(|(threshold, _)| value <= *threshold)
        .map_or(1.0, |(_, multiplier)| *multiplier)
}

pub fn passing_impact(
    temperature_f: f64,
    wind_mph: f64,
    precipitation: Option<Precipitation>,
) -> f64 {
    let mut factor = 1.0;

    factor *= match precipitation {
        Some(Precipitation::Rain | Precipitation::LightRain) => 0.88,
        Some(Precipitation::Snow) => 0.82,
        None => 1.0,
    };
    factor *= at_least(wind_mph, &PASSING_WIND);
    factor *= at_most(temperature_f, &PASSING_COLD);

    round3(factor)
}

pub fn rushing_impact(
    temperature_f: f64,
    wind_mph: f64,
    precipitation: Option<Precipitation>,
) -> f64 {
    let mut factor = 1.0;

    // Teams lean on the run in bad weather
    factor *= match precipitation {
        Some(Precipitation::Rain) => 1.08,
        Some(Precipitation::Snow) => 1.12,
        Some(Precipitation::LightRain) | None => 1.0,
    };
    factor *= at_most(temperature_f, &RUSHING_COLD);
    if wind_mph > RUSHING_GALE_MPH {
        factor *= RUSHING_GALE;
    }

    round3(factor)
}

pub fn kicking_impact(
    temperature_f: f64,
    wind_mph: f64,
    precipitation: Option<Precipitation>,
) -> f64 {
    let mut factor = 1.0;

    factor *= at_least(wind_mph, &KICKING_WIND);
    factor *= at_most(temperature_f, &KICKING_COLD);
    factor *= match precipitation {
        Some(Precipitation::Rain) => 0.95,
        Some(Precipitation::Snow) => 0.76,
        Some(Precipitation::LightRain) | None => 1.0,
    };

    round3(factor)
}

/// Impact curve for `kind` evaluated at `observation`.
pub fn impact_for(kind: FactorKind, observation: &WeatherObservation) -> f64 {
    let (temperature_f, wind_mph, precipitation) = (
        observation.temperature_f,
        observation.wind_mph,
        observation.precipitation,
    );

    match kind {
        FactorKind::Passing => passing_impact(temperature_f, wind_mph, precipitation),
        FactorKind::Rushing => rushing_impact(temperature_f, wind_mph, precipitation),
        FactorKind::Kicking => kicking_impact(temperature_f, wind_mph, precipitation),
    }
}

/// Apply the weather multiplier for `kind` to a stadium baseline.
///
/// With no observation the baseline passes through (rounded, which is a
/// no-op for table values).
pub fn apply_adjustment(
    baseline: f64,
    observation: Option<&WeatherObservation>,
    kind: FactorKind,
) -> f64 {
    match observation {
        None => round3(baseline),
        Some(observation) => round3(baseline * impact_for(kind, observation)),
    }
}
