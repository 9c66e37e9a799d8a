//! Home-vs-away weather advantage from team climate profiles.

use super::impact::round3;
use super::types::{Precipitation, TeamAdvantage, WeatherFactor, WeatherObservation};
use crate::reference::{ClimateType, TeamTable, TeamWeatherProfile};


const FREEZING_F: f64 = 32.0;
const COLD_F: f64 = 45.0;
/// Width of the graduated band between freezing and `COLD_F`.
const COLD_BAND_F: f64 = 20.0;
const HEAT_F: f64 = 85.0;
const STRONG_WIND_MPH: f64 = 15.0;
const WARM_TEAM_FREEZING_PENALTY: f64 = 0.90;

// A dome team counts as "outdoors in weather" under looser limits than
// the cold-weather rules above.
const DOME_TEAM_COLD_F: f64 = 50.0;
const DOME_TEAM_WIND_MPH: f64 = 12.0;

pub const INDOOR_NARRATIVE: &str = "Indoor game - no weather impact";
pub const UNAVAILABLE_NARRATIVE: &str = "Weather data unavailable";

/// Score/label table, evaluated top-down.
const NARRATIVE_BANDS: [(Band, &str); 5] = [
    (Band::AtLeast(115), "Major home weather advantage"),
    (Band::AtLeast(108), "Strong home weather advantage"),
    (Band::AtLeast(104), "Moderate home weather advantage"),
    (Band::AtMost(92), "Away team handles conditions better"),
    (Band::AtMost(96), "Slight away team advantage"),
];
const NEUTRAL_NARRATIVE: &str = "Neutral weather conditions";

#[derive(Debug, Clone, Copy)]
enum Band {
    AtLeast(i32),
    AtMost(i32),
}

impl Band {
    fn contains(self, score: i32) -> bool {
        match self {
            Band::AtLeast(min) => score >= min,
            Band::AtMost(max) => score <= max,
        }
    }
}

impl TeamAdvantage {
    fn identity(narrative: &str) -> Self {
        Self {
            home_advantage: 1.0,
            away_disadvantage: 1.0,
            advantage_score: 100,
            narrative: narrative.to_string(),
            factors: Vec::new(),
        }
    }
}

/// Label for an advantage score, with the contributing factors in parentheses.
pub fn narrative(advantage_score: i32, factors: &[WeatherFactor]) -> String {
    let label = NARRATIVE_BANDS
        .iter()
        .find(|(band, _)| band.contains(advantage_score))
        .map_or(NEUTRAL_NARRATIVE, |(_, label)| *label);

    if factors.is_empty() {
        label.to_string()
    } else {
        let joined = factors
            .iter()
            .map(WeatherFactor::label)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{label} ({joined})")
    }
}

/// Weather advantage of `home_team` over `away_team`.
///
/// Domes and missing observations give the identity result.
pub fn compute_advantage(
    teams: &TeamTable,
    home_team: &str,
    away_team: &str,
    observation: Option<&WeatherObservation>,
    is_dome: bool,
) -> TeamAdvantage {
    if is_dome {
        return TeamAdvantage::identity(INDOOR_NARRATIVE);
    }
    match observation {
        None => TeamAdvantage::identity(UNAVAILABLE_NARRATIVE),
        Some(observation) => {
            advantage_between(teams.get(home_team), teams.get(away_team), observation)
        }
    }
}

/// Running home/away multipliers plus the factors applied so far.
struct Accumulator {
    home: f64,
    away: f64,
    factors: Vec<WeatherFactor>,
}

impl Accumulator {
    fn both(&mut self, home: f64, away: f64, factor: WeatherFactor) {
        self.home *= home;
        self.away *= away;
        self.factors.push(factor);
    }
}

/// Outdoor advantage for a known observation.
pub fn advantage_between(
    home: &TeamWeatherProfile,
    away: &TeamWeatherProfile,
    observation: &WeatherObservation,
) -> TeamAdvantage {
    let temperature = observation.temperature_f;
    let wind = observation.wind_mph;
    let mut acc = Accumulator {
        home: 1.0,
        away: 1.0,
        factors: Vec::new(),
    };

    if temperature <= FREEZING_F {
        acc.both(
            home.cold_advantage,
            away.cold_advantage,
            WeatherFactor::Freezing,
        );
        if away.is_climate(ClimateType::WarmWeather) {
            acc.away *= WARM_TEAM_FREEZING_PENALTY;
        }
    } else if temperature <= COLD_F {
        let cold_factor = (COLD_F - temperature) / COLD_BAND_F;
        acc.both(
            1.0 + (home.cold_advantage - 1.0) * cold_factor,
            1.0 + (away.cold_advantage - 1.0) * cold_factor,
            WeatherFactor::Cold,
        );
    }

    if temperature >= HEAT_F {
        acc.both(
            home.heat_advantage,
            away.heat_advantage,
            WeatherFactor::HighHeat,
        );
    }

    if wind >= STRONG_WIND_MPH {
        acc.both(
            home.wind_resistance,
            away.wind_resistance,
            WeatherFactor::StrongWinds,
        );
    }

    match observation.precipitation {
        Some(Precipitation::Rain) => {
            acc.both(home.rain_multiplier, away.rain_multiplier, WeatherFactor::Rain);
        }
        Some(Precipitation::Snow) => {
            acc.both(home.snow_multiplier, away.snow_multiplier, WeatherFactor::Snow);
        }
        Some(Precipitation::LightRain) | None => {}
    }

    if away.is_climate(ClimateType::DomeTeam)
        && (temperature < DOME_TEAM_COLD_F
            || wind > DOME_TEAM_WIND_MPH
            || observation.has_precipitation())
    {
        acc.away *= away.outdoor_disadvantage;
        acc.factors.push(WeatherFactor::DomeTeamOutdoors);
    }

    if home.causes_altitude_sickness() {
        acc.home *= home.altitude_advantage;
        acc.factors.push(WeatherFactor::Altitude);
    }

    let advantage_score = ((acc.home / acc.away) * 100.0).round() as i32;

    TeamAdvantage {
        home_advantage: round3(acc.home),
        away_disadvantage: round3(acc.away),
        advantage_score,
        narrative: narrative(advantage_score, &acc.factors),
        factors: acc.factors,
    }
}
