//! Team weather-sensitivity profiles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outdoor penalty applied to dome teams whose profile does not set one.
pub const DEFAULT_OUTDOOR_DISADVANTAGE: f64 = 0.88;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateType {
    ColdWeather,
    WarmWeather,
    HighAltitude,
    PacificNorthwest,
    MidwestVariable,
    DomeTeam,
    MildCoastal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialFactor {
    VisitingTeamAltitudeSickness,
}

/// Profile as written in a reference file; every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamProfileRecord {
    pub cold_advantage: Option<f64>,
    pub wind_resistance: Option<f64>,
    pub precipitation_impact: Option<f64>,
    pub rain_advantage: Option<f64>,
    pub snow_advantage: Option<f64>,
    pub heat_advantage: Option<f64>,
    pub altitude_advantage: Option<f64>,
    pub outdoor_disadvantage: Option<f64>,
    pub dome_opponent_advantage: Option<f64>,
    pub climate_type: Option<ClimateType>,
    pub special_factor: Option<SpecialFactor>,
    pub historical_record: Option<String>,
}

/// Fully resolved profile: every multiplier is concrete.
///
/// Rain uses `precipitation_impact`, then `rain_advantage`. Snow uses
/// `snow_advantage`, then `precipitation_impact`. Anything unset is 1.0,
/// except `outdoor_disadvantage` which falls back to
/// [`DEFAULT_OUTDOOR_DISADVANTAGE`].
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWeatherProfile {
    pub cold_advantage: f64,
    pub wind_resistance: f64,
    pub heat_advantage: f64,
    pub altitude_advantage: f64,
    pub rain_multiplier: f64,
    pub snow_multiplier: f64,
    pub outdoor_disadvantage: f64,
    /// Carried for consumers; not used in scoring.
    pub dome_opponent_advantage: f64,
    pub climate_type: Option<ClimateType>,
    pub special_factor: Option<SpecialFactor>,
    pub historical_record: Option<String>,
}

impl TeamWeatherProfile {
    pub const fn neutral() -> Self {
        Self {
            cold_advantage: 1.0,
            wind_resistance: 1.0,
            heat_advantage: 1.0,
            altitude_advantage: 1.0,
            rain_multiplier: 1.0,
            snow_multiplier: 1.0,
            outdoor_disadvantage: DEFAULT_OUTDOOR_DISADVANTAGE,
            dome_opponent_advantage: 1.0,
            climate_type: None,
            special_factor: None,
            historical_record: None,
        }
    }

    pub fn is_climate(&self, climate: ClimateType) -> bool {
        self.climate_type == Some(climate)
    }

    pub fn causes_altitude_sickness(&self) -> bool {
        self.special_factor == Some(SpecialFactor::VisitingTeamAltitudeSickness)
    }
}

impl Default for TeamWeatherProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

impl From<TeamProfileRecord> for TeamWeatherProfile {
    fn from(record: TeamProfileRecord) -> Self {
        Self {
            cold_advantage: record.cold_advantage.unwrap_or(1.0),
            wind_resistance: record.wind_resistance.unwrap_or(1.0),
            heat_advantage: record.heat_advantage.unwrap_or(1.0),
            altitude_advantage: record.altitude_advantage.unwrap_or(1.0),
            rain_multiplier: record
                .precipitation_impact
                .or(record.rain_advantage)
                .unwrap_or(1.0),
            snow_multiplier: record
                .snow_advantage
                .or(record.precipitation_impact)
                .unwrap_or(1.0),
            outdoor_disadvantage: record
                .outdoor_disadvantage
                .unwrap_or(DEFAULT_OUTDOOR_DISADVANTAGE),
            dome_opponent_advantage: record.dome_opponent_advantage.unwrap_or(1.0),
            climate_type: record.climate_type,
            special_factor: record.special_factor,
            historical_record: record.historical_record,
        }
    }
}

static NEUTRAL_PROFILE: TeamWeatherProfile = TeamWeatherProfile::neutral();

/// Team profiles keyed by full team name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamTable(BTreeMap<String, TeamWeatherProfile>);

impl TeamTable {
    /// Profile for `team`, or the neutral profile when the team is unknown.
    pub fn get(&self, team: &str) -> &TeamWeatherProfile {
        self.0.get(team).unwrap_or(&NEUTRAL_PROFILE)
    }

    pub fn contains(&self, team: &str) -> bool {
        self.0.contains_key(team)
    }

    pub fn insert(&mut self, team: String, profile: TeamWeatherProfile) {
        self.0.insert(team, profile);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn record(climate_type: ClimateType) -> TeamProfileRecord {
    TeamProfileRecord {
        climate_type: Some(climate_type),
        ..TeamProfileRecord::default()
    }
}

fn builtin_records() -> Vec<(&'static str, TeamProfileRecord)> {
    use ClimateType::*;

    vec![
        (
            "Green Bay Packers",
            TeamProfileRecord {
                cold_advantage: Some(1.15),
                wind_resistance: Some(1.08),
                precipitation_impact: Some(0.96),
                dome_opponent_advantage: Some(1.12),
                historical_record: Some("12-3 in sub-40°F games (2022-2024)".to_string()),
                ..record(ColdWeather)
            },
        ),
        (
            "Buffalo Bills",
            TeamProfileRecord {
                cold_advantage: Some(1.12),
                wind_resistance: Some(1.10),
                snow_advantage: Some(1.15),
                dome_opponent_advantage: Some(1.10),
                ..record(ColdWeather)
            },
        ),
        (
            "Chicago Bears",
            TeamProfileRecord {
                cold_advantage: Some(1.08),
                wind_resistance: Some(1.12),
                precipitation_impact: Some(0.94),
                dome_opponent_advantage: Some(1.08),
                ..record(ColdWeather)
            },
        ),
        (
            "Cleveland Browns",
            TeamProfileRecord {
                cold_advantage: Some(1.06),
                wind_resistance: Some(1.06),
                precipitation_impact: Some(0.92),
                dome_opponent_advantage: Some(1.06),
                ..record(ColdWeather)
            },
        ),
        (
            "Pittsburgh Steelers",
            TeamProfileRecord {
                cold_advantage: Some(1.07),
                wind_resistance: Some(1.05),
                precipitation_impact: Some(0.95),
                dome_opponent_advantage: Some(1.07),
                ..record(ColdWeather)
            },
        ),
        (
            "New England Patriots",
            TeamProfileRecord {
                cold_advantage: Some(1.09),
                wind_resistance: Some(1.06),
                precipitation_impact: Some(0.96),
                dome_opponent_advantage: Some(1.08),
                ..record(ColdWeather)
            },
        ),
        (
            "Miami Dolphins",
            TeamProfileRecord {
                cold_advantage: Some(0.82),
                heat_advantage: Some(1.15),
                wind_resistance: Some(0.90),
                dome_opponent_advantage: Some(0.92),
                historical_record: Some("3-8 in sub-50°F games (2022-2024)".to_string()),
                ..record(WarmWeather)
            },
        ),
        (
            "Tampa Bay Buccaneers",
            TeamProfileRecord {
                cold_advantage: Some(0.85),
                heat_advantage: Some(1.12),
                wind_resistance: Some(0.92),
                precipitation_impact: Some(1.02),
                dome_opponent_advantage: Some(0.94),
                ..record(WarmWeather)
            },
        ),
        (
            "Jacksonville Jaguars",
            TeamProfileRecord {
                cold_advantage: Some(0.81),
                heat_advantage: Some(1.14),
                wind_resistance: Some(0.88),
                dome_opponent_advantage: Some(0.89),
                ..record(WarmWeather)
            },
        ),
        (
            "Denver Broncos",
            TeamProfileRecord {
                altitude_advantage: Some(1.18),
                cold_advantage: Some(1.05),
                wind_resistance: Some(1.04),
                dome_opponent_advantage: Some(1.15),
                special_factor: Some(SpecialFactor::VisitingTeamAltitudeSickness),
                ..record(HighAltitude)
            },
        ),
        (
            "Seattle Seahawks",
            TeamProfileRecord {
                rain_advantage: Some(1.12),
                wind_resistance: Some(1.09),
                cold_advantage: Some(1.03),
                dome_opponent_advantage: Some(1.06),
                historical_record: Some("Most rain-affected stadium 2022-2024".to_string()),
                ..record(PacificNorthwest)
            },
        ),
        (
            "Kansas City Chiefs",
            TeamProfileRecord {
                wind_resistance: Some(1.08),
                cold_advantage: Some(1.06),
                dome_opponent_advantage: Some(1.08),
                ..record(MidwestVariable)
            },
        ),
        (
            "Baltimore Ravens",
            TeamProfileRecord {
                cold_advantage: Some(1.05),
                wind_resistance: Some(1.04),
                precipitation_impact: Some(0.96),
                dome_opponent_advantage: Some(1.05),
                ..record(ColdWeather)
            },
        ),
        (
            "New Orleans Saints",
            TeamProfileRecord {
                outdoor_disadvantage: Some(0.88),
                cold_advantage: Some(0.86),
                wind_resistance: Some(0.84),
                precipitation_impact: Some(0.82),
                ..record(DomeTeam)
            },
        ),
        (
            "Atlanta Falcons",
            TeamProfileRecord {
                outdoor_disadvantage: Some(0.90),
                cold_advantage: Some(0.88),
                wind_resistance: Some(0.86),
                ..record(DomeTeam)
            },
        ),
        (
            "Detroit Lions",
            TeamProfileRecord {
                outdoor_disadvantage: Some(0.92),
                cold_advantage: Some(0.94),
                wind_resistance: Some(0.88),
                ..record(DomeTeam)
            },
        ),
        (
            "Minnesota Vikings",
            TeamProfileRecord {
                outdoor_disadvantage: Some(0.91),
                cold_advantage: Some(0.93),
                wind_resistance: Some(0.89),
                ..record(DomeTeam)
            },
        ),
    ]
}

pub fn builtin_teams() -> TeamTable {
    TeamTable(
        builtin_records()
            .into_iter()
            .map(|(team, record)| (team.to_string(), TeamWeatherProfile::from(record)))
            .collect(),
    )
}
