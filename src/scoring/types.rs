//! Weather observations, scheduled games and the scored result records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WeatherFactorsError};

#[cfg(test)]
mod tests;

/// Precipitation class of an observation.
///
/// Drizzle is folded into `LightRain`. Passing treats it like rain; the
/// rushing, kicking and team-advantage rules only react to `Rain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precipitation {
    Rain,
    LightRain,
    Snow,
}

impl Precipitation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Precipitation::Rain => "rain",
            Precipitation::LightRain => "light_rain",
            Precipitation::Snow => "snow",
        }
    }

    /// Classify a provider condition such as `"Rain"`, `"Snow"` or `"Drizzle"`.
    pub fn from_condition(condition: &str) -> Option<Self> {
        let condition = condition.to_lowercase();
        if condition.contains("rain") {
            Some(Precipitation::Rain)
        } else if condition.contains("snow") {
            Some(Precipitation::Snow)
        } else if condition.contains("drizzle") {
            Some(Precipitation::LightRain)
        } else {
            None
        }
    }
}

impl fmt::Display for Precipitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precipitation {
    type Err = WeatherFactorsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rain" => Ok(Precipitation::Rain),
            "light_rain" | "light-rain" | "drizzle" => Ok(Precipitation::LightRain),
            "snow" => Ok(Precipitation::Snow),
            _ => Err(WeatherFactorsError::InvalidPrecipitation {
                input: s.to_string(),
            }),
        }
    }
}

/// Point-in-time weather at a venue, already normalized by the provider.
///
/// Humidity, visibility and description are informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_f: f64,
    pub wind_mph: f64,
    #[serde(default)]
    pub precipitation: Option<Precipitation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WeatherObservation {
    pub fn new(temperature_f: f64, wind_mph: f64, precipitation: Option<Precipitation>) -> Self {
        Self {
            temperature_f,
            wind_mph,
            precipitation,
            humidity: None,
            visibility: None,
            description: None,
        }
    }

    pub fn has_precipitation(&self) -> bool {
        self.precipitation.is_some()
    }

    /// `"<temp>°F, <wind> mph wind"`, with `, <precipitation>` when present.
    pub fn summary(&self) -> String {
        // Adding 0.0 turns -0.0 into 0.0
        let mut summary = format!(
            "{}°F, {} mph wind",
            self.temperature_f + 0.0,
            self.wind_mph + 0.0
        );
        if let Some(precipitation) = self.precipitation {
            summary.push_str(", ");
            summary.push_str(precipitation.as_str());
        }
        summary
    }
}

/// Which baseline factor an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Passing,
    Rushing,
    Kicking,
}

/// A game on the requested date, as handed over by the schedule provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub stadium_name: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub kickoff_time: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
}

/// Weather condition that contributed to a team advantage, in the order applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherFactor {
    #[serde(rename = "freezing conditions")]
    Freezing,
    #[serde(rename = "cold weather")]
    Cold,
    #[serde(rename = "high heat")]
    HighHeat,
    #[serde(rename = "strong winds")]
    StrongWinds,
    #[serde(rename = "rain")]
    Rain,
    #[serde(rename = "snow")]
    Snow,
    #[serde(rename = "dome team outdoors")]
    DomeTeamOutdoors,
    #[serde(rename = "altitude")]
    Altitude,
}

impl WeatherFactor {
    pub fn label(&self) -> &'static str {
        match self {
            WeatherFactor::Freezing => "freezing conditions",
            WeatherFactor::Cold => "cold weather",
            WeatherFactor::HighHeat => "high heat",
            WeatherFactor::StrongWinds => "strong winds",
            WeatherFactor::Rain => "rain",
            WeatherFactor::Snow => "snow",
            WeatherFactor::DomeTeamOutdoors => "dome team outdoors",
            WeatherFactor::Altitude => "altitude",
        }
    }
}

impl fmt::Display for WeatherFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Home-vs-away weather edge for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAdvantage {
    pub home_advantage: f64,
    pub away_disadvantage: f64,
    /// `100 * home / away`, rounded; 100 means no net edge.
    pub advantage_score: i32,
    pub narrative: String,
    pub factors: Vec<WeatherFactor>,
}

/// Multipliers per position group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionImpacts {
    pub passing_offense: f64,
    pub rushing_offense: f64,
    pub field_goal_unit: f64,
    pub defense: f64,
    pub turnover_rate: f64,
}

impl PositionImpacts {
    pub const NEUTRAL: PositionImpacts = PositionImpacts {
        passing_offense: 1.0,
        rushing_offense: 1.0,
        field_goal_unit: 1.0,
        defense: 1.0,
        turnover_rate: 1.0,
    };
}

/// One scored game/stadium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StadiumFactorResult {
    pub stadium_name: String,
    pub home_team: String,
    pub away_team: String,
    pub passing_factor: f64,
    pub rushing_factor: f64,
    pub kicking_factor: f64,
    pub is_dome: bool,
    pub weather_summary: String,
    pub baseline_passing: f64,
    pub baseline_rushing: f64,
    pub baseline_kicking: f64,
    pub team_weather_advantage: TeamAdvantage,
    pub position_impacts: PositionImpacts,
    pub raw_weather: Option<WeatherObservation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kickoff_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl StadiumFactorResult {
    /// Total distance of the adjusted factors from their baselines.
    pub fn weather_displacement(&self) -> f64 {
        (self.passing_factor - self.baseline_passing).abs()
            + (self.rushing_factor - self.baseline_rushing).abs()
            + (self.kicking_factor - self.baseline_kicking).abs()
    }
}

/// Everything a consumer needs for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StadiumFactorsReport {
    pub date: NaiveDate,
    pub last_updated: DateTime<Utc>,
    pub stadium_factors: Vec<StadiumFactorResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data_sources: Vec<String>,
}
