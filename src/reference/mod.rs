//! Static reference tables: stadiums, team weather profiles and
//! position-group coefficients.
//!
//! The built-in tables cover every NFL venue with a known profile. A JSON
//! file with the same shape can be layered on top to add or replace
//! entries:
//!
//! ```json
//! {
//!   "stadiums": { "Nissan Stadium": { "location": { "lat": 36.1665, "lon": -86.7713 },
//!                 "base_passing": 1.0, "base_rushing": 1.0, "base_kicking": 0.97,
//!                 "home_team": "Tennessee Titans" } },
//!   "teams": { "Tennessee Titans": { "cold_advantage": 1.02,
//!                                    "climate_type": "midwest_variable" } }
//! }
//! ```

pub mod coefficients;
pub mod stadiums;
pub mod teams;


use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, WeatherFactorsError};

pub use coefficients::PositionWeatherImpact;
pub use stadiums::{GeoPoint, StadiumProfile, StadiumTable};
pub use teams::{ClimateType, SpecialFactor, TeamProfileRecord, TeamTable, TeamWeatherProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub stadiums: StadiumTable,
    pub teams: TeamTable,
    pub positions: PositionWeatherImpact,
}

/// On-disk overlay; each section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReferenceOverlay {
    stadiums: BTreeMap<String, StadiumProfile>,
    teams: BTreeMap<String, TeamProfileRecord>,
    positions: Option<PositionWeatherImpact>,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            stadiums: stadiums::builtin_stadiums(),
            teams: teams::builtin_teams(),
            positions: PositionWeatherImpact::default(),
        }
    }

    /// Built-in tables with the entries of a JSON overlay applied on top.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let overlay: ReferenceOverlay = serde_json::from_str(json)?;
        let mut data = Self::builtin();

        for (name, stadium) in overlay.stadiums {
            validate_stadium(&name, &stadium)?;
            data.stadiums.insert(name, stadium);
        }
        for (team, record) in overlay.teams {
            validate_team(&team, &record)?;
            data.teams.insert(team, TeamWeatherProfile::from(record));
        }
        if let Some(positions) = overlay.positions {
            validate_positions(&positions)?;
            data.positions = positions;
        }

        Ok(data)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Name of the stadium `team` plays its home games in, shared venues included.
    pub fn stadium_for_team(&self, team: &str) -> Option<&str> {
        self.stadiums.for_home_team(team).map(|(name, _)| name)
    }

    /// Profile for `stadium_name`, or a neutral open-air stand-in for `home_team`.
    pub fn stadium_or_neutral(&self, stadium_name: &str, home_team: &str) -> StadiumProfile {
        self.stadiums
            .get(stadium_name)
            .cloned()
            .unwrap_or_else(|| StadiumProfile::neutral(home_team))
    }

    /// Weather profile for `team`; unknown teams get the neutral profile.
    pub fn team(&self, team: &str) -> &TeamWeatherProfile {
        self.teams.get(team)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ensure_positive(name: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(WeatherFactorsError::InvalidReference {
            message: format!("{name}: {field} must be a positive number, got {value}"),
        });
    }
    Ok(())
}

fn validate_stadium(name: &str, stadium: &StadiumProfile) -> Result<()> {
    ensure_positive(name, "base_passing", stadium.base_passing)?;
    ensure_positive(name, "base_rushing", stadium.base_rushing)?;
    ensure_positive(name, "base_kicking", stadium.base_kicking)?;

    if let Some(GeoPoint { lat, lon }) = stadium.location {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(WeatherFactorsError::InvalidReference {
                message: format!("{name}: location ({lat}, {lon}) is out of range"),
            });
        }
    }

    Ok(())
}

/// Unset multipliers are skipped; they resolve to defaults later.
fn validate_team(team: &str, record: &TeamProfileRecord) -> Result<()> {
    let multipliers = [
        ("cold_advantage", record.cold_advantage),
        ("wind_resistance", record.wind_resistance),
        ("precipitation_impact", record.precipitation_impact),
        ("rain_advantage", record.rain_advantage),
        ("snow_advantage", record.snow_advantage),
        ("heat_advantage", record.heat_advantage),
        ("altitude_advantage", record.altitude_advantage),
        ("outdoor_disadvantage", record.outdoor_disadvantage),
        ("dome_opponent_advantage", record.dome_opponent_advantage),
    ];
    for (field, value) in multipliers {
        if let Some(value) = value {
            ensure_positive(team, field, value)?;
        }
    }
    Ok(())
}

fn validate_positions(positions: &PositionWeatherImpact) -> Result<()> {
    ensure_positive("positions", "defense_precipitation", positions.defense_precipitation)?;
    ensure_positive("positions", "defense_freezing", positions.defense_freezing)?;
    ensure_positive("positions", "turnover_freezing", positions.turnover_freezing)?;
    ensure_positive("positions", "turnover_precipitation", positions.turnover_precipitation)
}
