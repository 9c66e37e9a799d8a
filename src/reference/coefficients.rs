//! Position-group weather coefficients.

use serde::{Deserialize, Serialize};

/// Multipliers for the defense and turnover groups; the offensive groups
/// reuse the passing/rushing/kicking impact curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionWeatherImpact {
    /// Defense in rain or snow (easier to tackle a slowed ball carrier).
    pub defense_precipitation: f64,
    pub defense_freezing: f64,
    /// Fumble rates climb roughly 23% below freezing.
    pub turnover_freezing: f64,
    pub turnover_precipitation: f64,
}

impl Default for PositionWeatherImpact {
    fn default() -> Self {
        Self {
            defense_precipitation: 1.08,
            defense_freezing: 1.03,
            turnover_freezing: 1.23,
            turnover_precipitation: 1.12,
        }
    }
}
