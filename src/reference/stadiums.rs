//! Stadium locations, baseline factors and roof type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scoring::FactorKind;

/// Latitude/longitude used for the weather lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StadiumProfile {
    /// `None` for venues we cannot locate; those never get a weather lookup.
    #[serde(default)]
    pub location: Option<GeoPoint>,
    pub base_passing: f64,
    pub base_rushing: f64,
    pub base_kicking: f64,
    #[serde(default)]
    pub is_dome: bool,
    pub home_team: String,
    /// Other teams that play their home games here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tenants: Vec<String>,
}

impl StadiumProfile {
    /// Stand-in for a venue missing from the table: all baselines 1.0, open air, no location.
    pub fn neutral(home_team: &str) -> Self {
        Self {
            location: None,
            base_passing: 1.0,
            base_rushing: 1.0,
            base_kicking: 1.0,
            is_dome: false,
            home_team: home_team.to_string(),
            tenants: Vec::new(),
        }
    }

    pub fn baseline(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::Passing => self.base_passing,
            FactorKind::Rushing => self.base_rushing,
            FactorKind::Kicking => self.base_kicking,
        }
    }

    pub fn hosts(&self, team: &str) -> bool {
        self.home_team == team || self.tenants.iter().any(|t| t == team)
    }
}

/// Stadium profiles keyed by stadium name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StadiumTable(BTreeMap<String, StadiumProfile>);

impl StadiumTable {
    pub fn get(&self, name: &str) -> Option<&StadiumProfile> {
        self.0.get(name)
    }

    /// Find the stadium a team plays its home games in.
    ///
    /// A primary `home_team` match wins over a tenant match.
    pub fn for_home_team(&self, team: &str) -> Option<(&str, &StadiumProfile)> {
        self.0
            .iter()
            .find(|(_, s)| s.home_team == team)
            .or_else(|| self.0.iter().find(|(_, s)| s.hosts(team)))
            .map(|(name, s)| (name.as_str(), s))
    }

    pub fn insert(&mut self, name: String, profile: StadiumProfile) {
        self.0.insert(name, profile);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StadiumProfile)> {
        self.0.iter().map(|(name, s)| (name.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// (name, lat, lon, passing, rushing, kicking, dome, home team)
type StadiumRow = (&'static str, f64, f64, f64, f64, f64, bool, &'static str);

const BUILTIN_STADIUMS: [StadiumRow; 24] = [
    ("Lambeau Field", 44.5013, -88.0622, 0.95, 1.05, 0.90, false, "Green Bay Packers"),
    ("Soldier Field", 41.8623, -87.6167, 0.96, 1.03, 0.92, false, "Chicago Bears"),
    ("Cleveland Browns Stadium", 41.5061, -81.6995, 0.97, 1.02, 0.93, false, "Cleveland Browns"),
    ("Heinz Field", 40.4469, -80.0158, 0.96, 1.04, 0.91, false, "Pittsburgh Steelers"),
    ("M&T Bank Stadium", 39.2780, -76.6227, 1.00, 1.00, 0.98, false, "Baltimore Ravens"),
    ("MetLife Stadium", 40.8135, -74.0745, 1.01, 0.99, 0.97, false, "New York Giants"),
    ("Gillette Stadium", 42.0909, -71.2643, 0.98, 1.01, 0.94, false, "New England Patriots"),
    ("Hard Rock Stadium", 25.9580, -80.2389, 1.03, 0.98, 1.02, false, "Miami Dolphins"),
    ("TIAA Bank Field", 30.3240, -81.6373, 1.02, 0.99, 1.01, false, "Jacksonville Jaguars"),
    ("Empower Field", 39.7439, -105.0201, 1.08, 0.95, 0.85, false, "Denver Broncos"),
    ("Lumen Field", 47.5952, -122.3316, 0.99, 1.01, 0.96, false, "Seattle Seahawks"),
    ("Levi's Stadium", 37.4031, -121.9695, 1.01, 0.99, 1.00, false, "San Francisco 49ers"),
    ("Raymond James Stadium", 27.9759, -82.5033, 1.02, 0.98, 1.01, false, "Tampa Bay Buccaneers"),
    ("Arrowhead Stadium", 39.0489, -94.4839, 0.98, 1.02, 0.95, false, "Kansas City Chiefs"),
    ("NRG Stadium", 29.6847, -95.4107, 1.02, 0.98, 1.03, true, "Houston Texans"),
    ("Lucas Oil Stadium", 39.7601, -86.1639, 1.03, 0.97, 1.05, true, "Indianapolis Colts"),
    ("Allegiant Stadium", 36.0908, -115.1834, 1.02, 0.98, 1.04, true, "Las Vegas Raiders"),
    ("SoFi Stadium", 33.9535, -118.3392, 1.03, 0.97, 1.02, true, "Los Angeles Rams"),
    ("State Farm Stadium", 33.5276, -112.2626, 1.02, 0.98, 1.03, true, "Arizona Cardinals"),
    ("AT&T Stadium", 32.7473, -97.0945, 1.04, 0.96, 1.05, true, "Dallas Cowboys"),
    ("U.S. Bank Stadium", 44.9738, -93.2581, 1.03, 0.97, 1.05, true, "Minnesota Vikings"),
    ("Ford Field", 42.3400, -83.0456, 1.02, 0.98, 1.04, true, "Detroit Lions"),
    ("Mercedes-Benz Superdome", 29.9511, -90.0812, 1.03, 0.97, 1.05, true, "New Orleans Saints"),
    ("Mercedes-Benz Stadium", 33.7553, -84.4006, 1.03, 0.97, 1.05, true, "Atlanta Falcons"),
];

const SHARED_VENUES: [(&str, &str); 2] = [
    ("MetLife Stadium", "New York Jets"),
    ("SoFi Stadium", "Los Angeles Chargers"),
];

pub fn builtin_stadiums() -> StadiumTable {
    let mut stadiums: BTreeMap<String, StadiumProfile> = BTreeMap::new();
    for (name, lat, lon, passing, rushing, kicking, dome, home_team) in BUILTIN_STADIUMS {
        stadiums.insert(
            name.to_string(),
            StadiumProfile {
                location: Some(GeoPoint { lat, lon }),
                base_passing: passing,
                base_rushing: rushing,
                base_kicking: kicking,
                is_dome: dome,
                home_team: home_team.to_string(),
                tenants: Vec::new(),
            },
        );
    }
    for (venue, tenant) in SHARED_VENUES {
        if let Some(stadium) = stadiums.get_mut(venue) {
            stadium.tenants.push(tenant.to_string());
        }
    }
    StadiumTable(stadiums)
}
