//! NFL Stadium Weather Factors Library
//!
//! Scores how current weather shifts each NFL stadium's baseline passing,
//! rushing and kicking factors, which team the conditions favor, and how
//! position groups are affected.
//!
//! ## Features
//!
//! - **Reference Tables**: Stadium baselines, team weather profiles and position coefficients
//! - **Weather Impact**: Deterministic threshold tables for temperature, wind and precipitation
//! - **Team Advantage**: Home/away climate multipliers with a narrative summary
//! - **Game Day Reports**: ESPN schedule and OpenWeatherMap lookups joined into a ranked report
//!
//! ## Quick Start
//!
//! ```rust
//! use nfl_weather_factors::reference::ReferenceData;
//! use nfl_weather_factors::scoring::{
//!     build_report, Precipitation, ScheduledGame, ScoringInput, WeatherObservation,
//! };
//!
//! let reference = ReferenceData::builtin();
//! let date = chrono::NaiveDate::from_ymd_opt(2024, 12, 22).unwrap();
//! let game = ScheduledGame {
//!     stadium_name: "Lambeau Field".to_string(),
//!     home_team: "Green Bay Packers".to_string(),
//!     away_team: "Miami Dolphins".to_string(),
//!     kickoff_time: None,
//!     date,
//!     status: None,
//! };
//! let stadium = reference.stadium_or_neutral(&game.stadium_name, &game.home_team);
//! let observation = WeatherObservation::new(15.0, 22.0, Some(Precipitation::Snow));
//!
//! let input = ScoringInput::new(game, stadium, Some(observation));
//! let report = build_report(date, &[input], &reference);
//! assert!(report.stadium_factors[0].passing_factor < 0.95);
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export OPENWEATHER_API_KEY=your-key
//! export NFL_WEATHER_REFERENCE=/path/to/overrides.json   # optional
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod providers;
pub mod reference;
pub mod scoring;

// Re-export commonly used types
pub use cli::types::GameDate;
pub use error::{Result, WeatherFactorsError};
pub use reference::ReferenceData;
pub use scoring::{StadiumFactorResult, StadiumFactorsReport, WeatherObservation};

pub const WEATHER_API_KEY_ENV_VAR: &str = "OPENWEATHER_API_KEY";
pub const REFERENCE_ENV_VAR: &str = "NFL_WEATHER_REFERENCE";
