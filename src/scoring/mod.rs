//! Weather-impact scoring engine.
//!
//! Pure functions from a normalized observation (or its absence) plus the
//! reference tables to adjusted stadium factors, team advantage and
//! position-group multipliers:
//! - `impact`: passing/rushing/kicking curves and the baseline applier
//! - `advantage`: home-vs-away advantage and narrative
//! - `position`: position-group multipliers
//! - `report`: per-game assembly, ranking and the report envelope

pub mod advantage;
pub mod impact;
pub mod position;
pub mod report;
pub mod types;

pub use advantage::{advantage_between, compute_advantage, narrative};
pub use impact::{
    apply_adjustment, impact_for, kicking_impact, passing_impact, round3, rushing_impact,
};
pub use position::compute_position_impacts;
pub use report::{
    build_report, compare_results, rank_results, score_game, GameConditions, ScoringInput,
};
pub use types::{
    FactorKind, PositionImpacts, Precipitation, ScheduledGame, StadiumFactorResult,
    StadiumFactorsReport, TeamAdvantage, WeatherFactor, WeatherObservation,
};
