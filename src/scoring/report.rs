//! Joins the impact, advantage and position calculators into one result per
//! game, ranks the results and wraps them into a report.

use chrono::{NaiveDate, Utc};
use rayon::prelude::*;
use std::cmp::Ordering;

use super::advantage::compute_advantage;
use super::impact::{apply_adjustment, round3};
use super::position::compute_position_impacts;
use super::types::{
    FactorKind, ScheduledGame, StadiumFactorResult, StadiumFactorsReport, WeatherObservation,
};
use crate::reference::{ReferenceData, StadiumProfile};


pub const DATA_SOURCES: [&str; 4] = [
    "NFL Weather Impact Research 2022-2024",
    "Field Goal Analysis by Wind/Temperature",
    "QB Completion Rate Studies",
    "Team Performance by Climate Type",
];

/// Weather a game is played in.
#[derive(Debug, Clone, PartialEq)]
pub enum GameConditions {
    Indoor,
    Outdoor(Option<WeatherObservation>),
}

impl GameConditions {
    /// Domes always report no observation.
    pub fn observation(&self) -> Option<&WeatherObservation> {
        match self {
            GameConditions::Indoor => None,
            GameConditions::Outdoor(observation) => observation.as_ref(),
        }
    }

    pub fn is_indoor(&self) -> bool {
        matches!(self, GameConditions::Indoor)
    }

    fn summary(&self) -> String {
        match self {
            GameConditions::Indoor => "Indoor (Dome)".to_string(),
            GameConditions::Outdoor(None) => "Weather unavailable".to_string(),
            GameConditions::Outdoor(Some(observation)) => observation.summary(),
        }
    }
}

/// A game resolved against its stadium and weather, ready to score.
#[derive(Debug, Clone)]
pub struct ScoringInput {
    game: ScheduledGame,
    stadium: StadiumProfile,
    conditions: GameConditions,
}

impl ScoringInput {
    /// An observation for a dome stadium is dropped here.
    pub fn new(
        game: ScheduledGame,
        stadium: StadiumProfile,
        observation: Option<WeatherObservation>,
    ) -> Self {
        let conditions = if stadium.is_dome {
            GameConditions::Indoor
        } else {
            GameConditions::Outdoor(observation)
        };
        Self {
            game,
            stadium,
            conditions,
        }
    }

    pub fn game(&self) -> &ScheduledGame {
        &self.game
    }

    pub fn stadium(&self) -> &StadiumProfile {
        &self.stadium
    }

    pub fn conditions(&self) -> &GameConditions {
        &self.conditions
    }
}

pub fn score_game(input: &ScoringInput, reference: &ReferenceData) -> StadiumFactorResult {
    let ScoringInput {
        game,
        stadium,
        conditions,
    } = input;
    let observation = conditions.observation();
    let is_dome = conditions.is_indoor();
    let adjusted = |kind: FactorKind| apply_adjustment(stadium.baseline(kind), observation, kind);

    StadiumFactorResult {
        stadium_name: game.stadium_name.clone(),
        home_team: game.home_team.clone(),
        away_team: game.away_team.clone(),
        passing_factor: adjusted(FactorKind::Passing),
        rushing_factor: adjusted(FactorKind::Rushing),
        kicking_factor: adjusted(FactorKind::Kicking),
        is_dome,
        weather_summary: conditions.summary(),
        baseline_passing: stadium.base_passing,
        baseline_rushing: stadium.base_rushing,
        baseline_kicking: stadium.base_kicking,
        team_weather_advantage: compute_advantage(
            &reference.teams,
            &game.home_team,
            &game.away_team,
            observation,
            is_dome,
        ),
        position_impacts: compute_position_impacts(observation, is_dome, &reference.positions),
        raw_weather: observation.cloned(),
        kickoff_time: game.kickoff_time.clone(),
        status: game.status.clone(),
    }
}

/// Open-air venues first, biggest weather swing first, then highest passing factor.
pub fn compare_results(a: &StadiumFactorResult, b: &StadiumFactorResult) -> Ordering {
    a.is_dome
        .cmp(&b.is_dome)
        .then_with(|| {
            // Factors are 3dp values; round the sum so equal swings tie exactly.
            round3(b.weather_displacement()).total_cmp(&round3(a.weather_displacement()))
        })
        .then_with(|| b.passing_factor.total_cmp(&a.passing_factor))
}

pub fn rank_results(results: &mut [StadiumFactorResult]) {
    results.sort_by(compare_results);
}

/// Score, rank and wrap every input for `date`.
pub fn build_report(
    date: NaiveDate,
    inputs: &[ScoringInput],
    reference: &ReferenceData,
) -> StadiumFactorsReport {
    let mut stadium_factors: Vec<StadiumFactorResult> = inputs
        .par_iter()
        .map(|input| score_game(input, reference))
        .collect();
    rank_results(&mut stadium_factors);

    let message = stadium_factors
        .is_empty()
        .then(|| format!("No games scheduled for {date}"));

    StadiumFactorsReport {
        date,
        last_updated: Utc::now(),
        stadium_factors,
        message,
        data_sources: DATA_SOURCES.iter().map(|s| s.to_string()).collect(),
    }
}
