//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::GameDate;

use crate::providers::DEFAULT_TIMEOUT_MS;
use crate::scoring::Precipitation;

/// Options shared by the commands that call the weather provider
#[derive(Debug, Args)]
pub struct LiveOptions {
    /// OpenWeatherMap API key (or set `OPENWEATHER_API_KEY` env var).
    #[clap(long)]
    pub api_key: Option<String>,

    /// Per-lookup weather timeout in milliseconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// JSON reference tables to overlay (or set `NFL_WEATHER_REFERENCE`).
    #[clap(long)]
    pub reference: Option<PathBuf>,

    /// Output the full report as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Debug-level logging on stderr.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank every NFL game on a date by how far weather moves its stadium factors.
    ///
    /// Reads the ESPN scoreboard for the date, fetches current weather for
    /// each outdoor stadium and scores the games.
    Games {
        /// Game date: YYYY-MM-DD or YYYYMMDD (defaults to today).
        #[clap(long, short, default_value_t = GameDate::today())]
        date: GameDate,

        #[clap(flatten)]
        options: LiveOptions,
    },

    /// Score every stadium in the reference table against a sample visitor.
    Stadiums {
        #[clap(flatten)]
        options: LiveOptions,
    },

    /// Score one stadium against conditions given on the command line.
    ///
    /// Makes no network calls. Without `--temp` and `--wind` the game is
    /// scored as if weather were unavailable.
    Score {
        /// Stadium name as it appears in the reference table.
        #[clap(long, short)]
        stadium: String,

        /// Visiting team (defaults to a sample visitor).
        #[clap(long, short)]
        away: Option<String>,

        /// Temperature in °F.
        #[clap(long, requires = "wind", allow_hyphen_values = true)]
        temp: Option<f64>,

        /// Wind speed in mph.
        #[clap(long, requires = "temp")]
        wind: Option<f64>,

        /// Precipitation: rain | light_rain | snow
        #[clap(long, requires = "temp")]
        precip: Option<Precipitation>,

        /// JSON reference tables to overlay (or set `NFL_WEATHER_REFERENCE`).
        #[clap(long)]
        reference: Option<PathBuf>,

        /// Output the full report as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "stadium-factors",
    about = "NFL stadium weather factors",
    version
)]
pub struct StadiumFactors {
    #[clap(subcommand)]
    pub command: Commands,
}
