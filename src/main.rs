//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nfl_weather_factors::{
    cli::{Commands, StadiumFactors},
    commands::{
        games::handle_games,
        score::{handle_score, ScoreParams},
        stadiums::handle_stadiums,
    },
    logging, Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = StadiumFactors::parse();

    match app.command {
        Commands::Games { date, options } => {
            logging::init(options.verbose);
            handle_games(date, options).await?
        }

        Commands::Stadiums { options } => {
            logging::init(options.verbose);
            handle_stadiums(options).await?
        }

        Commands::Score {
            stadium,
            away,
            temp,
            wind,
            precip,
            reference,
            json,
        } => {
            logging::init(false);
            handle_score(ScoreParams {
                stadium,
                away,
                temperature_f: temp,
                wind_mph: wind,
                precipitation: precip,
                reference,
                as_json: json,
            })?
        }
    }

    Ok(())
}
