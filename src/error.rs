//! Error types for the stadium weather factors CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, WeatherFactorsError>;

#[derive(Error, Debug)]
pub enum WeatherFactorsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Weather API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Invalid game date: {input} (expected YYYY-MM-DD or YYYYMMDD)")]
    InvalidDate { input: String },

    #[error("Invalid precipitation: {input} (expected rain, light_rain or snow)")]
    InvalidPrecipitation { input: String },

    #[error("Stadium not found in reference data: {name}")]
    UnknownStadium { name: String },

    #[error("Invalid reference data: {message}")]
    InvalidReference { message: String },
}
