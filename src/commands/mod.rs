//! Command implementations for the stadium factors CLI

pub mod common;
pub mod games;
pub mod output;
pub mod score;
pub mod stadiums;

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::{
    cli::LiveOptions,
    error::WeatherFactorsError,
    providers::WeatherSettings,
    reference::ReferenceData,
    Result, REFERENCE_ENV_VAR, WEATHER_API_KEY_ENV_VAR,
};


/// Resolve the weather API key from option or environment variable
fn resolve_api_key(api_key: Option<String>) -> Result<String> {
    api_key
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            std::env::var(WEATHER_API_KEY_ENV_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty())
        })
        .ok_or_else(|| WeatherFactorsError::MissingApiKey {
            env_var: WEATHER_API_KEY_ENV_VAR.to_string(),
        })
}

/// Built-in tables, overlaid with the file from option or environment variable
fn load_reference(path: Option<PathBuf>) -> Result<ReferenceData> {
    let path = path.or_else(|| std::env::var_os(REFERENCE_ENV_VAR).map(PathBuf::from));

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading reference overlay");
            ReferenceData::from_path(&path)
        }
        None => Ok(ReferenceData::builtin()),
    }
}

/// Weather settings for a live command
fn weather_settings(options: &LiveOptions) -> Result<WeatherSettings> {
    let api_key = resolve_api_key(options.api_key.clone())?;
    Ok(WeatherSettings::new(api_key).with_timeout(Duration::from_millis(options.timeout_ms)))
}
