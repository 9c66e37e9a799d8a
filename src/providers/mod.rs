//! Upstream collaborators: the weather and schedule HTTP clients.
//!
//! Both clients absorb every failure at their boundary. A weather lookup
//! that times out or returns garbage becomes an absent observation; a bad
//! schedule response becomes an empty schedule.

pub mod schedule;
pub mod weather;

use reqwest::Client;

use crate::Result;

pub use schedule::{fetch_schedule_with_base_url, ESPN_NFL_BASE_URL};
pub use weather::{
    fetch_observation, fetch_observations, WeatherSettings, DEFAULT_TIMEOUT_MS,
    OPENWEATHER_BASE_URL,
};

/// Shared HTTP client for both providers.
pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("nfl-weather-factors/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
