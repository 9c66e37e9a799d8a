//! OpenWeatherMap current-conditions client.

use futures_util::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::reference::GeoPoint;
use crate::scoring::{Precipitation, WeatherObservation};
use crate::Result;

#[cfg(test)]
mod tests;

/// Base path for the OpenWeatherMap 2.5 API.
pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Per-lookup deadline before a venue is reported without weather.
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Visibility (metres) reported when the provider omits it.
const DEFAULT_VISIBILITY: f64 = 10000.0;

#[derive(Debug, Clone)]
pub struct WeatherSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl WeatherSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENWEATHER_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainReadings,
    wind: WindReadings,
    #[serde(default)]
    weather: Vec<Condition>,
    visibility: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WindReadings {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
    description: String,
}

/// Nearest whole number, halves toward positive infinity (-2.5 becomes -2).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor() + 0.0
}

impl CurrentWeather {
    /// `None` when the payload carries no condition entry.
    fn into_observation(self) -> Option<WeatherObservation> {
        let condition = self.weather.into_iter().next()?;
        Some(WeatherObservation {
            temperature_f: round_half_up(self.main.temp),
            wind_mph: round_half_up(self.wind.speed),
            precipitation: Precipitation::from_condition(&condition.main),
            humidity: self.main.humidity,
            visibility: Some(self.visibility.unwrap_or(DEFAULT_VISIBILITY)),
            description: Some(condition.description),
        })
    }
}

async fn request_observation(
    client: &Client,
    settings: &WeatherSettings,
    location: GeoPoint,
) -> Result<Option<WeatherObservation>> {
    let url = format!("{}/weather", settings.base_url);
    let params = [
        ("lat", location.lat.to_string()),
        ("lon", location.lon.to_string()),
        ("appid", settings.api_key.clone()),
        ("units", "imperial".to_string()),
    ];

    let weather = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<CurrentWeather>()
        .await?;

    Ok(weather.into_observation())
}

/// Current weather at `location`, or `None` on timeout or any provider failure.
pub async fn fetch_observation(
    client: &Client,
    settings: &WeatherSettings,
    stadium: &str,
    location: GeoPoint,
) -> Option<WeatherObservation> {
    match tokio::time::timeout(settings.timeout, request_observation(client, settings, location))
        .await
    {
        Ok(Ok(Some(observation))) => {
            debug!(stadium, summary = %observation.summary(), "weather observation");
            Some(observation)
        }
        Ok(Ok(None)) => {
            warn!(stadium, "weather payload had no conditions");
            None
        }
        Ok(Err(error)) => {
            warn!(stadium, %error, "weather lookup failed");
            None
        }
        Err(_) => {
            warn!(
                stadium,
                timeout_ms = settings.timeout.as_millis() as u64,
                "weather lookup timed out"
            );
            None
        }
    }
}

/// Look up every target concurrently; `None` targets are skipped.
///
/// The output lines up index-for-index with `targets`.
pub async fn fetch_observations<'a, I>(
    client: &Client,
    settings: &WeatherSettings,
    targets: I,
) -> Vec<Option<WeatherObservation>>
where
    I: IntoIterator<Item = Option<(&'a str, GeoPoint)>>,
{
    let lookups = targets.into_iter().map(|target| async move {
        match target {
            Some((stadium, location)) => {
                fetch_observation(client, settings, stadium, location).await
            }
            None => None,
        }
    });

    join_all(lookups).await
}
