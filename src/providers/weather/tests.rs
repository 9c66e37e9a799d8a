//! HTTP tests for the weather client against a mocked OpenWeatherMap API

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const LAMBEAU: GeoPoint = GeoPoint {
    lat: 44.5013,
    lon: -88.0622,
};

fn current_weather_response(main: &str, description: &str) -> serde_json::Value {
    json!({
        "coord": { "lon": -88.0622, "lat": 44.5013 },
        "weather": [{ "id": 601, "main": main, "description": description, "icon": "13d" }],
        "main": { "temp": 18.6, "feels_like": 4.1, "pressure": 1012, "humidity": 86 },
        "visibility": 2400,
        "wind": { "speed": 21.7, "deg": 320 },
        "name": "Green Bay"
    })
}

fn settings_for(server: &MockServer) -> WeatherSettings {
    WeatherSettings::new("test-key").with_base_url(server.uri())
}

#[cfg(test)]
mod weather_http_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_observation_normalizes_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("lat", "44.5013"))
            .and(query_param("lon", "-88.0622"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "imperial"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(current_weather_response("Snow", "heavy snow")),
            )
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let observation =
            fetch_observation(&client, &settings_for(&mock_server), "Lambeau Field", LAMBEAU)
                .await
                .expect("observation should be present");

        assert_eq!(observation.temperature_f, 19.0);
        assert_eq!(observation.wind_mph, 22.0);
        assert_eq!(observation.precipitation, Some(Precipitation::Snow));
        assert_eq!(observation.humidity, Some(86.0));
        assert_eq!(observation.visibility, Some(2400.0));
        assert_eq!(observation.description.as_deref(), Some("heavy snow"));
    }

    #[tokio::test]
    async fn test_drizzle_maps_to_light_rain_and_visibility_defaults() {
        let mock_server = MockServer::start().await;

        let mut body = current_weather_response("Drizzle", "light intensity drizzle");
        body.as_object_mut().unwrap().remove("visibility");

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let observation =
            fetch_observation(&client, &settings_for(&mock_server), "Lambeau Field", LAMBEAU)
                .await
                .unwrap();

        assert_eq!(observation.precipitation, Some(Precipitation::LightRain));
        assert_eq!(observation.visibility, Some(10000.0));
    }

    #[tokio::test]
    async fn test_clear_sky_has_no_precipitation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(current_weather_response("Clear", "clear sky")),
            )
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let observation =
            fetch_observation(&client, &settings_for(&mock_server), "Lambeau Field", LAMBEAU)
                .await
                .unwrap();

        assert_eq!(observation.precipitation, None);
    }

    #[tokio::test]
    async fn test_server_error_is_absent_observation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "cod": 401,
                "message": "Invalid API key"
            })))
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let observation =
            fetch_observation(&client, &settings_for(&mock_server), "Lambeau Field", LAMBEAU).await;

        assert!(observation.is_none());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_absent_observation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let observation =
            fetch_observation(&client, &settings_for(&mock_server), "Lambeau Field", LAMBEAU).await;

        assert!(observation.is_none());
    }

    #[tokio::test]
    async fn test_missing_conditions_is_absent_observation() {
        let mock_server = MockServer::start().await;

        let mut body = current_weather_response("Clear", "clear sky");
        body["weather"] = json!([]);

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let observation =
            fetch_observation(&client, &settings_for(&mock_server), "Lambeau Field", LAMBEAU).await;

        assert!(observation.is_none());
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(current_weather_response("Clear", "clear sky"))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let settings = settings_for(&mock_server).with_timeout(Duration::from_millis(50));
        let observation = fetch_observation(&client, &settings, "Lambeau Field", LAMBEAU).await;

        assert!(observation.is_none());
    }

    #[tokio::test]
    async fn test_fetch_observations_preserves_order_and_skips_targets() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("lat", "44.5013"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(current_weather_response("Snow", "snow")),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("lat", "25.958"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let hard_rock = GeoPoint {
            lat: 25.958,
            lon: -80.2389,
        };
        let targets = vec![
            Some(("Lambeau Field", LAMBEAU)),
            None,
            Some(("Hard Rock Stadium", hard_rock)),
        ];

        let client = Client::new();
        let observations =
            fetch_observations(&client, &settings_for(&mock_server), targets).await;

        assert_eq!(observations.len(), 3);
        assert_eq!(
            observations[0].as_ref().and_then(|o| o.precipitation),
            Some(Precipitation::Snow)
        );
        assert!(observations[1].is_none());
        // one failed venue does not affect the others
        assert!(observations[2].is_none());
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(18.6), 19.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        let zero = round_half_up(-0.4);
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
    }

    #[tokio::test]
    async fn test_sub_zero_readings_round_toward_positive() {
        let mock_server = MockServer::start().await;

        let mut body = current_weather_response("Clear", "clear sky");
        body["main"]["temp"] = json!(-0.4);
        body["wind"]["speed"] = json!(2.5);

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let observation =
            fetch_observation(&client, &settings_for(&mock_server), "Lambeau Field", LAMBEAU)
                .await
                .expect("observation should be present");

        assert_eq!(observation.temperature_f, 0.0);
        assert_eq!(observation.wind_mph, 3.0);
        assert_eq!(observation.summary(), "0°F, 3 mph wind");
    }

    #[test]
    fn test_settings_defaults() {
        let settings = WeatherSettings::new("abc");
        assert_eq!(settings.base_url, OPENWEATHER_BASE_URL);
        assert_eq!(settings.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }
}
