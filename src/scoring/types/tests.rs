//! Unit tests for scoring data types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_precipitation_from_condition() {
        assert_eq!(Precipitation::from_condition("Rain"), Some(Precipitation::Rain));
        assert_eq!(Precipitation::from_condition("Snow"), Some(Precipitation::Snow));
        assert_eq!(
            Precipitation::from_condition("Drizzle"),
            Some(Precipitation::LightRain)
        );
        assert_eq!(Precipitation::from_condition("Clear"), None);
        assert_eq!(Precipitation::from_condition("Clouds"), None);
        assert_eq!(Precipitation::from_condition("Thunderstorm"), None);
    }

    #[test]
    fn test_precipitation_from_str() {
        assert_eq!("rain".parse::<Precipitation>().unwrap(), Precipitation::Rain);
        assert_eq!("SNOW".parse::<Precipitation>().unwrap(), Precipitation::Snow);
        assert_eq!(
            "light_rain".parse::<Precipitation>().unwrap(),
            Precipitation::LightRain
        );
        assert_eq!(
            "drizzle".parse::<Precipitation>().unwrap(),
            Precipitation::LightRain
        );

        match "hail".parse::<Precipitation>().unwrap_err() {
            WeatherFactorsError::InvalidPrecipitation { input } => assert_eq!(input, "hail"),
            _ => panic!("Expected InvalidPrecipitation error"),
        }
    }

    #[test]
    fn test_precipitation_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(Precipitation::LightRain).unwrap(),
            json!("light_rain")
        );
    }

    #[test]
    fn test_observation_summary() {
        let clear = WeatherObservation::new(70.0, 5.0, None);
        assert_eq!(clear.summary(), "70°F, 5 mph wind");

        let snowy = WeatherObservation::new(15.0, 22.0, Some(Precipitation::Snow));
        assert_eq!(snowy.summary(), "15°F, 22 mph wind, snow");

        let drizzle = WeatherObservation::new(48.0, 9.0, Some(Precipitation::LightRain));
        assert_eq!(drizzle.summary(), "48°F, 9 mph wind, light_rain");
    }

    #[test]
    fn test_summary_never_prints_negative_zero() {
        let near_zero = WeatherObservation::new(-0.0, 3.0, None);
        assert_eq!(near_zero.summary(), "0°F, 3 mph wind");

        let below = WeatherObservation::new(-7.0, 0.0, Some(Precipitation::Snow));
        assert_eq!(below.summary(), "-7°F, 0 mph wind, snow");
    }

    #[test]
    fn test_observation_deserialization_defaults() {
        let observation: WeatherObservation = serde_json::from_value(json!({
            "temperature_f": 41.0,
            "wind_mph": 12.0
        }))
        .unwrap();

        assert_eq!(observation.precipitation, None);
        assert!(!observation.has_precipitation());
        assert_eq!(observation.humidity, None);
    }

    #[test]
    fn test_weather_factor_serializes_as_label() {
        let factors = vec![WeatherFactor::Freezing, WeatherFactor::DomeTeamOutdoors];
        assert_eq!(
            serde_json::to_value(&factors).unwrap(),
            json!(["freezing conditions", "dome team outdoors"])
        );
        assert_eq!(WeatherFactor::StrongWinds.to_string(), "strong winds");
    }

    #[test]
    fn test_weather_displacement() {
        let result = StadiumFactorResult {
            stadium_name: "Lambeau Field".to_string(),
            home_team: "Green Bay Packers".to_string(),
            away_team: "Miami Dolphins".to_string(),
            passing_factor: 0.9,
            rushing_factor: 1.1,
            kicking_factor: 0.8,
            is_dome: false,
            weather_summary: "20°F, 10 mph wind".to_string(),
            baseline_passing: 0.95,
            baseline_rushing: 1.05,
            baseline_kicking: 0.9,
            team_weather_advantage: TeamAdvantage {
                home_advantage: 1.0,
                away_disadvantage: 1.0,
                advantage_score: 100,
                narrative: "Neutral weather conditions".to_string(),
                factors: vec![],
            },
            position_impacts: PositionImpacts::NEUTRAL,
            raw_weather: None,
            kickoff_time: None,
            status: None,
        };

        assert!((result.weather_displacement() - 0.2).abs() < 1e-9);
    }
}
