//! Unit tests for position-group impacts

use super::*;
use crate::scoring::types::Precipitation;

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_dome_and_missing_weather_are_neutral() {
        let coefficients = PositionWeatherImpact::default();
        let blizzard = WeatherObservation::new(10.0, 30.0, Some(Precipitation::Snow));

        assert_eq!(
            compute_position_impacts(Some(&blizzard), true, &coefficients),
            PositionImpacts::NEUTRAL
        );
        assert_eq!(
            compute_position_impacts(None, false, &coefficients),
            PositionImpacts::NEUTRAL
        );
    }

    #[test]
    fn test_freezing_snow() {
        let coefficients = PositionWeatherImpact::default();
        let observation = WeatherObservation::new(15.0, 22.0, Some(Precipitation::Snow));

        let impacts = compute_position_impacts(Some(&observation), false, &coefficients);

        assert_eq!(impacts.passing_offense, 0.613);
        assert_eq!(impacts.rushing_offense, 1.187);
        assert_eq!(impacts.field_goal_unit, 0.48);
        // 1.08 * 1.03 = 1.1124
        assert_eq!(impacts.defense, 1.112);
        // 1.23 * 1.12 = 1.3776
        assert_eq!(impacts.turnover_rate, 1.378);
    }

    #[test]
    fn test_light_rain_counts_as_wet() {
        let coefficients = PositionWeatherImpact::default();
        let observation = WeatherObservation::new(55.0, 5.0, Some(Precipitation::LightRain));

        let impacts = compute_position_impacts(Some(&observation), false, &coefficients);

        assert_eq!(impacts.defense, 1.08);
        assert_eq!(impacts.turnover_rate, 1.12);
    }

    #[test]
    fn test_dry_freezing() {
        let coefficients = PositionWeatherImpact::default();
        let observation = WeatherObservation::new(32.0, 5.0, None);

        let impacts = compute_position_impacts(Some(&observation), false, &coefficients);

        assert_eq!(impacts.defense, 1.03);
        assert_eq!(impacts.turnover_rate, 1.23);
    }

    #[test]
    fn test_field_goal_unit_drops_past_fifteen_mph() {
        let coefficients = PositionWeatherImpact::default();
        let calmer = WeatherObservation::new(50.0, 14.0, None);
        let windier = WeatherObservation::new(50.0, 16.0, None);

        let before = compute_position_impacts(Some(&calmer), false, &coefficients);
        let after = compute_position_impacts(Some(&windier), false, &coefficients);

        assert!(after.field_goal_unit < before.field_goal_unit);
    }

    #[test]
    fn test_custom_coefficients() {
        let coefficients = PositionWeatherImpact {
            turnover_freezing: 1.5,
            ..PositionWeatherImpact::default()
        };
        let observation = WeatherObservation::new(20.0, 0.0, None);

        let impacts = compute_position_impacts(Some(&observation), false, &coefficients);
        assert_eq!(impacts.turnover_rate, 1.5);
    }
}
