//! Danger classification, recommendations, and the full assessment chain.

use crate::core_types::danger::{danger_ranges, DangerAssessment, DangerLevel, NesterovState};
use crate::core_types::weather::WeatherObservation;
use crate::indices::composite::calculate_composite_index;
use crate::indices::fwi::calculate_simplified_fwi;
use crate::indices::nesterov::calculate_nesterov_index;
use tracing::debug;

/// Classify a composite index into a danger band.
///
/// The bands partition the non-negative line exhaustively and disjointly;
/// each boundary value (20, 50, 75) belongs to the band it opens.
pub fn determine_danger_level(composite_index: f64) -> DangerLevel {
    match composite_index {
        c if c < danger_ranges::LOW.end => DangerLevel::Low,
        c if c < danger_ranges::MEDIUM.end => DangerLevel::Medium,
        c if c < danger_ranges::HIGH.end => DangerLevel::High,
        _ => DangerLevel::Extreme,
    }
}

/// Severity-ordered action recommendations for a danger band.
///
/// Fixed per-level text blocks; the danger level alone selects the list.
pub const fn recommendations(level: DangerLevel) -> &'static [&'static str] {
    match level {
        DangerLevel::Low => &[
            "Fire situation is within normal limits",
            "Continue routine monitoring of the territory",
            "Maintain the standard readiness level",
        ],
        DangerLevel::Medium => &[
            "Step up patrols of forested areas",
            "Verify readiness of firefighting equipment",
            "Restrict open fires in the forest zone",
            "Inform the public about precautionary measures",
        ],
        DangerLevel::High => &[
            "Introduce a special fire-prevention regime",
            "Prohibit public access to forests",
            "Put fire crews on standing duty",
            "Stage equipment for rapid response",
            "Increase aerial patrols of the territory",
        ],
        DangerLevel::Extreme => &[
            "ATTENTION! Extreme fire danger!",
            "Declare a state of emergency",
            "Prohibit all work in the forest zone",
            "Mobilize all firefighting forces",
            "Prepare evacuation of settlements near forests",
            "Alert all emergency response services",
            "Set up round-the-clock duty watch",
        ],
    }
}

/// Run the full danger assessment for one observation.
///
/// Chains Nesterov, simplified FWI, the composite index, classification,
/// and recommendations. Returns the assessment together with the advanced
/// Nesterov accumulator, which the caller persists for the site's next day
/// (see [`crate::core_types::NesterovLedger`]).
///
/// Input is assumed pre-validated (see [`crate::validation`]); the engine
/// performs no range checks of its own.
pub fn assess(
    observation: &WeatherObservation,
    previous: NesterovState,
) -> (DangerAssessment, NesterovState) {
    let nesterov_index = calculate_nesterov_index(
        observation.temperature,
        observation.humidity,
        observation.precipitation,
        previous.value(),
    );
    let fwi_index = calculate_simplified_fwi(
        observation.temperature,
        observation.humidity,
        observation.wind_speed,
        observation.precipitation,
        observation.vegetation_moisture,
    );
    let composite_index = calculate_composite_index(
        nesterov_index,
        fwi_index,
        observation.vegetation,
        observation.wind_speed,
        observation.soil_moisture,
    );
    let danger_level = determine_danger_level(composite_index);

    debug!(
        nesterov_index,
        fwi_index,
        composite_index,
        level = danger_level.label(),
        "danger assessment computed"
    );

    let assessment = DangerAssessment {
        nesterov_index,
        fwi_index,
        composite_index,
        danger_level,
        danger_level_text: danger_level.label().to_owned(),
        danger_level_color: danger_level.color().to_owned(),
        recommendations: recommendations(danger_level)
            .iter()
            .map(|text| (*text).to_owned())
            .collect(),
    };

    (assessment, NesterovState::new(nesterov_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::weather::{VegetationClass, WindDirection};

    fn observation(temperature: f64, humidity: f64, precipitation: f64) -> WeatherObservation {
        WeatherObservation {
            temperature,
            humidity,
            wind_speed: 4.0,
            wind_direction: WindDirection::NorthWest,
            precipitation,
            soil_moisture: 50.0,
            vegetation_moisture: 100.0,
            vegetation: VegetationClass::Mixed,
            site: None,
        }
    }

    #[test]
    fn test_boundaries_belong_to_upper_band() {
        assert_eq!(determine_danger_level(20.0), DangerLevel::Medium);
        assert_eq!(determine_danger_level(50.0), DangerLevel::High);
        assert_eq!(determine_danger_level(75.0), DangerLevel::Extreme);
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(determine_danger_level(0.0), DangerLevel::Low);
        assert_eq!(determine_danger_level(19.99), DangerLevel::Low);
        assert_eq!(determine_danger_level(49.99), DangerLevel::Medium);
        assert_eq!(determine_danger_level(74.99), DangerLevel::High);
        assert_eq!(determine_danger_level(1e6), DangerLevel::Extreme);
    }

    #[test]
    fn test_recommendations_grow_with_severity() {
        let low = recommendations(DangerLevel::Low);
        let extreme = recommendations(DangerLevel::Extreme);
        assert_eq!(low.len(), 3);
        assert_eq!(extreme.len(), 7);
        assert!(extreme.len() > low.len());
    }

    #[test]
    fn test_assess_populates_level_attributes() {
        let (assessment, _) = assess(&observation(30.0, 20.0, 0.0), NesterovState::default());
        assert_eq!(
            assessment.danger_level_text,
            assessment.danger_level.label()
        );
        assert_eq!(
            assessment.danger_level_color,
            assessment.danger_level.color()
        );
        assert_eq!(
            assessment.recommendations.len(),
            recommendations(assessment.danger_level).len()
        );
    }

    #[test]
    fn test_assess_advances_accumulator() {
        let first = observation(30.0, 20.0, 0.0);
        let (day1, state) = assess(&first, NesterovState::default());
        assert!(day1.nesterov_index > 0.0);
        assert_eq!(state.value(), day1.nesterov_index);

        let (day2, _) = assess(&first, state);
        assert!(day2.nesterov_index > day1.nesterov_index);
    }

    #[test]
    fn test_assess_rain_day_resets_accumulator() {
        let rainy = observation(25.0, 60.0, 8.0);
        let (assessment, state) = assess(&rainy, NesterovState::new(4000.0));
        assert_eq!(assessment.nesterov_index, 0.0);
        assert_eq!(state.value(), 0.0);
    }
}
