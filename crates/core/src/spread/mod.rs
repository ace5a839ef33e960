//! Spread-Rate Engine
//!
//! Empirical front/flank/rear fire-spread model with burned-area ellipse
//! geometry, used by duty officers to size up a running fire:
//!
//! ```text
//! v1 = 26·E·(1 + 2.7·v)·(2 + W) / (ρ·(16 + W))   front, m/min
//! v2 = 0.35·v1 + 0.17                             flank, m/min
//! v3 = 0.10·v1 + 0.20                             rear, m/min
//! P  = 2π·sqrt(((v1 + v3)² + v2²) / 8) · t        perimeter
//! S  = 4×10⁻⁶ · P²                                area, m²
//! ```
//!
//! The front outruns flanks and rear, so the burned area is approximated
//! by an ellipse whose major axis lies along the wind and whose center is
//! displaced downwind from the ignition point.
//!
//! Pure computation: one input record in, one result out, no state. Inputs
//! are assumed pre-validated ([`crate::validation`]); the declared ranges
//! (ρ > 0, W ≥ 0) keep every denominator positive.

use crate::core_types::spread::{FireEllipse, SpreadInput, SpreadResult};
use crate::round2;
use std::f64::consts::PI;
use tracing::debug;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Calculate spread rates, perimeter, area, travelled distances, and the
/// bounding ellipse for one fire.
///
/// All speeds and distances follow the 2-decimal contract; the area pair
/// leaves the engine unrounded so `area_hectares` stays exactly
/// `area / 10000`.
pub fn calculate_fire_spread(input: &SpreadInput) -> SpreadResult {
    let SpreadInput {
        emissivity,
        wind_speed,
        bulk_density,
        fuel_moisture,
        elapsed_hours,
    } = *input;

    let front = 26.0 * emissivity * (1.0 + 2.7 * wind_speed) * (2.0 + fuel_moisture)
        / (bulk_density * (16.0 + fuel_moisture));
    let flank = 0.35 * front + 0.17;
    let rear = 0.10 * front + 0.20;

    let perimeter =
        2.0 * PI * (((front + rear).powi(2) + flank.powi(2)) / 8.0).sqrt() * elapsed_hours;
    let area = 4.0e-6 * perimeter.powi(2);

    let minutes = elapsed_hours * MINUTES_PER_HOUR;
    let front_distance = front * minutes;
    let flank_distance = flank * minutes;
    let rear_distance = rear * minutes;

    // Ellipse through the three extreme distances: the major axis spans
    // front-to-rear, the ignition point sits off-center toward the rear.
    let semi_major = (front_distance + rear_distance) / 2.0;
    let semi_minor = flank_distance;
    let center_offset = (front_distance - rear_distance) / 2.0;

    debug!(front, flank, rear, perimeter, area, "fire spread computed");

    SpreadResult {
        front_speed: round2(front),
        flank_speed: round2(flank),
        rear_speed: round2(rear),
        perimeter: round2(perimeter),
        area,
        area_hectares: area / 10_000.0,
        front_distance: round2(front_distance),
        flank_distance: round2(flank_distance),
        rear_distance: round2(rear_distance),
        ellipse: FireEllipse {
            semi_major: round2(semi_major),
            semi_minor: round2(semi_minor),
            center_offset: round2(center_offset),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_input() -> SpreadInput {
        SpreadInput {
            emissivity: 0.5,
            wind_speed: 2.0,
            bulk_density: 12.0,
            fuel_moisture: 15.0,
            elapsed_hours: 1.0,
        }
    }

    #[test]
    fn test_reference_scenario_all_positive() {
        let result = calculate_fire_spread(&reference_input());
        assert!(result.front_speed > 0.0);
        assert!(result.flank_speed > 0.0);
        assert!(result.rear_speed > 0.0);
        assert!(result.perimeter > 0.0);
        assert!(result.area > 0.0);
    }

    #[test]
    fn test_reference_scenario_front_speed() {
        // v1 = 26×0.5×(1+5.4)×17 / (12×31) = 1414.4/372 ≈ 3.80
        let result = calculate_fire_spread(&reference_input());
        assert_relative_eq!(result.front_speed, 3.8, epsilon = 0.01);
    }

    #[test]
    fn test_front_outruns_flank_and_rear() {
        let result = calculate_fire_spread(&reference_input());
        assert!(result.front_speed > result.flank_speed);
        assert!(result.flank_speed > result.rear_speed);
    }

    #[test]
    fn test_hectare_conversion_is_exact() {
        let result = calculate_fire_spread(&reference_input());
        assert_eq!(result.area_hectares, result.area / 10_000.0);
    }

    #[test]
    fn test_distances_scale_with_time() {
        let mut input = reference_input();
        let one_hour = calculate_fire_spread(&input);
        input.elapsed_hours = 3.0;
        let three_hours = calculate_fire_spread(&input);

        assert_relative_eq!(
            three_hours.front_distance,
            3.0 * one_hour.front_distance,
            epsilon = 0.05
        );
        assert_relative_eq!(
            three_hours.perimeter,
            3.0 * one_hour.perimeter,
            epsilon = 0.05
        );
    }

    #[test]
    fn test_wind_accelerates_front() {
        let mut input = reference_input();
        let calm = calculate_fire_spread(&input);
        input.wind_speed = 10.0;
        let windy = calculate_fire_spread(&input);
        assert!(windy.front_speed > calm.front_speed);
    }

    #[test]
    fn test_dense_fuel_slows_front() {
        let mut input = reference_input();
        let sparse = calculate_fire_spread(&input);
        input.bulk_density = 120.0;
        let dense = calculate_fire_spread(&input);
        assert!(dense.front_speed < sparse.front_speed);
    }

    #[test]
    fn test_ellipse_spans_front_to_rear() {
        let result = calculate_fire_spread(&reference_input());
        // Head vertex: center_offset + semi_major = front distance
        assert_relative_eq!(
            result.ellipse.center_offset + result.ellipse.semi_major,
            result.front_distance,
            epsilon = 0.05
        );
        // Back vertex: center_offset − semi_major = −rear distance
        assert_relative_eq!(
            result.ellipse.center_offset - result.ellipse.semi_major,
            -result.rear_distance,
            epsilon = 0.05
        );
        assert_relative_eq!(
            result.ellipse.semi_minor,
            result.flank_distance,
            epsilon = 0.05
        );
    }

    #[test]
    fn test_windless_fire_still_creeps() {
        // E·26·(2+W)/(ρ·(16+W)) stays positive without wind
        let input = SpreadInput {
            emissivity: 0.3,
            wind_speed: 0.0,
            bulk_density: 40.0,
            fuel_moisture: 30.0,
            elapsed_hours: 2.0,
        };
        let result = calculate_fire_spread(&input);
        assert!(result.front_speed > 0.0);
        assert!(result.rear_speed > 0.0);
    }
}
