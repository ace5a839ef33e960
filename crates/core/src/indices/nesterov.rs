//! Nesterov cumulative dryness index.

use crate::indices::moisture::calculate_humidity_deficit;
use crate::round2;

/// Daily precipitation (mm) at or above which the accumulated index resets
/// to zero. A rain event of this size rewets fine fuel and clears the
/// accumulated dryness.
pub const RAIN_RESET_THRESHOLD_MM: f64 = 3.0;

/// Calculate the Nesterov fire-danger index
///
/// ```text
/// G = Σ (T × d)   over consecutive rain-free days
/// ```
///
/// where T is the 13:00 air temperature (°C) and d the humidity deficit
/// (hPa). Days at or below freezing contribute nothing. Precipitation of
/// 3 mm or more resets the sum to zero.
///
/// The caller persists the returned value and passes it back as
/// `previous_index` with the next day's observation; the engine keeps no
/// memory of its own.
///
/// # Arguments
/// * `temperature` - Air temperature (°C)
/// * `humidity` - Relative humidity (%)
/// * `precipitation` - Rainfall over the last 24 hours (mm)
/// * `previous_index` - Yesterday's accumulated index (0 for a fresh site)
pub fn calculate_nesterov_index(
    temperature: f64,
    humidity: f64,
    precipitation: f64,
    previous_index: f64,
) -> f64 {
    if precipitation >= RAIN_RESET_THRESHOLD_MM {
        return 0.0;
    }

    let deficit = calculate_humidity_deficit(temperature, humidity);
    let daily_increment = if temperature > 0.0 {
        temperature * deficit
    } else {
        0.0
    };

    round2(previous_index + daily_increment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rain_resets_regardless_of_other_inputs() {
        assert_eq!(calculate_nesterov_index(35.0, 10.0, 3.0, 9000.0), 0.0);
        assert_eq!(calculate_nesterov_index(35.0, 10.0, 15.0, 9000.0), 0.0);
        assert_eq!(calculate_nesterov_index(-20.0, 90.0, 3.0, 0.0), 0.0);
    }

    #[test]
    fn test_sub_threshold_rain_does_not_reset() {
        let index = calculate_nesterov_index(30.0, 20.0, 2.9, 500.0);
        assert!(index > 500.0, "index was {}", index);
    }

    #[test]
    fn test_freezing_day_carries_previous_index() {
        assert_eq!(calculate_nesterov_index(-5.0, 50.0, 0.0, 321.5), 321.5);
        assert_eq!(calculate_nesterov_index(0.0, 50.0, 0.0, 321.5), 321.5);
    }

    #[test]
    fn test_hot_dry_day_outgrows_humid_day() {
        let dry = calculate_nesterov_index(30.0, 20.0, 0.0, 0.0);
        let humid = calculate_nesterov_index(30.0, 80.0, 0.0, 0.0);
        assert!(dry > 0.0);
        assert!(dry > humid, "dry {} should exceed humid {}", dry, humid);
    }

    #[test]
    fn test_accumulation_over_consecutive_days() {
        // Ten identical rain-free days accumulate linearly
        let mut index = 0.0;
        let daily = calculate_nesterov_index(30.0, 20.0, 0.0, 0.0);
        for _ in 0..10 {
            index = calculate_nesterov_index(30.0, 20.0, 0.0, index);
        }
        assert!(
            (index - 10.0 * daily).abs() < 0.5,
            "ten days gave {}, one day {}",
            index,
            daily
        );
    }
}
