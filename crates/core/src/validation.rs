//! Boundary validation of engine inputs.
//!
//! The engines assume pre-validated input and perform no range checks of
//! their own; this module is the single place the declared ranges are
//! enforced. API handlers and batch ingestion call these functions before
//! invoking either engine. Arithmetic degeneracies past this boundary
//! (NaN/∞ produced by the formulas themselves) propagate as-is so calling
//! layers can detect them.

use crate::core_types::spread::SpreadInput;
use crate::core_types::weather::WeatherObservation;
use thiserror::Error;

/// Rejection of an input field at the engine boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field is outside its declared range.
    #[error("{field} out of range: got {value}, expected {expected}")]
    OutOfRange {
        /// Offending field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// Field is NaN or infinite.
    #[error("{field} is not a finite number")]
    NonFinite {
        /// Offending field name.
        field: &'static str,
    },
}

/// Closed interval check: `min <= value <= max`.
fn check_closed(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    expected: &'static str,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            expected,
        });
    }
    Ok(())
}

/// Half-open interval check: `min < value <= max`.
fn check_open_min(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    expected: &'static str,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value <= min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            expected,
        });
    }
    Ok(())
}

/// Lower-bound check: `value >= min`.
fn check_min(
    field: &'static str,
    value: f64,
    min: f64,
    expected: &'static str,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < min {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            expected,
        });
    }
    Ok(())
}

/// Validate a weather observation against the declared input ranges.
///
/// # Errors
/// Returns the first field that is non-finite or outside its range.
pub fn validate_observation(observation: &WeatherObservation) -> Result<(), ValidationError> {
    check_closed(
        "temperature",
        observation.temperature,
        -50.0,
        60.0,
        "-50 to 60 °C",
    )?;
    check_closed("humidity", observation.humidity, 0.0, 100.0, "0 to 100 %")?;
    check_closed(
        "wind_speed",
        observation.wind_speed,
        0.0,
        50.0,
        "0 to 50 m/s",
    )?;
    check_min(
        "precipitation",
        observation.precipitation,
        0.0,
        "non-negative mm",
    )?;
    check_closed(
        "soil_moisture",
        observation.soil_moisture,
        0.0,
        100.0,
        "0 to 100 %",
    )?;
    check_closed(
        "vegetation_moisture",
        observation.vegetation_moisture,
        0.0,
        200.0,
        "0 to 200 %",
    )?;

    if let Some(site) = &observation.site {
        check_closed("latitude", site.latitude, -90.0, 90.0, "-90 to 90 °")?;
        check_closed("longitude", site.longitude, -180.0, 180.0, "-180 to 180 °")?;
    }

    Ok(())
}

/// Validate a spread-model input against the declared ranges.
///
/// The exclusive lower bounds on bulk density and elapsed time keep the
/// spread formulas free of zero denominators and zero-duration fires.
///
/// # Errors
/// Returns the first field that is non-finite or outside its range.
pub fn validate_spread_input(input: &SpreadInput) -> Result<(), ValidationError> {
    check_closed("emissivity", input.emissivity, 0.0, 1.0, "0 to 1")?;
    check_closed("wind_speed", input.wind_speed, 0.0, 50.0, "0 to 50 m/s")?;
    check_open_min(
        "bulk_density",
        input.bulk_density,
        0.0,
        1000.0,
        "over 0, at most 1000 kg/m³",
    )?;
    check_closed(
        "fuel_moisture",
        input.fuel_moisture,
        0.0,
        200.0,
        "0 to 200 %",
    )?;
    check_open_min(
        "elapsed_hours",
        input.elapsed_hours,
        0.0,
        72.0,
        "over 0, at most 72 h",
    )?;
    Ok(())
}
