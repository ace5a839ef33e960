//! Fire Danger Rating Core Library
//!
//! Computational core of the wildland-fire danger and spread service used
//! by the regional emergency-management department. Two independent pure
//! engines:
//!
//! - **Danger-Index Engine** ([`indices`]): daily weather and fuel
//!   observation in, Nesterov index, simplified Canadian FWI, composite
//!   danger index, four-level classification, and action recommendations
//!   out.
//! - **Spread-Rate Engine** ([`spread`]): flame, fuel, and wind parameters
//!   in, front/flank/rear spread rates, perimeter, area, and the
//!   wind-aligned burned-area ellipse out.
//!
//! Both engines are side-effect-free O(1) arithmetic and safe to call
//! concurrently. The single piece of cross-call state, the Nesterov
//! accumulator, is owned and threaded by the caller
//! ([`core_types::NesterovState`], with [`core_types::NesterovLedger`] as
//! the per-location store). Input range enforcement lives in
//! [`validation`]; the engines assume pre-validated values. All index
//! outputs are rounded to two decimals before leaving the engine.

// Core value types
pub mod core_types;

// Pure calculation engines
pub mod indices;
pub mod spread;

// Boundary and bulk entry points
pub mod batch;
pub mod validation;

// Demo data generation
pub mod synthetic;

// Re-export core types
pub use core_types::{DangerAssessment, DangerLevel, NesterovLedger, NesterovState};
pub use core_types::{FireEllipse, SpreadInput, SpreadResult};
pub use core_types::{ObservationSite, VegetationClass, WeatherObservation, WindDirection};

// Re-export engine entry points
pub use batch::{assess_batch, assess_series};
pub use indices::{assess, determine_danger_level};
pub use spread::calculate_fire_spread;
pub use validation::{validate_observation, validate_spread_input, ValidationError};

/// Round to the 2-decimal contract every engine output honors.
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
