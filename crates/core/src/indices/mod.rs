//! Danger-Index Engine
//!
//! The chain of empirical fire-danger formulas used for daily territory
//! assessment:
//!
//! - Nesterov cumulative dryness index (temperature times humidity deficit,
//!   summed over rain-free days),
//! - a simplified Canadian Fire Weather Index derivative built from the
//!   FFMC and ISI sub-indices,
//! - a weighted composite of the two with vegetation, wind, and soil
//!   corrections, and
//! - the four-level danger classification with per-level action
//!   recommendations.
//!
//! Every function here is pure: explicit inputs, a freshly computed value
//! out, no internal state. The single piece of cross-call state, the
//! Nesterov accumulator, is threaded by the caller (see
//! [`crate::core_types::NesterovState`]). All outputs are rounded to two
//! decimals before leaving the engine.
//!
//! # References
//! - Nesterov, V.G. (1949). "Combustibility of the forest and methods for
//!   its determination." Goslesbumizdat.
//! - Van Wagner, C.E. (1987). "Development and structure of the Canadian
//!   Forest Fire Weather Index System." Canadian Forestry Service,
//!   Technical Report 35.

pub mod composite;
pub mod fwi;
pub mod isi;
pub mod moisture;
pub mod nesterov;
pub mod rating;

pub use composite::{calculate_composite_index, vegetation_coefficient};
pub use fwi::calculate_simplified_fwi;
pub use isi::calculate_isi;
pub use moisture::{calculate_ffmc, calculate_humidity_deficit};
pub use nesterov::{calculate_nesterov_index, RAIN_RESET_THRESHOLD_MM};
pub use rating::{assess, determine_danger_level, recommendations};

/// Wind speed conversion used throughout the FWI chain (m/s to km/h).
pub(crate) const MS_TO_KMH: f64 = 3.6;
