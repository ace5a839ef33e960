//! Composite danger index blending Nesterov and FWI.

use crate::core_types::weather::VegetationClass;
use crate::round2;

/// Fire-hazard coefficient of a vegetation cover class.
///
/// Conifer stands carry resinous, highly flammable fuel (1.5); broadleaf
/// stands are the least hazardous (1.0); mixed stands sit between (1.25).
/// `None` — an unrecognized label at the ingestion boundary — falls back to
/// the neutral 1.0, the one default this engine defines.
pub fn vegetation_coefficient(class: Option<VegetationClass>) -> f64 {
    match class {
        Some(VegetationClass::Coniferous) => 1.5,
        Some(VegetationClass::Mixed) => 1.25,
        Some(VegetationClass::Deciduous) | None => 1.0,
    }
}

/// Calculate the weighted composite danger index
///
/// Blends the two indices on a common 0-100 scale and applies the
/// territory corrections:
///
/// ```text
/// base      = 0.5 × min(100, G/100) + 0.5 × min(100, FWI)
/// wind      = 1 + max(0, U − 5) × 0.05
/// soil      = max(0.5, 1 − S/200)
/// composite = base × vegetation × wind × soil
/// ```
///
/// The Nesterov index divides by 100 against its practical 0-10000 range
/// so both inputs weigh equally.
///
/// # Arguments
/// * `nesterov_index` - Accumulated Nesterov index
/// * `fwi_index` - Simplified FWI
/// * `vegetation` - Vegetation cover class
/// * `wind_speed` - Wind speed (m/s); above 5 m/s amplifies risk linearly
/// * `soil_moisture` - Soil moisture (%); wet soil attenuates down to 0.5
pub fn calculate_composite_index(
    nesterov_index: f64,
    fwi_index: f64,
    vegetation: VegetationClass,
    wind_speed: f64,
    soil_moisture: f64,
) -> f64 {
    let normalized_nesterov = (nesterov_index / 100.0).min(100.0);
    let normalized_fwi = fwi_index.min(100.0);
    let base = 0.5 * normalized_nesterov + 0.5 * normalized_fwi;

    let wind_factor = 1.0 + (wind_speed - 5.0).max(0.0) * 0.05;
    let soil_factor = (1.0 - soil_moisture / 200.0).max(0.5);

    round2(base * vegetation_coefficient(Some(vegetation)) * wind_factor * soil_factor)
}
