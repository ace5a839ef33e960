//! Simplified Fire Weather Index.

use crate::indices::isi::calculate_isi;
use crate::indices::moisture::calculate_ffmc;
use crate::round2;

/// Calculate the simplified Canadian Fire Weather Index
///
/// A reduced FWI chain using only the FFMC and ISI sub-indices, corrected
/// for live vegetation moisture, same-day precipitation, and temperature:
///
/// ```text
/// FWI = ISI × max(0.3, 1 − W_veg/200) × max(0, 1 − P/10) × f(T)
/// ```
///
/// The temperature correction amplifies above 25°C by 2% per degree and
/// attenuates below 10°C by the factor T/10 floored at 0.3. Below 0°C the
/// raw factor goes negative; the 0.3 floor still applies and is the
/// intended behavior.
///
/// # Arguments
/// * `temperature` - Air temperature (°C)
/// * `humidity` - Relative humidity (%)
/// * `wind_speed` - Wind speed (m/s)
/// * `precipitation` - Rainfall over the last 24 hours (mm)
/// * `vegetation_moisture` - Live vegetation moisture (%), [0, 200]
pub fn calculate_simplified_fwi(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    precipitation: f64,
    vegetation_moisture: f64,
) -> f64 {
    let ffmc = calculate_ffmc(temperature, humidity, wind_speed, precipitation);
    let isi = calculate_isi(wind_speed, ffmc);

    let vegetation_factor = (1.0 - vegetation_moisture / 200.0).max(0.3);
    let precipitation_factor = (1.0 - precipitation / 10.0).max(0.0);

    let mut fwi = isi * vegetation_factor * precipitation_factor;

    if temperature > 25.0 {
        fwi *= 1.0 + (temperature - 25.0) * 0.02;
    } else if temperature < 10.0 {
        fwi *= (temperature / 10.0).max(0.3);
    }

    round2(fwi.max(0.0))
}
