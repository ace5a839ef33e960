//! Atmospheric and fine-fuel moisture formulas.
//!
//! Two moisture quantities feed the index chain: the humidity deficit of
//! the air (Magnus saturated vapor pressure), which drives the Nesterov
//! accumulation, and the Fine Fuel Moisture Code (FFMC), the fast-drying
//! surface-fuel sub-index of the Canadian FWI system.
//!
//! # References
//! - Magnus, G. (1844) saturation vapor pressure approximation, WMO form.
//! - Van Wagner, C.E., Pickett, T.L. (1985). "Equations and FORTRAN program
//!   for the Canadian Forest Fire Weather Index System." Canadian Forestry
//!   Service, Forestry Technical Report 33.

use crate::indices::MS_TO_KMH;
use crate::round2;

/// Standard starting moisture of fine fuel before the day's adjustment.
const INITIAL_FINE_FUEL_MOISTURE: f64 = 85.0;

/// Rainfall below this amount (mm) is intercepted by the canopy and does
/// not reach fine fuel.
const RAIN_INTERCEPTION_MM: f64 = 0.5;

/// Calculate the humidity deficit of the air (hPa)
///
/// Deficit = saturated vapor pressure minus actual vapor pressure:
///
/// ```text
/// e_s = 6.11 × 10^(7.5×T / (237.3+T))    (Magnus approximation)
/// d   = (100 − H) × e_s / 100
/// ```
///
/// Returns 0 for temperatures at or below freezing, where the dryness
/// accumulation model is not meaningful.
///
/// # Arguments
/// * `temperature` - Air temperature (°C)
/// * `humidity` - Relative humidity (%)
pub fn calculate_humidity_deficit(temperature: f64, humidity: f64) -> f64 {
    if temperature <= 0.0 {
        return 0.0;
    }

    let saturated = 6.11 * 10f64.powf(7.5 * temperature / (237.3 + temperature));
    let deficit = (100.0 - humidity) * saturated / 100.0;

    deficit.max(0.0)
}

/// Calculate the Fine Fuel Moisture Code, 0-100 (100 = driest)
///
/// Simplified single-day form of the Van Wagner FFMC: fuel moisture starts
/// from the standard value of 85, is wetted by effective rainfall, then
/// dries or wets toward the day's equilibrium at a wind- and
/// humidity-dependent log rate.
///
/// # Arguments
/// * `temperature` - Air temperature (°C)
/// * `humidity` - Relative humidity (%)
/// * `wind_speed` - Wind speed (m/s)
/// * `precipitation` - Rainfall over the last 24 hours (mm)
pub fn calculate_ffmc(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    precipitation: f64,
) -> f64 {
    let mut mo = INITIAL_FINE_FUEL_MOISTURE;

    // Rain absorption: exponential saturation of the fuel bed, with a
    // quadratic overflow term once moisture exceeds 150.
    if precipitation > RAIN_INTERCEPTION_MM {
        let rf = precipitation - RAIN_INTERCEPTION_MM;
        let absorption = 42.5 * rf * (-100.0 / (251.0 - mo)).exp() * (1.0 - (-6.93 / rf).exp());
        mo = if mo <= 150.0 {
            mo + absorption
        } else {
            mo + absorption + 0.0015 * (mo - 150.0).powi(2) * rf.sqrt()
        };
        mo = mo.min(250.0);
    }

    // Drying equilibrium moisture
    let ed = 0.942 * humidity.powf(0.679)
        + 11.0 * ((humidity - 100.0) / 10.0).exp()
        + 0.18 * (21.1 - temperature) * (1.0 - (-0.115 * humidity).exp());

    // Wetting equilibrium moisture
    let ew = 0.618 * humidity.powf(0.753)
        + 10.0 * ((humidity - 100.0) / 10.0).exp()
        + 0.18 * (21.1 - temperature) * (1.0 - (-0.115 * humidity).exp());

    let wind_kmh = wind_speed * MS_TO_KMH;

    let m = if mo > ed {
        // Drying toward ed at log rate kd
        let ko = 0.424 * (1.0 - (humidity / 100.0).powf(1.7))
            + 0.0694 * wind_kmh.sqrt() * (1.0 - (humidity / 100.0).powi(8));
        let kd = ko * 0.581 * (0.0365 * temperature).exp();
        ed + (mo - ed) * 10f64.powf(-kd)
    } else if mo < ew {
        // Wetting toward ew at the symmetric log rate kw
        let kl = 0.424 * (1.0 - ((100.0 - humidity) / 100.0).powf(1.7))
            + 0.0694 * wind_kmh.sqrt() * (1.0 - ((100.0 - humidity) / 100.0).powi(8));
        let kw = kl * 0.581 * (0.0365 * temperature).exp();
        ew - (ew - mo) * 10f64.powf(-kw)
    } else {
        mo
    };

    // Moisture to FFMC scale
    let ffmc = 59.5 * (250.0 - m) / (147.2 + m);

    round2(ffmc.clamp(0.0, 100.0))
}
