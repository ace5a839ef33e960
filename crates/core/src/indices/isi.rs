//! Initial Spread Index.

use crate::indices::MS_TO_KMH;
use crate::round2;

/// Calculate the Initial Spread Index from wind and the FFMC
///
/// Combines the wind function and the fine-fuel moisture function of the
/// Canadian FWI system into an expected spread-rate proxy:
///
/// ```text
/// m   = 147.2 × (101 − FFMC) / (59.5 + FFMC)
/// f_W = exp(0.05039 × U_kmh)
/// f_F = 91.9 × exp(−0.1386 m) × (1 + m^5.31 / 4.93e7)
/// ISI = 0.208 × f_W × f_F
/// ```
///
/// # Arguments
/// * `wind_speed` - Wind speed (m/s)
/// * `ffmc` - Fine Fuel Moisture Code, 0-100
pub fn calculate_isi(wind_speed: f64, ffmc: f64) -> f64 {
    // Invert the FFMC scale back to fuel moisture
    let m = 147.2 * (101.0 - ffmc) / (59.5 + ffmc);

    let wind_kmh = wind_speed * MS_TO_KMH;
    let fw = (0.05039 * wind_kmh).exp();
    let ff = 91.9 * (-0.1386 * m).exp() * (1.0 + m.powf(5.31) / 4.93e7);

    round2(0.208 * fw * ff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isi_non_negative_and_finite() {
        for &(w, ffmc) in &[(0.0, 0.0), (0.0, 100.0), (50.0, 100.0), (50.0, 0.0)] {
            let isi = calculate_isi(w, ffmc);
            assert!(isi.is_finite() && isi >= 0.0, "ISI was {}", isi);
        }
    }

    #[test]
    fn test_isi_grows_with_wind() {
        let calm = calculate_isi(0.0, 85.0);
        let windy = calculate_isi(15.0, 85.0);
        assert!(windy > calm, "ISI {} should exceed {}", windy, calm);
    }

    #[test]
    fn test_isi_grows_with_ffmc() {
        let damp = calculate_isi(5.0, 60.0);
        let dry = calculate_isi(5.0, 95.0);
        assert!(dry > damp, "ISI {} should exceed {}", dry, damp);
    }

    #[test]
    fn test_isi_saturated_fuel_is_negligible() {
        // FFMC 0 corresponds to fuel moisture ~250%; spread is essentially nil
        let isi = calculate_isi(5.0, 0.0);
        assert!(isi < 1.0, "ISI was {}", isi);
    }
}
