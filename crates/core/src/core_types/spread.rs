//! Spread-rate engine input and output types.

use crate::core_types::weather::WindDirection;
use nalgebra::{Point2, Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Flame, fuel, and wind parameters for one spread calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadInput {
    /// Flame emissivity coefficient E, [0, 1].
    pub emissivity: f64,
    /// Sub-canopy wind speed v (m/s), [0, 50].
    pub wind_speed: f64,
    /// Fuel bulk density rho (kg/m³), (0, 1000].
    pub bulk_density: f64,
    /// Fuel moisture W (%), [0, 200].
    pub fuel_moisture: f64,
    /// Elapsed time since ignition t (hours), (0, 72].
    pub elapsed_hours: f64,
}

/// Display ellipse bounding the burned area, in meters.
///
/// The front outruns the rear, so the ignition point is not the ellipse
/// center: the center sits `center_offset` meters downwind of it. All
/// coordinates produced here are map-local (east, north) meters around the
/// ignition point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireEllipse {
    /// Semi-major axis along the wind (m).
    pub semi_major: f64,
    /// Semi-minor axis across the wind (m).
    pub semi_minor: f64,
    /// Distance from ignition point to ellipse center, downwind (m).
    pub center_offset: f64,
}

impl FireEllipse {
    /// Major-axis vector: the downwind direction scaled to the semi-major
    /// length. Useful for drawing the spread arrow on a map layer.
    pub fn axis_vector(&self, wind: WindDirection) -> Vector2<f64> {
        wind.downwind_vector() * self.semi_major
    }

    /// Ellipse center relative to the ignition point.
    pub fn center(&self, wind: WindDirection) -> Point2<f64> {
        Point2::from(wind.downwind_vector() * self.center_offset)
    }

    /// Outline polygon of the ellipse, `segments` points, map-local meters.
    ///
    /// The major axis is aligned with the airflow of `wind`. Returns an
    /// empty vector for zero segments.
    pub fn outline(&self, wind: WindDirection, segments: usize) -> Vec<Point2<f64>> {
        let axis = wind.downwind_vector();
        let rotation = Rotation2::new(axis.y.atan2(axis.x));
        let center = axis * self.center_offset;

        (0..segments)
            .map(|i| {
                let theta = TAU * (i as f64) / (segments as f64);
                let local = Vector2::new(
                    self.semi_major * theta.cos(),
                    self.semi_minor * theta.sin(),
                );
                Point2::from(center + rotation * local)
            })
            .collect()
    }
}

/// Full result of one fire-spread calculation.
///
/// Speeds follow the 2-decimal contract. The area pair is kept unrounded:
/// rounding square meters to two decimals would collapse small fires to
/// zero and break the exact `area_hectares = area / 10000` relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadResult {
    /// Front (head) spread rate v1 (m/min).
    pub front_speed: f64,
    /// Flank spread rate v2 (m/min).
    pub flank_speed: f64,
    /// Rear (back) spread rate v3 (m/min).
    pub rear_speed: f64,
    /// Fire perimeter after the elapsed time (m).
    pub perimeter: f64,
    /// Burned area after the elapsed time (m²).
    pub area: f64,
    /// Burned area in hectares, exactly `area / 10000`.
    pub area_hectares: f64,
    /// Distance travelled by the front over the elapsed time (m).
    pub front_distance: f64,
    /// Distance travelled by each flank over the elapsed time (m).
    pub flank_distance: f64,
    /// Distance travelled by the rear over the elapsed time (m).
    pub rear_distance: f64,
    /// Bounding display ellipse.
    pub ellipse: FireEllipse,
}
