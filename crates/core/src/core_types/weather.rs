//! Weather observation input types for the danger-index engine.
//!
//! A [`WeatherObservation`] is one daily reading for one location, taken the
//! way fire services record the 13:00 synoptic observation: air temperature,
//! relative humidity, wind, precipitation over the last 24 hours, and the
//! moisture state of soil and vegetation. The engine treats it as an
//! immutable value; validation of the declared ranges happens at the
//! boundary (see [`crate::validation`]), never inside the formulas.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Eight-point compass direction the wind blows from.
///
/// Serialized with the conventional compass abbreviations ("N", "NE", ...)
/// so observation records read naturally in JSON and tabular exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
}

impl WindDirection {
    /// All eight directions in clockwise compass order starting at north.
    pub const ALL: [WindDirection; 8] = [
        WindDirection::North,
        WindDirection::NorthEast,
        WindDirection::East,
        WindDirection::SouthEast,
        WindDirection::South,
        WindDirection::SouthWest,
        WindDirection::West,
        WindDirection::NorthWest,
    ];

    /// Compass abbreviation ("N", "NE", ...).
    pub const fn abbreviation(self) -> &'static str {
        match self {
            WindDirection::North => "N",
            WindDirection::NorthEast => "NE",
            WindDirection::East => "E",
            WindDirection::SouthEast => "SE",
            WindDirection::South => "S",
            WindDirection::SouthWest => "SW",
            WindDirection::West => "W",
            WindDirection::NorthWest => "NW",
        }
    }

    /// Compass azimuth the wind blows from, degrees clockwise from north.
    pub const fn azimuth_degrees(self) -> f64 {
        match self {
            WindDirection::North => 0.0,
            WindDirection::NorthEast => 45.0,
            WindDirection::East => 90.0,
            WindDirection::SouthEast => 135.0,
            WindDirection::South => 180.0,
            WindDirection::SouthWest => 225.0,
            WindDirection::West => 270.0,
            WindDirection::NorthWest => 315.0,
        }
    }

    /// Unit vector of the airflow on the map plane, in (east, north)
    /// coordinates.
    ///
    /// The wind blows *from* the named compass point, so a north wind
    /// returns (0, -1): air moving toward the south. This is the direction
    /// a fire front advances and the major axis of the burned-area ellipse.
    pub fn downwind_vector(self) -> Vector2<f64> {
        let azimuth = self.azimuth_degrees().to_radians();
        // From-direction unit vector is (sin, cos); the airflow is opposite.
        Vector2::new(-azimuth.sin(), -azimuth.cos())
    }
}

/// Vegetation cover class of the assessed territory.
///
/// Closed set: the three classes the hazard-coefficient table knows about.
/// Free-text labels from ingestion go through [`VegetationClass::from_label`],
/// which is where the unknown-label fallback lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VegetationClass {
    /// Conifer stands, the most fire-hazardous cover.
    Coniferous,
    /// Broadleaf stands, the least hazardous cover.
    Deciduous,
    /// Mixed conifer/broadleaf stands.
    Mixed,
}

impl VegetationClass {
    /// Parse a free-text vegetation label, case-insensitively.
    ///
    /// Returns `None` for anything outside the closed set; callers decide
    /// the fallback (the composite-index engine substitutes the deciduous
    /// coefficient of 1.0).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "coniferous" => Some(VegetationClass::Coniferous),
            "deciduous" => Some(VegetationClass::Deciduous),
            "mixed" => Some(VegetationClass::Mixed),
            _ => None,
        }
    }
}

/// Named observation point, pass-through metadata for persistence and maps.
///
/// None of these fields enter any formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSite {
    /// Human-readable site label, also the ledger key for the carried
    /// Nesterov accumulator.
    pub name: String,
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
}

/// One daily weather and fuel reading for a single location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature (°C), valid range [-50, 60].
    pub temperature: f64,
    /// Relative humidity (%), [0, 100].
    pub humidity: f64,
    /// Wind speed (m/s), [0, 50].
    pub wind_speed: f64,
    /// Compass point the wind blows from.
    pub wind_direction: WindDirection,
    /// Precipitation over the last 24 hours (mm), non-negative.
    pub precipitation: f64,
    /// Soil moisture (%), [0, 100].
    pub soil_moisture: f64,
    /// Vegetation moisture (%), [0, 200].
    pub vegetation_moisture: f64,
    /// Vegetation cover class of the territory.
    pub vegetation: VegetationClass,
    /// Optional site metadata, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<ObservationSite>,
}
