//! Core value types shared by both engines.

pub mod danger;
pub mod spread;
pub mod weather;

pub use danger::{danger_ranges, DangerAssessment, DangerLevel, NesterovLedger, NesterovState};
pub use spread::{FireEllipse, SpreadInput, SpreadResult};
pub use weather::{ObservationSite, VegetationClass, WeatherObservation, WindDirection};
