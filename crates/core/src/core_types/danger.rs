//! Danger-rating output types and the carried Nesterov accumulator.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Composite-index threshold constants for the four danger bands.
///
/// These constants define the boundaries between danger rating categories and
/// should be used consistently across the codebase for classification and
/// testing. Note: Rust `Range` types use **inclusive lower bound and
/// exclusive upper bound** [a, b), so each boundary value belongs to the
/// higher band.
pub mod danger_ranges {
    use std::ops::{Range, RangeFrom};

    /// "Low" danger rating range `[0.0, 20.0)`.
    pub const LOW: Range<f64> = 0.0..20.0;

    /// "Medium" danger rating range `[20.0, 50.0)`.
    pub const MEDIUM: Range<f64> = 20.0..50.0;

    /// "High" danger rating range `[50.0, 75.0)`.
    pub const HIGH: Range<f64> = 50.0..75.0;

    /// "Extreme" danger rating `[75.0, ∞)` (75.0 inclusive, no upper bound).
    pub const EXTREME: RangeFrom<f64> = 75.0..;
}

/// Four-level fire danger rating derived from the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerLevel {
    /// Composite index below 20: routine conditions.
    Low,
    /// Composite index 20 to 50: elevated caution.
    Medium,
    /// Composite index 50 to 75: restricted access, crews on duty.
    High,
    /// Composite index 75 and above: emergency footing.
    Extreme,
}

impl DangerLevel {
    /// Display label for dashboards and reports.
    pub const fn label(self) -> &'static str {
        match self {
            DangerLevel::Low => "Low",
            DangerLevel::Medium => "Medium",
            DangerLevel::High => "High",
            DangerLevel::Extreme => "Extreme",
        }
    }

    /// Hex display color used by the map and report layers.
    pub const fn color(self) -> &'static str {
        match self {
            DangerLevel::Low => "#22c55e",     // green
            DangerLevel::Medium => "#eab308",  // yellow
            DangerLevel::High => "#f97316",    // orange
            DangerLevel::Extreme => "#ef4444", // red
        }
    }
}

/// Carried Nesterov accumulator for one location.
///
/// The engine is stateless: the caller owns this value and threads it
/// between successive daily calls. A day with precipitation of 3 mm or more
/// resets it to zero; every other day adds that day's temperature times
/// humidity deficit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NesterovState(f64);

impl NesterovState {
    /// Wrap a previously persisted accumulator value.
    pub const fn new(value: f64) -> Self {
        NesterovState(value)
    }

    /// The accumulated index value.
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Per-location store of last Nesterov accumulators.
///
/// The sequential carry is keyed by site label so independent locations
/// never mix their dryness histories. This lives with the caller, not the
/// engine; it is plain data with no interior mutability.
#[derive(Debug, Clone, Default)]
pub struct NesterovLedger {
    by_site: FxHashMap<String, NesterovState>,
}

impl NesterovLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded accumulator for a site, zero if the site is new.
    pub fn last(&self, site: &str) -> NesterovState {
        self.by_site.get(site).copied().unwrap_or_default()
    }

    /// Store the accumulator returned by the latest assessment of a site.
    pub fn record(&mut self, site: &str, state: NesterovState) {
        self.by_site.insert(site.to_owned(), state);
    }

    /// Number of sites with a recorded accumulator.
    pub fn len(&self) -> usize {
        self.by_site.len()
    }

    /// True if no site has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.by_site.is_empty()
    }
}

/// Full result of one danger assessment for one observation.
///
/// Constructed once by the engine and never mutated; the string fields are
/// denormalized copies of the level's label and color so persistence and
/// display layers need no further lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DangerAssessment {
    /// Cumulative Nesterov dryness index, 2-decimal contract.
    pub nesterov_index: f64,
    /// Simplified Canadian FWI, 2-decimal contract.
    pub fwi_index: f64,
    /// Weighted composite danger index, 2-decimal contract.
    pub composite_index: f64,
    /// Classified danger band.
    pub danger_level: DangerLevel,
    /// Display label of the band.
    pub danger_level_text: String,
    /// Hex display color of the band.
    pub danger_level_color: String,
    /// Severity-ordered action recommendations for the band.
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danger_ranges_are_contiguous() {
        assert_eq!(danger_ranges::LOW.end, danger_ranges::MEDIUM.start);
        assert_eq!(danger_ranges::MEDIUM.end, danger_ranges::HIGH.start);
        assert_eq!(danger_ranges::HIGH.end, danger_ranges::EXTREME.start);
    }

    #[test]
    fn test_ledger_defaults_to_zero_for_new_site() {
        let ledger = NesterovLedger::new();
        assert_eq!(ledger.last("Bayanaul").value(), 0.0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_ledger_keeps_sites_independent() {
        let mut ledger = NesterovLedger::new();
        ledger.record("Bayanaul", NesterovState::new(1200.0));
        ledger.record("Aksu", NesterovState::new(40.0));

        assert_eq!(ledger.last("Bayanaul").value(), 1200.0);
        assert_eq!(ledger.last("Aksu").value(), 40.0);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_ledger_record_overwrites() {
        let mut ledger = NesterovLedger::new();
        ledger.record("Aksu", NesterovState::new(40.0));
        ledger.record("Aksu", NesterovState::new(0.0));
        assert_eq!(ledger.last("Aksu").value(), 0.0);
        assert_eq!(ledger.len(), 1);
    }
}
