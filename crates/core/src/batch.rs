//! Bulk assessment entry points for tabular ingestion.
//!
//! Batch import hands the engine one row per file line. Two calling
//! conventions exist:
//!
//! - [`assess_batch`] treats every row as an independent
//!   precipitation-day, with no Nesterov carry-over between rows, and runs
//!   them in parallel — the engines are pure, so rows need no
//!   coordination.
//! - [`assess_series`] is the sequential form for a day-ordered history of
//!   one site, threading the accumulator through a [`NesterovLedger`].

use crate::core_types::danger::{DangerAssessment, NesterovLedger, NesterovState};
use crate::core_types::weather::WeatherObservation;
use crate::indices::rating::assess;
use crate::validation::{validate_observation, ValidationError};
use rayon::prelude::*;

/// Validate and assess a batch of independent rows in parallel.
///
/// Result order matches input order. Each row is validated first; a
/// rejected row yields its [`ValidationError`] in place without affecting
/// the others. No Nesterov state is carried between rows: each row is
/// assessed from a zero accumulator.
pub fn assess_batch(
    rows: &[WeatherObservation],
) -> Vec<Result<DangerAssessment, ValidationError>> {
    rows.par_iter()
        .map(|row| {
            validate_observation(row)?;
            let (assessment, _) = assess(row, NesterovState::default());
            Ok(assessment)
        })
        .collect()
}

/// Validate and assess a day-ordered series for one site, carrying the
/// Nesterov accumulator from day to day.
///
/// Starts from the ledger's last accumulator for `site` and records the
/// final state back into the ledger on success.
///
/// # Errors
/// Stops at the first invalid day and returns its [`ValidationError`]; the
/// ledger is left untouched in that case.
pub fn assess_series(
    site: &str,
    days: &[WeatherObservation],
    ledger: &mut NesterovLedger,
) -> Result<Vec<DangerAssessment>, ValidationError> {
    let mut state = ledger.last(site);
    let mut assessments = Vec::with_capacity(days.len());

    for day in days {
        validate_observation(day)?;
        let (assessment, next) = assess(day, state);
        assessments.push(assessment);
        state = next;
    }

    ledger.record(site, state);
    Ok(assessments)
}
