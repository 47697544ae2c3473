//! Newton-Gregory forward interpolation.
//!
//! Builds the triangular forward-difference table for an observation series
//! eagerly at construction, then evaluates the truncated Newton forward
//! polynomial at arbitrary target times. The table is derived entirely from
//! the series and never mutated afterwards, so an interpolator can be shared
//! freely across threads.

use ndarray::Array2;
use serde::Serialize;
use tracing::warn;

use crate::error::{DiurnalError, Result};
use crate::interpolation::common::binomial_coefficient;
use crate::interpolation::trace::TraceStep;
use crate::series::{parse_clock_time, SampleSeries};

/// Cap on the number of polynomial terms used per estimate.
///
/// High-order differences amplify observation noise faster than they add
/// accuracy, so evaluation truncates at `min(n - anchor, MAX_TERMS)` terms.
pub const MAX_TERMS: usize = 6;

/// One entry of a batch estimation result.
///
/// `value` is `None` when that query failed; a bad element never aborts the
/// rest of the batch.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    /// The target time exactly as requested
    pub time: String,
    /// The estimated value, absent if this query failed
    pub value: Option<f64>,
}

/// Outcome of one polynomial evaluation, shared by estimation and tracing.
pub(crate) struct Evaluation {
    pub anchor: usize,
    pub offset: f64,
    pub value: f64,
}

/// Newton-Gregory forward interpolator over a sample series.
#[derive(Debug, Clone)]
pub struct ForwardInterpolator {
    series: SampleSeries,
    table: Array2<f64>,
}

impl ForwardInterpolator {
    /// Build an interpolator, computing the full forward-difference table.
    ///
    /// Pure precomputation: O(n²) time and space, deterministic, no I/O.
    pub fn new(series: SampleSeries) -> Self {
        let table = build_difference_table(&series);
        Self { series, table }
    }

    /// The observation series this interpolator was built from
    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    /// Forward difference of order `j` at sample `i`.
    ///
    /// Returns `None` for the unused lower-right region `i + j >= n`.
    pub fn difference(&self, i: usize, j: usize) -> Option<f64> {
        let n = self.series.len();
        if i + j >= n {
            None
        } else {
            Some(self.table[[i, j]])
        }
    }

    /// Estimate the value at a `"HH:MM"` (or decimal-hours) target time.
    ///
    /// # Errors
    ///
    /// [`DiurnalError::InvalidTimeFormat`] for malformed input,
    /// [`DiurnalError::InsufficientData`] for series with fewer than two
    /// samples. Read-only: a failed call leaves the interpolator untouched.
    pub fn estimate(&self, target: &str) -> Result<f64> {
        let target_time = parse_clock_time(target)?;
        self.estimate_at(target_time)
    }

    /// Estimate the value at a target time given as decimal hours.
    pub fn estimate_at(&self, target_time: f64) -> Result<f64> {
        self.evaluate(target_time, None).map(|eval| eval.value)
    }

    /// Estimate the value at each target time in turn.
    ///
    /// A per-element failure is recorded as an absent value for that element
    /// while the rest of the batch proceeds; results come back in input
    /// order.
    pub fn estimate_many(&self, targets: &[String]) -> Vec<Estimate> {
        targets
            .iter()
            .map(|target| {
                let value = match self.estimate(target) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        warn!(target = %target, error = %e, "Skipping failed estimate in batch");
                        None
                    }
                };
                Estimate {
                    time: target.clone(),
                    value,
                }
            })
            .collect()
    }

    /// Index of the polynomial's anchor sample for a target time.
    ///
    /// The left endpoint of the first bracketing interval, scanning in
    /// ascending order. Out-of-range targets fall through to 0, so every
    /// extrapolation anchors at the first sample regardless of direction.
    pub(crate) fn anchor_index(&self, target_time: f64) -> usize {
        let n = self.series.len();
        for i in 0..n - 1 {
            if self.series.time(i) <= target_time && target_time <= self.series.time(i + 1) {
                return i;
            }
        }
        0
    }

    /// Evaluate the truncated Newton forward polynomial at `target_time`.
    ///
    /// The single evaluation loop behind both [`estimate_at`] and the
    /// calculation trace; when `steps` is supplied, every term is recorded
    /// as it is accumulated.
    ///
    /// [`estimate_at`]: ForwardInterpolator::estimate_at
    pub(crate) fn evaluate(
        &self,
        target_time: f64,
        mut steps: Option<&mut Vec<TraceStep>>,
    ) -> Result<Evaluation> {
        let n = self.series.len();
        if n < 2 {
            return Err(DiurnalError::InsufficientData { got: n });
        }

        let anchor = self.anchor_index(target_time);
        let offset = (target_time - self.series.time(anchor)) / self.series.spacing();
        let terms = (n - anchor).min(MAX_TERMS);

        let base = self.table[[anchor, 0]];
        let mut total = base;
        if let Some(steps) = steps.as_mut() {
            steps.push(TraceStep {
                term: 0,
                coefficient: 1.0,
                difference: base,
                contribution: base,
                running_total: total,
            });
        }

        for k in 1..terms {
            let coefficient = binomial_coefficient(offset, k);
            let difference = self.table[[anchor, k]];
            let contribution = coefficient * difference;
            total += contribution;
            if let Some(steps) = steps.as_mut() {
                steps.push(TraceStep {
                    term: k,
                    coefficient,
                    difference,
                    contribution,
                    running_total: total,
                });
            }
        }

        Ok(Evaluation {
            anchor,
            offset,
            value: total,
        })
    }
}

/// Build the triangular forward-difference table for a series.
///
/// Cell `(i, 0)` holds `y[i]`; cell `(i, j)` holds
/// `table(i+1, j-1) - table(i, j-1)`. Cells with `i + j >= n` stay zero and
/// are never read.
fn build_difference_table(series: &SampleSeries) -> Array2<f64> {
    let n = series.len();
    let mut table = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        table[[i, 0]] = series.value(i);
    }
    for j in 1..n {
        for i in 0..n - j {
            table[[i, j]] = table[[i + 1, j - 1]] - table[[i, j - 1]];
        }
    }

    table
}
