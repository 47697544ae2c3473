//! Per-term calculation traces.
//!
//! A trace is a side-channel view of one estimation: the same evaluation
//! loop is re-run with a recorder attached, so the final value is always
//! numerically identical to what [`ForwardInterpolator::estimate`] returns
//! for the same target. Traces are recomputed per call and never cached.

use serde::Serialize;

use crate::error::Result;
use crate::interpolation::forward::ForwardInterpolator;
use crate::series::parse_clock_time;

/// One recorded polynomial term.
#[derive(Debug, Clone, Serialize)]
pub struct TraceStep {
    /// Term index, 0 being the anchor value itself
    pub term: usize,
    /// Generalized binomial coefficient `B(u, term)`
    pub coefficient: f64,
    /// Forward difference of order `term` at the anchor
    pub difference: f64,
    /// `coefficient * difference`
    pub contribution: f64,
    /// Accumulated estimate after this term
    pub running_total: f64,
}

/// Step-by-step record of one estimation.
#[derive(Debug, Clone, Serialize)]
pub struct EstimationTrace {
    /// Target time as decimal hours
    pub target_time: f64,
    /// Index of the anchor sample
    pub anchor_index: usize,
    /// Time of the anchor sample
    pub anchor_time: f64,
    /// Sample spacing `h` used for normalization
    pub spacing: f64,
    /// Normalized offset `u = (target - anchor) / h`
    pub offset: f64,
    /// Every accumulated term in order
    pub steps: Vec<TraceStep>,
    /// The final estimate, identical to what `estimate` returns
    pub final_value: f64,
}

impl ForwardInterpolator {
    /// Trace the estimation for a `"HH:MM"` (or decimal-hours) target time.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`ForwardInterpolator::estimate`] would.
    pub fn trace(&self, target: &str) -> Result<EstimationTrace> {
        let target_time = parse_clock_time(target)?;
        self.trace_at(target_time)
    }

    /// Trace the estimation for a target time given as decimal hours.
    pub fn trace_at(&self, target_time: f64) -> Result<EstimationTrace> {
        let mut steps = Vec::new();
        let eval = self.evaluate(target_time, Some(&mut steps))?;

        Ok(EstimationTrace {
            target_time,
            anchor_index: eval.anchor,
            anchor_time: self.series().time(eval.anchor),
            spacing: self.series().spacing(),
            offset: eval.offset,
            steps,
            final_value: eval.value,
        })
    }
}
