//! Extrapolation-risk classification.
//!
//! A user-facing advisory for targets outside the observed time span. It is
//! independent of the estimator's anchor selection and never gates
//! estimation - callers decide what to do with the warning.

use serde::Serialize;

use crate::error::Result;
use crate::interpolation::forward::ForwardInterpolator;
use crate::series::parse_clock_time;

/// Distances beyond this many sample spacings classify as high risk.
const HIGH_RISK_SPACINGS: f64 = 2.0;

/// Where a target time sits relative to the observed span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeStatus {
    WithinRange,
    ExtrapolationBefore,
    ExtrapolationAfter,
}

/// Advisory risk level for an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Risk classification for one target time.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskAssessment {
    pub status: RangeStatus,
    pub risk: RiskLevel,
    /// Distance in hours from the nearer end of the observed span;
    /// zero within range
    pub distance: f64,
}

impl ForwardInterpolator {
    /// Classify a `"HH:MM"` (or decimal-hours) target time.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::DiurnalError::InvalidTimeFormat`] for
    /// malformed input.
    pub fn classify_risk(&self, target: &str) -> Result<RiskAssessment> {
        let target_time = parse_clock_time(target)?;
        Ok(self.classify_risk_at(target_time))
    }

    /// Classify a target time given as decimal hours.
    pub fn classify_risk_at(&self, target_time: f64) -> RiskAssessment {
        let series = self.series();
        let first = series.time(0);
        let last = series.time(series.len() - 1);

        let (status, distance) = if target_time < first {
            (RangeStatus::ExtrapolationBefore, first - target_time)
        } else if target_time > last {
            (RangeStatus::ExtrapolationAfter, target_time - last)
        } else {
            (RangeStatus::WithinRange, 0.0)
        };

        let risk = match status {
            RangeStatus::WithinRange => RiskLevel::Low,
            _ if distance > HIGH_RISK_SPACINGS * series.spacing() => RiskLevel::High,
            _ => RiskLevel::Medium,
        };

        RiskAssessment {
            status,
            risk,
            distance,
        }
    }
}
