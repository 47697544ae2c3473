//! Newton-Gregory forward interpolation over an observation series.
//!
//! This module provides the estimation engine behind the query endpoints:
//! forward-difference table construction, polynomial evaluation at arbitrary
//! target times, and the diagnostic views (difference table, per-term
//! calculation trace, extrapolation-risk classification).

pub mod common;
pub mod forward;
pub mod risk;
pub mod table;
pub mod trace;

pub use forward::{Estimate, ForwardInterpolator, MAX_TERMS};
pub use risk::{RangeStatus, RiskAssessment, RiskLevel};
pub use table::{DifferenceTableRow, DifferenceTableView};
pub use trace::{EstimationTrace, TraceStep};
