//! Application state management for diurnal.
//!
//! This module defines the shared state that is passed to all handlers:
//! the loaded observation series and the interpolator precomputed over it.
//! Every field is write-once at startup, so the state can be shared across
//! handler tasks behind an `Arc` with no further coordination.

use std::sync::Arc;

use crate::config::Config;
use crate::error::{DiurnalError, Result};
use crate::interpolation::ForwardInterpolator;
use crate::series::SampleSeries;

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Human-readable description of where the observations came from
    pub source: String,
    /// Interpolation engine, holding the series and its difference table
    pub interpolator: ForwardInterpolator,
}

impl AppState {
    /// Create a new AppState, precomputing the interpolator for the series
    pub fn new(config: Config, source: impl Into<String>, series: SampleSeries) -> Self {
        Self {
            config,
            source: source.into(),
            interpolator: ForwardInterpolator::new(series),
        }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(
        config: Config,
        source: impl Into<String>,
        series: SampleSeries,
    ) -> Arc<Self> {
        Arc::new(Self::new(config, source, series))
    }

    /// The loaded observation series
    pub fn series(&self) -> &SampleSeries {
        self.interpolator.series()
    }

    /// Validate that the state is ready for serving.
    ///
    /// A series that constructs fine may still be too small to interpolate;
    /// that is rejected here, at startup, rather than on every request.
    pub fn validate(&self) -> Result<()> {
        let n = self.series().len();
        if n < 2 {
            return Err(DiurnalError::InsufficientData { got: n });
        }
        Ok(())
    }
}
