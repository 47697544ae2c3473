//! Error types for the diurnal application.
//!
//! This module defines a comprehensive error enum that covers all possible
//! error conditions in the application.

use thiserror::Error;

/// The main error type for diurnal operations.
#[derive(Error, Debug)]
pub enum DiurnalError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// No usable samples at all
    #[error("No usable samples in input data")]
    EmptyData,

    /// Fewer samples than interpolation needs
    #[error("Insufficient data: got {got} samples, need at least 2")]
    InsufficientData { got: usize },

    /// Unparseable target time string
    #[error("Invalid time format: {input}")]
    InvalidTimeFormat { input: String },

    /// Observation value outside the configured plausible range
    #[error("Implausible value {value}: expected within [{min}, {max}]")]
    ImplausibleValue { value: f64, min: f64, max: f64 },

    /// Invalid request parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

/// Convenience type alias for Results with DiurnalError
pub type Result<T> = std::result::Result<T, DiurnalError>;
