//! # diurnal
//!
//! A blazingly fast, in-memory, CSV-to-API temperature estimation server.
//!
//! This library provides the core functionality for loading an observation
//! series into memory and serving Newton-Gregory forward-interpolation
//! estimates at arbitrary query times via a high-performance HTTP API.
//!
//! ## Key Features
//!
//! - **Zero-configuration serving**: Load any time/value CSV and instantly
//!   serve estimates via HTTP API (or start with the built-in demo series)
//! - **Precomputed difference table**: The full forward-difference table is
//!   built once at startup; every query reuses it
//! - **Transparent diagnostics**: Difference-table export, per-term
//!   calculation traces, and extrapolation-risk advisories
//!
//! ## Architecture
//!
//! - **Data Layer**: Validates and orders raw observations into a
//!   [`series::SampleSeries`]
//! - **Estimation**: A [`interpolation::ForwardInterpolator`] evaluates the
//!   truncated Newton forward polynomial per query
//! - **API Layer**: Exposes estimates and diagnostics through a RESTful
//!   HTTP API

pub mod config;
pub mod error;
pub mod handlers;
pub mod ingest;
pub mod interpolation;
pub mod logging;
pub mod series;
pub mod state;

pub use config::Config;
pub use error::{DiurnalError, Result};
pub use interpolation::{
    Estimate, EstimationTrace, ForwardInterpolator, RangeStatus, RiskAssessment, RiskLevel,
};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_series_load_stats,
};
pub use series::{parse_clock_time, Sample, SampleSeries};
pub use state::AppState;
