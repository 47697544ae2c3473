//! Series endpoint handler.
//!
//! Returns JSON describing the loaded observations and series metadata.

use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::logging::generate_request_id;
use crate::state::AppState;

/// Handle GET /series requests
pub async fn series_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    // Log request
    debug!(
        endpoint = "/series",
        request_id = %request_id,
        "Processing series request"
    );

    let series = state.series();
    let response = serde_json::json!({
        "source": state.source,
        "sample_count": series.len(),
        "time_span": series.span(),
        "spacing_hours": series.spacing(),
        "samples": series.samples(),
    });

    // Log successful request
    let duration = start_time.elapsed();
    info!(
        endpoint = "/series",
        request_id = %request_id,
        duration_us = duration.as_micros() as u64,
        sample_count = series.len(),
        "Series request successful"
    );

    Json(response)
}
