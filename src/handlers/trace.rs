//! Calculation-trace endpoint handler.
//!
//! Returns the step-by-step Newton-Gregory evaluation for one target time,
//! one record per polynomial term.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::logging::generate_request_id;
use crate::state::AppState;

/// Query parameters for the trace endpoint
#[derive(Debug, Deserialize)]
pub struct TraceQuery {
    /// Target time in "HH:MM" or decimal-hours form
    pub time: String,
}

/// Handle GET /trace requests
pub async fn trace_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TraceQuery>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/trace",
        request_id = %request_id,
        time = %params.time,
        "Processing trace request"
    );

    match state.interpolator.trace(&params.time) {
        Ok(trace) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = "/trace",
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                terms = trace.steps.len(),
                "Trace request successful"
            );
            Json(trace).into_response()
        }
        Err(e) => {
            warn!(
                endpoint = "/trace",
                request_id = %request_id,
                error = %e,
                "Trace request failed"
            );
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
