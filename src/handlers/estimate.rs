//! Estimation endpoint handler.
//!
//! Returns interpolated values for one target time or a comma-separated
//! batch. Single queries come back with their extrapolation-risk advisory;
//! batch queries preserve input order and mark failed elements with a null
//! value instead of aborting the batch.

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

use crate::error::DiurnalError;
use crate::logging::generate_request_id;
use crate::series::parse_clock_time;
use crate::state::AppState;

/// Query parameters for the estimate endpoint
#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    /// Single target time in "HH:MM" or decimal-hours form
    pub time: Option<String>,
    /// Comma-separated list of target times
    pub times: Option<String>,
}

/// Handle GET /estimate requests
pub async fn estimate_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EstimateQuery>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/estimate",
        request_id = %request_id,
        params = ?params,
        "Processing estimate request"
    );

    let response = match (params.time, params.times) {
        (Some(target), None) => estimate_single(&state, &target),
        (None, Some(targets)) => estimate_batch(&state, &targets),
        _ => Err(DiurnalError::InvalidParameter {
            param: "time".to_string(),
            message: "Provide exactly one of 'time' or 'times'".to_string(),
        }),
    };

    let duration = start_time.elapsed();
    match response {
        Ok(body) => {
            info!(
                endpoint = "/estimate",
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                "Estimate request successful"
            );
            Json(body).into_response()
        }
        Err(e) => {
            warn!(
                endpoint = "/estimate",
                request_id = %request_id,
                error = %e,
                "Estimate request failed"
            );
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Estimate one target, bundling the extrapolation-risk advisory
fn estimate_single(
    state: &AppState,
    target: &str,
) -> Result<serde_json::Value, DiurnalError> {
    // Parse once; estimation and classification share the decimal time
    let target_time = parse_clock_time(target)?;
    let value = state.interpolator.estimate_at(target_time)?;
    let risk = state.interpolator.classify_risk_at(target_time);

    Ok(serde_json::json!({
        "time": target,
        "target_hours": target_time,
        "value": value,
        "risk": risk,
    }))
}

/// Estimate a comma-separated batch with per-element failure tolerance
fn estimate_batch(
    state: &AppState,
    targets: &str,
) -> Result<serde_json::Value, DiurnalError> {
    let targets: Vec<String> = targets
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if targets.is_empty() {
        return Err(DiurnalError::InvalidParameter {
            param: "times".to_string(),
            message: "No target times given".to_string(),
        });
    }

    let results = state.interpolator.estimate_many(&targets);
    Ok(serde_json::json!({
        "count": results.len(),
        "results": results,
    }))
}
