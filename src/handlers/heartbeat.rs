//! Heartbeat endpoint handler.
//!
//! Returns server status information, including uptime and a summary of the
//! loaded observation series.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use crate::state::AppState;

/// Static server ID generated at startup
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> = once_cell::sync::Lazy::new(SystemTime::now);

/// Heartbeat response structure
#[derive(Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Observation series information
    pub dataset: DatasetInfo,
    /// Server status
    pub status: String,
}

/// Observation series information structure
#[derive(Serialize)]
pub struct DatasetInfo {
    /// Where the observations were loaded from
    pub source: String,
    /// Number of samples in the series
    pub sample_count: usize,
    /// First and last observation time, as decimal hours
    pub time_span: Option<(f64, f64)>,
    /// Assumed uniform sample spacing, in hours
    pub spacing_hours: f64,
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    // Get current timestamp
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    // Calculate uptime
    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    let series = state.series();
    let dataset_info = DatasetInfo {
        source: state.source.clone(),
        sample_count: series.len(),
        time_span: series.span(),
        spacing_hours: series.spacing(),
    };

    let response = HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        dataset: dataset_info,
        status: "healthy".to_string(),
    };

    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::series::{Sample, SampleSeries};

    #[test]
    fn test_dataset_info_from_state() {
        let series = SampleSeries::from_samples(vec![
            Sample::new("06:00", 6.0, 22.5),
            Sample::new("09:00", 9.0, 25.8),
            Sample::new("12:00", 12.0, 31.2),
        ])
        .unwrap();
        let state = AppState::new(Config::default(), "observations.csv", series);

        let info = DatasetInfo {
            source: state.source.clone(),
            sample_count: state.series().len(),
            time_span: state.series().span(),
            spacing_hours: state.series().spacing(),
        };

        assert_eq!(info.source, "observations.csv");
        assert_eq!(info.sample_count, 3);
        assert_eq!(info.time_span, Some((6.0, 12.0)));
        assert_eq!(info.spacing_hours, 3.0);
    }
}
