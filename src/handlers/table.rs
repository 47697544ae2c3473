//! Difference-table endpoint handler.
//!
//! Returns the forward-difference table as a display-ready grid, with null
//! markers for the unused lower-right cells.

use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::interpolation::DifferenceTableView;
use crate::logging::generate_request_id;
use crate::state::AppState;

/// Handle GET /table requests
pub async fn table_handler(State(state): State<Arc<AppState>>) -> Json<DifferenceTableView> {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/table",
        request_id = %request_id,
        "Processing difference-table request"
    );

    let view = state.interpolator.difference_table();

    let duration = start_time.elapsed();
    info!(
        endpoint = "/table",
        request_id = %request_id,
        duration_us = duration.as_micros() as u64,
        rows = view.rows.len(),
        "Difference-table request successful"
    );

    Json(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::series::{Sample, SampleSeries};

    #[test]
    fn test_table_response_shape() {
        let series = SampleSeries::from_samples(vec![
            Sample::new("00:00", 0.0, 10.0),
            Sample::new("01:00", 1.0, 12.0),
            Sample::new("02:00", 2.0, 9.0),
        ])
        .unwrap();
        let state = AppState::new(Config::default(), "test", series);

        let view = state.interpolator.difference_table();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["columns"].as_array().unwrap().len(), 3);
        assert_eq!(json["rows"].as_array().unwrap().len(), 3);
        assert_eq!(json["rows"][0]["cells"][1], 2.0);
        assert!(json["rows"][2]["cells"][1].is_null());
    }
}
