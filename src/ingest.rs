//! CSV observation loading.
//!
//! This module reads a CSV of historical observations into a validated
//! [`SampleSeries`]. Rows that cannot be used are skipped with a warning;
//! values outside the configured plausibility window abort the load, since
//! they point at a broken input file rather than a stray cell.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{DiurnalError, Result};
use crate::series::{parse_clock_time, Sample, SampleSeries};

/// Column holding the observation time labels
const TIME_COLUMN: &str = "time";
/// Column holding the observed values
const VALUE_COLUMN: &str = "value";

/// Load the observation series named by the configuration.
///
/// Falls back to the built-in demo series when no file is configured.
/// Returns the source description alongside the series for logging and the
/// heartbeat endpoint.
pub fn load_series(config: &Config) -> Result<(String, SampleSeries)> {
    match &config.data.file_path {
        Some(path) => {
            let series = load_csv(path, config)?;
            Ok((path.display().to_string(), series))
        }
        None => {
            info!("No data file configured, using built-in demo series");
            Ok(("built-in demo series".to_string(), demo_series()?))
        }
    }
}

/// Load and validate observations from a CSV file.
///
/// The file must carry `time` and `value` columns. Rows with blank or
/// unparseable cells are skipped with a warning; duplicate times are merged
/// by the series itself.
///
/// # Errors
///
/// - [`DiurnalError::Config`] when a required column is missing
/// - [`DiurnalError::ImplausibleValue`] when a value falls outside the
///   configured window
/// - [`DiurnalError::EmptyData`] when no usable rows remain
pub fn load_csv(path: &Path, config: &Config) -> Result<SampleSeries> {
    if !path.exists() {
        return Err(DiurnalError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let time_idx = column_index(&headers, TIME_COLUMN)?;
    let value_idx = column_index(&headers, VALUE_COLUMN)?;

    let min_value = config.data.min_value;
    let max_value = config.data.max_value;

    let mut samples = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;

        let raw_time = record.get(time_idx).unwrap_or("").trim();
        let raw_value = record.get(value_idx).unwrap_or("").trim();
        if raw_time.is_empty() || raw_value.is_empty() {
            warn!(row = row + 1, "Skipping row with blank cells");
            continue;
        }

        let time = match parse_clock_time(raw_time) {
            Ok(t) => t,
            Err(e) => {
                warn!(row = row + 1, error = %e, "Skipping row with unparseable time");
                continue;
            }
        };

        let value: f64 = match raw_value.parse() {
            Ok(v) => v,
            Err(_) => {
                warn!(row = row + 1, value = raw_value, "Skipping row with non-numeric value");
                continue;
            }
        };
        if !value.is_finite() {
            warn!(row = row + 1, value, "Skipping row with non-finite value");
            continue;
        }

        if value < min_value || value > max_value {
            return Err(DiurnalError::ImplausibleValue {
                value,
                min: min_value,
                max: max_value,
            });
        }

        samples.push(Sample::new(raw_time, time, value));
    }

    debug!(
        path = %path.display(),
        rows = samples.len(),
        "Parsed observation rows"
    );

    SampleSeries::from_samples(samples)
}

/// The demo series served when no data file is given.
pub fn demo_series() -> Result<SampleSeries> {
    SampleSeries::from_samples(vec![
        Sample::new("06:00", 6.0, 22.5),
        Sample::new("09:00", 9.0, 25.8),
        Sample::new("12:00", 12.0, 31.2),
        Sample::new("15:00", 15.0, 33.7),
        Sample::new("18:00", 18.0, 28.4),
        Sample::new("21:00", 21.0, 24.1),
    ])
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| DiurnalError::Config {
            message: format!("Input file must have a '{}' column", name),
        })
}
