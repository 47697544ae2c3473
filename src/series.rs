//! Observation series management for diurnal.
//!
//! This module defines the validated, ordered set of (time, value)
//! observations that the interpolation engine consumes, along with the
//! clock-time parser shared by ingestion and estimation.

use serde::{Deserialize, Serialize};

use crate::error::{DiurnalError, Result};

/// Sample spacing reported when a series has fewer than two points.
///
/// A sentinel meaning "undefined, unused" - estimation rejects such series
/// before the spacing is ever consumed.
const UNDEFINED_SPACING: f64 = 1.0;

/// A single historical observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Original display label for the observation time (e.g. "06:00")
    pub label: String,
    /// Observation time as decimal hours
    pub time: f64,
    /// Observed value
    pub value: f64,
}

impl Sample {
    pub fn new(label: impl Into<String>, time: f64, value: f64) -> Self {
        Self {
            label: label.into(),
            time,
            value,
        }
    }
}

/// An ordered, validated sequence of observations.
///
/// Samples are sorted strictly ascending by time; observations with exactly
/// equal times are merged by averaging their values, keeping the first
/// display label. The series assumes - but does not enforce - uniform
/// spacing between consecutive samples. Immutable after construction.
#[derive(Debug, Clone)]
pub struct SampleSeries {
    samples: Vec<Sample>,
    spacing: f64,
}

impl SampleSeries {
    /// Build a series from raw observations.
    ///
    /// Sorts by time and collapses duplicate times. Construction accepts any
    /// non-zero number of samples; series with fewer than two points are
    /// rejected later, at estimation time.
    ///
    /// # Errors
    ///
    /// Returns [`DiurnalError::EmptyData`] if `samples` is empty.
    pub fn from_samples(mut samples: Vec<Sample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(DiurnalError::EmptyData);
        }

        samples.sort_by(|a, b| a.time.total_cmp(&b.time));

        // Collapse runs of exactly-equal times into one averaged sample,
        // keeping the first label of the run.
        let mut merged: Vec<Sample> = Vec::with_capacity(samples.len());
        let mut run_len = 1;
        for sample in samples {
            match merged.last_mut() {
                Some(last) if last.time == sample.time => {
                    run_len += 1;
                    last.value += (sample.value - last.value) / run_len as f64;
                }
                _ => {
                    run_len = 1;
                    merged.push(sample);
                }
            }
        }

        let spacing = if merged.len() > 1 {
            merged[1].time - merged[0].time
        } else {
            UNDEFINED_SPACING
        };

        Ok(Self {
            samples: merged,
            spacing,
        })
    }

    /// Number of samples in the series
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The assumed uniform spacing `h`, taken from the first two samples
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Observation time at index `i` as decimal hours
    pub fn time(&self, i: usize) -> f64 {
        self.samples[i].time
    }

    /// Observed value at index `i`
    pub fn value(&self, i: usize) -> f64 {
        self.samples[i].value
    }

    /// All samples in ascending time order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The covered time range, if the series is non-empty
    pub fn span(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some((first.time, last.time))
    }
}

/// Parse a target time into decimal hours.
///
/// Accepts 24-hour `"HH:MM"` (converted as `hour + minute / 60`) or a bare
/// decimal number of hours.
///
/// # Errors
///
/// Returns [`DiurnalError::InvalidTimeFormat`] if the input matches neither
/// form or yields a non-finite value.
pub fn parse_clock_time(input: &str) -> Result<f64> {
    let trimmed = input.trim();

    let invalid = || DiurnalError::InvalidTimeFormat {
        input: input.to_string(),
    };

    if trimmed.contains(':') {
        let mut parts = trimmed.split(':');
        let hour: i32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minute: i32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        return Ok(f64::from(hour) + f64::from(minute) / 60.0);
    }

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(label: &str, time: f64, value: f64) -> Sample {
        Sample::new(label, time, value)
    }

    #[test]
    fn test_series_sorts_by_time() {
        let series = SampleSeries::from_samples(vec![
            sample("12:00", 12.0, 31.2),
            sample("06:00", 6.0, 22.5),
            sample("09:00", 9.0, 25.8),
        ])
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.time(0), 6.0);
        assert_eq!(series.time(1), 9.0);
        assert_eq!(series.time(2), 12.0);
        assert_eq!(series.value(0), 22.5);
    }

    #[test]
    fn test_series_merges_duplicate_times() {
        let series = SampleSeries::from_samples(vec![
            sample("06:00", 6.0, 20.0),
            sample("6.0", 6.0, 24.0),
            sample("09:00", 9.0, 25.8),
        ])
        .unwrap();

        assert_eq!(series.len(), 2);
        // Values averaged, first label kept
        assert_eq!(series.value(0), 22.0);
        assert_eq!(series.samples()[0].label, "06:00");
    }

    #[test]
    fn test_series_spacing() {
        let series = SampleSeries::from_samples(vec![
            sample("06:00", 6.0, 22.5),
            sample("09:00", 9.0, 25.8),
            sample("12:00", 12.0, 31.2),
        ])
        .unwrap();
        assert_eq!(series.spacing(), 3.0);
        assert_eq!(series.span(), Some((6.0, 12.0)));
    }

    #[test]
    fn test_series_spacing_sentinel_for_single_sample() {
        let series = SampleSeries::from_samples(vec![sample("06:00", 6.0, 22.5)]).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.spacing(), 1.0);
    }

    #[test]
    fn test_series_rejects_empty_input() {
        let result = SampleSeries::from_samples(vec![]);
        assert!(matches!(result, Err(DiurnalError::EmptyData)));
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("14:30").unwrap(), 14.5);
        assert_eq!(parse_clock_time("06:00").unwrap(), 6.0);
        assert_eq!(parse_clock_time(" 08:15 ").unwrap(), 8.25);
        assert_eq!(parse_clock_time("7").unwrap(), 7.0);
        assert_eq!(parse_clock_time("14.5").unwrap(), 14.5);
    }

    #[test]
    fn test_parse_clock_time_rejects_malformed_input() {
        for bad in ["bad", "", "ab:cd", "12:", ":30", "NaN", "inf"] {
            let result = parse_clock_time(bad);
            assert!(
                matches!(result, Err(DiurnalError::InvalidTimeFormat { .. })),
                "expected InvalidTimeFormat for {:?}",
                bad
            );
        }
    }
}
