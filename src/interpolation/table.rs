//! Display-ready view of the forward-difference table.
//!
//! Materializes the internal triangular table into a rectangular grid with
//! absent markers for the unused lower-right cells, annotated with each
//! row's original display time and value for tabular rendering or export.

use serde::Serialize;

use crate::interpolation::forward::ForwardInterpolator;

/// One row of the difference-table grid.
#[derive(Debug, Clone, Serialize)]
pub struct DifferenceTableRow {
    /// Original display time label of the row's sample
    pub time: String,
    /// Observed value of the row's sample
    pub value: f64,
    /// Difference columns in ascending order, `None` where `i + j >= n`
    pub cells: Vec<Option<f64>>,
}

/// The full difference table as a display grid.
#[derive(Debug, Clone, Serialize)]
pub struct DifferenceTableView {
    /// Column headers: `y`, then `Δ^1y` through `Δ^{n-1}y`
    pub columns: Vec<String>,
    /// One row per sample, in time order
    pub rows: Vec<DifferenceTableRow>,
}

impl ForwardInterpolator {
    /// Materialize the difference table for display. Pure and read-only.
    pub fn difference_table(&self) -> DifferenceTableView {
        let n = self.series().len();

        let columns = (0..n)
            .map(|j| {
                if j == 0 {
                    "y".to_string()
                } else {
                    format!("Δ^{}y", j)
                }
            })
            .collect();

        let rows = self
            .series()
            .samples()
            .iter()
            .enumerate()
            .map(|(i, sample)| DifferenceTableRow {
                time: sample.label.clone(),
                value: sample.value,
                cells: (0..n).map(|j| self.difference(i, j)).collect(),
            })
            .collect();

        DifferenceTableView { columns, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{Sample, SampleSeries};

    fn three_sample_interpolator() -> ForwardInterpolator {
        let samples = vec![
            Sample::new("00:00", 0.0, 10.0),
            Sample::new("01:00", 1.0, 12.0),
            Sample::new("02:00", 2.0, 9.0),
        ];
        ForwardInterpolator::new(SampleSeries::from_samples(samples).unwrap())
    }

    #[test]
    fn test_table_view_columns() {
        let view = three_sample_interpolator().difference_table();
        assert_eq!(view.columns, vec!["y", "Δ^1y", "Δ^2y"]);
    }

    #[test]
    fn test_table_view_cells() {
        let view = three_sample_interpolator().difference_table();
        assert_eq!(view.rows.len(), 3);

        assert_eq!(view.rows[0].time, "00:00");
        assert_eq!(view.rows[0].value, 10.0);
        assert_eq!(view.rows[0].cells, vec![Some(10.0), Some(2.0), Some(-5.0)]);

        assert_eq!(view.rows[1].cells, vec![Some(12.0), Some(-3.0), None]);
        assert_eq!(view.rows[2].cells, vec![Some(9.0), None, None]);
    }

    #[test]
    fn test_table_view_serializes_absent_cells_as_null() {
        let view = three_sample_interpolator().difference_table();
        let json = serde_json::to_value(&view).unwrap();

        let last_row_cells = json["rows"][2]["cells"].as_array().unwrap();
        assert_eq!(last_row_cells[0], serde_json::json!(9.0));
        assert!(last_row_cells[1].is_null());
        assert!(last_row_cells[2].is_null());
    }
}
