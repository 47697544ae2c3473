//! Inspection tool for observation CSV files.
//!
//! Loads a CSV (or the built-in demo series when no path is given), then
//! prints the cleaned series and its forward-difference table to stdout.

use std::path::PathBuf;

use anyhow::Result;

use diurnal::config::Config;
use diurnal::ingest;
use diurnal::interpolation::ForwardInterpolator;

fn main() -> Result<()> {
    let mut config = Config::default();
    config.data.file_path = std::env::args().nth(1).map(PathBuf::from);

    let (source, series) = ingest::load_series(&config)?;

    println!("Inspecting observation series: {}", source);

    println!("\n=== SERIES ===");
    println!(
        "{} samples, spacing h = {} hours",
        series.len(),
        series.spacing()
    );
    if let Some((start, end)) = series.span() {
        println!("span: {} .. {} (decimal hours)", start, end);
    }

    println!("\n{:>8} {:>12} {:>12}", "label", "time", "value");
    for sample in series.samples() {
        println!(
            "{:>8} {:>12.4} {:>12.4}",
            sample.label, sample.time, sample.value
        );
    }

    let interpolator = ForwardInterpolator::new(series);
    let table = interpolator.difference_table();

    println!("\n=== FORWARD-DIFFERENCE TABLE ===");
    print!("{:>8} ", "time");
    for column in &table.columns {
        print!("{:>12} ", column);
    }
    println!();

    for row in &table.rows {
        print!("{:>8} ", row.time);
        for cell in &row.cells {
            match cell {
                Some(value) => print!("{:>12.4} ", value),
                None => print!("{:>12} ", "-"),
            }
        }
        println!();
    }

    Ok(())
}
