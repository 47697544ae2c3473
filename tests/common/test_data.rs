//! Test fixture data for integration tests.
//!
//! The fixture CSV carries the demo observation series plus two unusable
//! rows, so integration tests exercise ingestion cleaning end-to-end.

use std::io::Write;
use std::path::Path;

/// The demo series with a blank cell and a garbage time mixed in
pub const FIXTURE_CSV: &str = "\
time,value
06:00,22.5
09:00,25.8
12:00,31.2
noon,19.9
15:00,33.7
18:00,
18:00,28.4
21:00,24.1
";

/// Number of usable samples in [`FIXTURE_CSV`]
pub const FIXTURE_SAMPLE_COUNT: usize = 6;

// Golden estimates for the fixture series, recorded from the first run of
// the implementation.
pub const ESTIMATE_14_30: f64 = 34.062654320987654;
pub const ESTIMATE_08_00: f64 = 24.47805212620027;
pub const ESTIMATE_10_00: f64 = 27.0559670781893;
pub const ESTIMATE_23_00: f64 = 38.08216735253778;

/// Write the fixture CSV to the given path
pub fn write_fixture_csv(path: &Path) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{}", FIXTURE_CSV)?;
    Ok(())
}
