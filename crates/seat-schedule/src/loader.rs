//! CSV loader for pre-drawn standard-normal samples.
//!
//! Lets a run replay an exact draw sequence instead of seeding a fresh one.
//!
//! # CSV format
//!
//! One column, one draw per row, consumed in file order:
//!
//! ```csv
//! sample
//! -2.0
//! 0.0
//! 0.731
//! ```
//!
//! Every value must be finite.  The file must hold enough draws for every
//! participant to reach the horizon; running short surfaces as a
//! sample-exhaustion error during generation, never as a silent re-draw.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use seat_core::NormalSamples;

use crate::ScheduleError;

#[derive(Deserialize)]
struct SampleRecord {
    sample: f64,
}

/// Load a sample sequence from a CSV file.
pub fn load_samples_csv(path: &Path) -> Result<NormalSamples, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_samples_reader(file)
}

/// Like [`load_samples_csv`] but accepts any `Read` source.
pub fn load_samples_reader<R: Read>(reader: R) -> Result<NormalSamples, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut values = Vec::new();

    for (row, result) in csv_reader.deserialize::<SampleRecord>().enumerate() {
        let record = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        if !record.sample.is_finite() {
            return Err(ScheduleError::Parse(format!(
                "row {}: sample {} is not a finite number",
                row + 1,
                record.sample
            )));
        }
        values.push(record.sample);
    }

    Ok(NormalSamples::from_vec(values))
}
