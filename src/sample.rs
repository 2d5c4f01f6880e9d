//! One benchmark measurement per CSV row.

use std::io::Read;
use serde::Deserialize;
use crate::error::{Error, Result};

/// Flat record of a single timed run.
///
/// Columns are matched by header name, so their order in the file does not
/// matter and unrelated columns are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    pub version: String,
    pub threads: u32,
    #[serde(rename = "time_seconds")]
    pub time: f64,
    pub baseline: String,
}

impl Sample {
    #[inline]
    pub fn is_sequential(&self) -> bool {
        self.threads == 1
    }
}

/// Read every sample from `reader`, a CSV stream with a header row.
///
/// Fields are trimmed. A zero thread count or a time that is not a finite
/// positive number fails the whole read.
pub fn read_samples<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (index, row) in csv_reader.deserialize::<Sample>().enumerate() {
        let sample = row?;
        let record = index + 1;
        if sample.threads == 0 {
            return Err(Error::ZeroThreads { record });
        }
        if !(sample.time.is_finite() && sample.time > 0.0) {
            return Err(Error::InvalidTime { record, time: sample.time });
        }
        samples.push(sample);
    }
    Ok(samples)
}
