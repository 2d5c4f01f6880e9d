//! Speedup and efficiency of multi-threaded benchmark runs.
//!
//! Input is a CSV file with one row per timed run:
//!
//! ```text
//! version,threads,time_seconds,baseline
//! sequential,1,0.494,ptr
//! version1_parallel_for,2,0.261,ptr
//! version1_parallel_for,4,0.139,ptr
//! ```
//!
//! Rows with a single thread are the sequential reference for their
//! `baseline`. Every other row belongs to the series of its
//! `(version, baseline)` pair. From these two tables:
//!
//! * speedup = baseline time / time
//! * efficiency = speedup / threads
//!
//! ```
//! # fn main() -> Result<(), speedup::Error> {
//! let csv = "\
//! version,threads,time_seconds,baseline
//! sequential,1,0.5,ptr
//! v1,2,0.25,ptr
//! ";
//! let results = speedup::Results::from_reader(csv.as_bytes())?;
//! let base = results.require_baseline("ptr")?;
//! let scaled = speedup::scaling(results.series("v1", "ptr").unwrap(), base);
//! assert_eq!(scaled[0].speedup, 2.0);
//! assert_eq!(scaled[0].efficiency, 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Charts
//!
//! [Layout::standard] names which series are compared with each other.
//! Rendering to images lives in the companion `speedup-charts` binary,
//! the library only produces plain series data ([ScalingPlot], [TimePlot]).

mod error;
mod sample;
mod table;

pub mod layout;
pub mod metrics;
pub mod style;

pub use error::{Error, Result};
pub use sample::{read_samples, Sample};
pub use table::{Point, Results};
pub use metrics::{efficiency, scaling, speedup, Scaling};
pub use layout::{Layout, ScalingPlot, TimePlot};
