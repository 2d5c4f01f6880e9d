//! Baseline and series tables built from samples.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;
use crate::error::{Error, Result};
use crate::sample::{read_samples, Sample};

/// One multi-threaded measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub threads: u32,
    /// Seconds.
    pub time: f64,
}

/// version -> baseline -> points, ascending by thread count.
type SeriesTable = BTreeMap<String, BTreeMap<String, Vec<Point>>>;

/// Everything read from one results file.
///
/// Single-thread rows go to the baseline table, keyed by their baseline name.
/// A later row for the same baseline replaces the earlier one.
/// Every other row is appended to the series of its `(version, baseline)`.
#[derive(Debug, Default, Clone)]
pub struct Results {
    baselines: BTreeMap<String, f64>,
    series: SeriesTable,
}

impl Results {
    pub fn from_samples(samples: impl IntoIterator<Item = Sample>) -> Self {
        let mut this = Self::default();
        for sample in samples {
            if sample.is_sequential() {
                this.baselines.insert(sample.baseline, sample.time);
            } else {
                this.series
                    .entry(sample.version).or_default()
                    .entry(sample.baseline).or_default()
                    .push(Point{ threads: sample.threads, time: sample.time });
            }
        }

        for points in this.series.values_mut().flat_map(|by_baseline| by_baseline.values_mut()) {
            points.sort_by(|a, b| {
                a.threads.cmp(&b.threads).then(a.time.total_cmp(&b.time))
            });
        }
        this
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let samples = read_samples(reader)?;
        let this = Self::from_samples(samples);
        debug!(
            baselines = this.baselines.len(),
            series = this.series_count(),
            "benchmark results loaded"
        );
        Ok(this)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Single-thread time of `name`.
    #[inline]
    pub fn baseline(&self, name: &str) -> Option<f64> {
        self.baselines.get(name).copied()
    }

    #[inline]
    pub fn require_baseline(&self, name: &str) -> Result<f64> {
        self.baseline(name).ok_or_else(|| Error::MissingBaseline(name.to_string()))
    }

    #[inline]
    pub fn series(&self, version: &str, baseline: &str) -> Option<&[Point]> {
        self.series.get(version)?.get(baseline).map(Vec::as_slice)
    }

    pub fn baselines(&self) -> impl Iterator<Item = (&str, f64)> {
        self.baselines.iter().map(|(name, &time)| (name.as_str(), time))
    }

    /// `(version, baseline, points)`, ordered by version, then baseline.
    pub fn all_series(&self) -> impl Iterator<Item = (&str, &str, &[Point])> {
        self.series.iter().flat_map(|(version, by_baseline)| {
            by_baseline.iter().map(move |(baseline, points)| {
                (version.as_str(), baseline.as_str(), points.as_slice())
            })
        })
    }

    pub fn series_count(&self) -> usize {
        self.series.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty() && self.series.is_empty()
    }
}

#[cfg(test)]
mod test_table{
    use itertools::assert_equal;
    use super::*;

    fn sample(version: &str, threads: u32, time: f64, baseline: &str) -> Sample {
        Sample{
            version: version.into(),
            threads,
            time,
            baseline: baseline.into(),
        }
    }

    #[test]
    fn test_bucketing() {
        let results = Results::from_samples([
            sample("sequential", 1, 0.494, "ptr"),
            sample("v1", 8, 0.09, "ptr"),
            sample("v1", 2, 0.26, "ptr"),
            sample("v1", 4, 0.14, "ptr"),
            sample("v1", 4, 0.20, "flat"),
            sample("v2", 2, 0.30, "ptr"),
        ]);

        assert_eq!(results.baseline("ptr"), Some(0.494));
        assert_eq!(results.baseline("flat"), None);

        let threads: Vec<u32> = results.series("v1", "ptr").unwrap()
            .iter().map(|p| p.threads)
            .collect();
        assert_eq!(threads, [2, 4, 8]);

        assert_eq!(results.series("v1", "flat").unwrap(), &[Point{threads: 4, time: 0.20}]);
        assert!(results.series("v2", "flat").is_none());
        assert!(results.series("v3", "ptr").is_none());
        assert_eq!(results.series_count(), 3);

        assert_equal(
            results.all_series().map(|(v, b, _)| (v, b)),
            [("v1", "flat"), ("v1", "ptr"), ("v2", "ptr")]
        );
    }

    #[test]
    fn test_sequential_rows_excluded_from_series() {
        let results = Results::from_samples([
            sample("sequential", 1, 0.5, "ptr"),
            sample("v1", 1, 0.6, "ptr"),
        ]);
        assert_eq!(results.series_count(), 0);
        // later row wins
        assert_eq!(results.baseline("ptr"), Some(0.6));
    }

    #[test]
    fn test_equal_threads_ordered_by_time() {
        let results = Results::from_samples([
            sample("v1", 4, 0.3, "ptr"),
            sample("v1", 2, 0.5, "ptr"),
            sample("v1", 4, 0.1, "ptr"),
        ]);
        assert_equal(
            results.series("v1", "ptr").unwrap().iter().map(|p| (p.threads, p.time)),
            [(2, 0.5), (4, 0.1), (4, 0.3)]
        );
    }

    #[test]
    fn test_require_baseline() {
        let results = Results::from_samples([sample("s", 1, 0.7, "flat")]);
        assert_eq!(results.require_baseline("flat").unwrap(), 0.7);
        assert!(matches!(
            results.require_baseline("ptr"),
            Err(Error::MissingBaseline(name)) if name == "ptr"
        ));
    }

    #[test]
    fn test_from_reader() {
        let csv = "\
version,threads,time_seconds,baseline
sequential,1,0.494,ptr
sequential_flat,1,0.678,flat
version1_parallel_for,2,0.26,ptr
version1_optimized,2,0.35,flat
";
        let results = Results::from_reader(csv.as_bytes()).unwrap();
        assert_equal(results.baselines(), [("flat", 0.678), ("ptr", 0.494)]);
        assert_eq!(results.series_count(), 2);
        assert!(!results.is_empty());
    }

    #[test]
    fn test_from_missing_path() {
        let err = Results::from_path("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("here.csv"));
    }
}
