//! Speedup, efficiency and thread-axis helpers.

use crate::table::Point;

/// Thread counts used for the axis when no series made it onto a chart.
pub const DEFAULT_THREADS: [u32; 4] = [2, 4, 8, 16];

#[inline]
pub fn speedup(base_time: f64, time: f64) -> f64 {
    base_time / time
}

#[inline]
pub fn efficiency(speedup: f64, threads: u32) -> f64 {
    speedup / threads as f64
}

/// Derived metrics of one [Point] against a single-thread time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    pub threads: u32,
    pub time: f64,
    pub speedup: f64,
    pub efficiency: f64,
}

impl Scaling {
    #[inline]
    pub fn new(point: Point, base_time: f64) -> Self {
        let speedup = speedup(base_time, point.time);
        Self{
            threads: point.threads,
            time: point.time,
            speedup,
            efficiency: efficiency(speedup, point.threads),
        }
    }
}

pub fn scaling(points: &[Point], base_time: f64) -> Vec<Scaling> {
    points.iter().map(|&point| Scaling::new(point, base_time)).collect()
}

/// Point with the smallest time. First one wins on ties.
pub fn fastest(points: &[Point]) -> Option<Point> {
    points.iter().copied().reduce(|best, point| {
        if point.time < best.time { point } else { best }
    })
}

/// Sorted, deduplicated thread counts.
///
/// Empty input gives [DEFAULT_THREADS].
pub fn thread_range(threads: impl IntoIterator<Item = u32>) -> Vec<u32> {
    let mut range: Vec<u32> = threads.into_iter().collect();
    range.sort_unstable();
    range.dedup();
    if range.is_empty() {
        range.extend(DEFAULT_THREADS);
    }
    range
}

/// Largest axis step that still puts a tick on every value of a sorted `range`.
pub fn tick_interval(range: &[u32]) -> u32 {
    range.windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|&gap| gap != 0)
        .reduce(gcd)
        .unwrap_or(1)
}

/// Values a linear axis from the first to the last of `range` puts a tick on
/// when stepping by `interval`.
pub fn axis_ticks(range: &[u32], interval: u32) -> Vec<u32> {
    match (range.first(), range.last()) {
        (Some(&first), Some(&last)) => {
            (first..=last).step_by(interval.max(1) as usize).collect()
        }
        _ => Vec::new(),
    }
}

/// Ticks that carry a label: only the thread counts of a sorted `range`.
pub fn labelled_ticks(range: &[u32], interval: u32) -> Vec<u32> {
    axis_ticks(range, interval).into_iter()
        .filter(|tick| range.binary_search(tick).is_ok())
        .collect()
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
