//! Which series go on which chart.
//!
//! A [Layout] only describes charts. [ScalingGroup::plot] and
//! [TimeComparison::plot] turn it into plain series data against a
//! [Results] table, leaving the drawing to the renderer.

use tracing::debug;
use crate::error::Result;
use crate::metrics::{fastest, scaling, thread_range, tick_interval, Scaling, DEFAULT_THREADS};
use crate::style::{SeriesStyle, SCALING_FALLBACK, TIME_FALLBACK};
use crate::table::{Point, Results};

/// Series key: `(version, baseline)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub version: String,
    pub baseline: String,
}

impl Member {
    pub fn new(version: impl Into<String>, baseline: impl Into<String>) -> Self {
        Self{ version: version.into(), baseline: baseline.into() }
    }
}

/// Two-panel speedup/efficiency chart for several versions.
#[derive(Debug, Clone)]
pub struct ScalingGroup {
    pub name: String,
    pub file_stem: String,
    pub members: Vec<Member>,
    /// Baseline whose single-thread time every member is compared against.
    /// Not necessarily the baseline of the members' series.
    pub baseline: String,
    pub baseline_description: String,
    pub show_ideal: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalingLine {
    pub version: String,
    pub style: SeriesStyle,
    pub points: Vec<Scaling>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalingPlot {
    pub title: String,
    pub base_time: f64,
    pub lines: Vec<ScalingLine>,
    /// Every plotted thread count, ascending.
    pub thread_range: Vec<u32>,
    pub tick_interval: u32,
    pub show_ideal: bool,
}

impl ScalingPlot {
    /// Linear speedup: one point per thread count.
    pub fn ideal_speedup(&self) -> Vec<[f64; 2]> {
        self.thread_range.iter()
            .map(|&t| [t as f64, t as f64])
            .collect()
    }

    /// 100% efficiency across the thread range.
    pub fn ideal_efficiency(&self) -> Vec<[f64; 2]> {
        horizontal(&self.thread_range, 1.0)
    }
}

impl ScalingGroup {
    pub fn title(&self, base_time: f64) -> String {
        format!(
            "{}  ·  baseline: {}  (T = {:.3} s)",
            self.name, self.baseline_description, base_time
        )
    }

    /// Fails only if the timing baseline is absent. Members without a series
    /// are left out.
    pub fn plot(&self, results: &Results) -> Result<ScalingPlot> {
        let base_time = results.require_baseline(&self.baseline)?;

        let lines: Vec<ScalingLine> = self.members.iter()
            .filter_map(|member| {
                let points = results.series(&member.version, &member.baseline)?;
                Some(ScalingLine{
                    version: member.version.clone(),
                    style:   SeriesStyle::resolve(&member.version, SCALING_FALLBACK),
                    points:  scaling(points, base_time),
                })
            })
            .collect();
        debug!(chart = %self.file_stem, lines = lines.len(), base_time, "scaling plot");

        let thread_range = thread_range(
            lines.iter().flat_map(|line| line.points.iter().map(|p| p.threads))
        );
        Ok(ScalingPlot{
            title: self.title(base_time),
            base_time,
            tick_interval: tick_interval(&thread_range),
            thread_range,
            lines,
            show_ideal: self.show_ideal,
        })
    }
}

/// One line on the absolute time chart.
#[derive(Debug, Clone)]
pub struct TimeEntry {
    pub member: Member,
    pub label: String,
}

/// Absolute execution times of selected versions, with the sequential
/// time as reference.
#[derive(Debug, Clone)]
pub struct TimeComparison {
    pub title: String,
    pub file_stem: String,
    pub entries: Vec<TimeEntry>,
    pub reference_baseline: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeLine {
    pub style: SeriesStyle,
    pub points: Vec<Point>,
    pub fastest: Point,
}

impl TimeLine {
    /// Position of [TimeLine::fastest] in `points`.
    pub fn fastest_index(&self) -> usize {
        self.points.iter()
            .position(|point| *point == self.fastest)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimePlot {
    pub title: String,
    pub lines: Vec<TimeLine>,
    /// Single-thread time of the reference baseline, if recorded.
    pub reference: Option<f64>,
    pub thread_range: Vec<u32>,
    pub tick_interval: u32,
}

impl TimePlot {
    pub fn reference_line(&self) -> Option<Vec<[f64; 2]>> {
        self.reference.map(|time| horizontal(&self.thread_range, time))
    }
}

impl TimeComparison {
    pub fn plot(&self, results: &Results) -> TimePlot {
        let lines: Vec<TimeLine> = self.entries.iter()
            .filter_map(|entry| {
                let Member{version, baseline} = &entry.member;
                let points = results.series(version, baseline)?;
                Some(TimeLine{
                    style:   SeriesStyle::resolve(version, TIME_FALLBACK).with_label(&entry.label),
                    fastest: fastest(points)?,
                    points:  points.to_vec(),
                })
            })
            .collect();

        let reference = results.baseline(&self.reference_baseline);
        debug!(chart = %self.file_stem, lines = lines.len(), ?reference, "time plot");

        let thread_range = thread_range(
            DEFAULT_THREADS.into_iter()
                .chain(lines.iter().flat_map(|line| line.points.iter().map(|p| p.threads)))
        );
        TimePlot{
            title: self.title.clone(),
            lines,
            reference,
            tick_interval: tick_interval(&thread_range),
            thread_range,
        }
    }
}

/// All charts produced in one run.
#[derive(Debug, Clone)]
pub struct Layout {
    pub scaling: Vec<ScalingGroup>,
    pub time: TimeComparison,
}

impl Layout {
    /// Original, optimized and novel implementations of the parallel
    /// min/max search, plus the best of each on an absolute time scale.
    pub fn standard() -> Self {
        let scaling = vec![
            group(
                "Original Versions", "speedup_original",
                &["version1_parallel_for", "version2_sections", "version3_combined"],
                "ptr", "ptr", "sequential int***", true,
            ),
            group(
                "Optimized Versions", "speedup_optimized",
                &["version1_optimized", "version2_optimized", "version3_optimized"],
                "flat", "flat", "sequential_flat contiguous", true,
            ),
            group(
                "Novel Approaches", "speedup_novel",
                &["novel_simd_avx2", "novel_omp_simd", "novel_tiled",
                  "novel_tasks", "novel_branchless", "novel_ultimate"],
                "novel", "flat", "sequential_flat contiguous", false,
            ),
        ];

        let entry = |version: &str, baseline: &str, label: &str| TimeEntry{
            member: Member::new(version, baseline),
            label:  label.to_string(),
        };
        let time = TimeComparison{
            title: "Absolute Execution Time — Best Versions".to_string(),
            file_stem: "time_comparison".to_string(),
            entries: vec![
                entry("version1_parallel_for", "ptr",   "V1 original (int***)"),
                entry("version1_optimized",    "flat",  "V1 optimized (flat)"),
                entry("novel_simd_avx2",       "novel", "SIMD AVX2"),
                entry("novel_tiled",           "novel", "Cache tiling + prefetch"),
                entry("novel_ultimate",        "novel", "Ultimate (SIMD + tiling)"),
            ],
            reference_baseline: "ptr".to_string(),
        };

        Self{ scaling, time }
    }
}

fn group(
    name: &str,
    stem: &str,
    versions: &[&str],
    series_baseline: &str,
    baseline: &str,
    description: &str,
    show_ideal: bool,
) -> ScalingGroup {
    ScalingGroup{
        name: name.to_string(),
        file_stem: stem.to_string(),
        members: versions.iter().map(|v| Member::new(*v, series_baseline)).collect(),
        baseline: baseline.to_string(),
        baseline_description: description.to_string(),
        show_ideal,
    }
}

/// Two-point horizontal segment spanning `range`.
fn horizontal(range: &[u32], y: f64) -> Vec<[f64; 2]> {
    match (range.first(), range.last()) {
        (Some(&first), Some(&last)) => vec![[first as f64, y], [last as f64, y]],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod test_layout{
    use itertools::assert_equal;
    use crate::error::Error;
    use super::*;

    const CSV: &str = "\
version,threads,time_seconds,baseline
sequential,1,0.494,ptr
sequential_flat,1,0.678,flat
version1_parallel_for,2,0.26,ptr
version1_parallel_for,4,0.13,ptr
version1_parallel_for,8,0.08,ptr
version2_sections,2,0.30,ptr
version2_sections,4,0.20,ptr
version1_optimized,2,0.34,flat
version1_optimized,4,0.17,flat
novel_simd_avx2,2,0.10,novel
novel_simd_avx2,4,0.05,novel
novel_simd_avx2,16,0.06,novel
novel_ultimate,12,0.02,novel
";

    fn results() -> Results {
        Results::from_reader(CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let layout = Layout::standard();
        assert_equal(
            layout.scaling.iter().map(|g| g.file_stem.as_str()),
            ["speedup_original", "speedup_optimized", "speedup_novel"]
        );
        let novel = &layout.scaling[2];
        assert_eq!(novel.members.len(), 6);
        assert!(novel.members.iter().all(|m| m.baseline == "novel"));
        assert_eq!(novel.baseline, "flat");
        assert!(!novel.show_ideal);
        assert_eq!(layout.time.entries.len(), 5);
    }

    #[test]
    fn test_scaling_plot() {
        let layout = Layout::standard();
        let plot = layout.scaling[0].plot(&results()).unwrap();

        assert_eq!(plot.title, "Original Versions  ·  baseline: sequential int***  (T = 0.494 s)");
        // version3_combined has no rows
        assert_equal(
            plot.lines.iter().map(|l| l.version.as_str()),
            ["version1_parallel_for", "version2_sections"]
        );
        assert_eq!(plot.lines[0].style.label, "V1: parallel for");
        assert_eq!(plot.thread_range, [2, 4, 8]);
        assert_eq!(plot.tick_interval, 2);

        let v1 = &plot.lines[0].points;
        assert!((v1[0].speedup - 0.494 / 0.26).abs() < 1e-12);
        assert!((v1[2].efficiency - 0.494 / 0.08 / 8.0).abs() < 1e-12);

        assert_eq!(plot.ideal_speedup(), [[2.0, 2.0], [4.0, 4.0], [8.0, 8.0]]);
        assert_eq!(plot.ideal_efficiency(), [[2.0, 1.0], [8.0, 1.0]]);
    }

    #[test]
    fn test_novel_uses_flat_timing() {
        let layout = Layout::standard();
        let plot = layout.scaling[2].plot(&results()).unwrap();
        assert_eq!(plot.base_time, 0.678);
        assert_eq!(plot.lines.len(), 2);
        assert_eq!(plot.thread_range, [2, 4, 12, 16]);
        assert_eq!(plot.tick_interval, 2);
        let ultimate = &plot.lines[1];
        assert_eq!(ultimate.style.marker_size, 13.0);
        assert!((ultimate.points[0].speedup - 33.9).abs() < 1e-9);
    }

    #[test]
    fn test_empty_group_uses_default_range() {
        let results = Results::from_reader("\
version,threads,time_seconds,baseline
sequential_flat,1,0.678,flat
".as_bytes()).unwrap();
        let plot = Layout::standard().scaling[1].plot(&results).unwrap();
        assert!(plot.lines.is_empty());
        assert_eq!(plot.thread_range, DEFAULT_THREADS);
    }

    #[test]
    fn test_missing_baseline() {
        let results = Results::from_reader("\
version,threads,time_seconds,baseline
version1_parallel_for,2,0.26,ptr
".as_bytes()).unwrap();
        let err = Layout::standard().scaling[0].plot(&results).unwrap_err();
        assert!(matches!(err, Error::MissingBaseline(name) if name == "ptr"));
    }

    #[test]
    fn test_time_plot() {
        let plot = Layout::standard().time.plot(&results());
        assert_equal(
            plot.lines.iter().map(|l| l.style.label.as_str()),
            ["V1 original (int***)", "V1 optimized (flat)", "SIMD AVX2", "Ultimate (SIMD + tiling)"]
        );
        assert_eq!(plot.lines[0].style.color, "#1a4f72");
        assert_eq!(plot.lines[2].fastest, Point{threads: 4, time: 0.05});
        assert_eq!(plot.lines[2].fastest_index(), 1);
        assert_eq!(plot.lines[0].fastest_index(), 2);
        assert_eq!(plot.reference, Some(0.494));
        assert_eq!(plot.thread_range, [2, 4, 8, 12, 16]);
        assert_eq!(plot.reference_line(), Some(vec![[2.0, 0.494], [16.0, 0.494]]));
    }

    #[test]
    fn test_time_plot_without_reference() {
        let results = Results::from_reader("\
version,threads,time_seconds,baseline
novel_tiled,4,0.1,novel
".as_bytes()).unwrap();
        let plot = Layout::standard().time.plot(&results);
        assert_eq!(plot.lines.len(), 1);
        assert_eq!(plot.reference, None);
        assert_eq!(plot.reference_line(), None);
        assert_eq!(plot.thread_range, DEFAULT_THREADS);
    }
}
