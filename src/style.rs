//! How each benchmarked version is drawn.
//!
//! Colors stay distinguishable in greyscale print through a mix of shade
//! and marker shape.

pub const IDEAL_COLOR: &str = "#999999";
pub const SEQUENTIAL_COLOR: &str = "#7f8c8d";
pub const AXIS_COLOR: &str = "#888888";
pub const GRID_COLOR: &str = "#cccccc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    Diamond,
    Plus,
    Cross,
    Hexagon,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub marker: Marker,
    pub marker_size: f64,
}

const fn known(label: &'static str, color: &'static str, marker: Marker) -> VersionStyle {
    VersionStyle{ label, color, marker, marker_size: 9.0 }
}

/// Style of a known version.
pub fn style_of(version: &str) -> Option<VersionStyle> {
    use Marker::*;
    let style = match version {
        "version1_parallel_for" => known("V1: parallel for", "#1a4f72", Circle),
        "version2_sections"     => known("V2: sections",     "#c0392b", Square),
        "version3_combined"     => known("V3: combined",     "#2e7d32", TriangleUp),
        "version1_optimized"    => known("V1 optimized",     "#1a4f72", Circle),
        "version2_optimized"    => known("V2 optimized",     "#c0392b", Square),
        "version3_optimized"    => known("V3 optimized",     "#2e7d32", TriangleUp),
        "novel_simd_avx2"       => known("SIMD AVX2",               "#b45309", Diamond),
        "novel_omp_simd"        => known("OMP SIMD (2-pass)",       "#6a0dad", TriangleDown),
        "novel_tiled"           => known("Cache tiling + prefetch", "#00695c", Plus),
        "novel_tasks"           => known("Task-based D&C",          "#4e342e", Cross),
        "novel_branchless"      => known("Branchless XOR",          "#546e7a", Hexagon),
        // star needs to be bigger
        "novel_ultimate"        => VersionStyle{
            marker_size: 13.0,
            ..known("Ultimate (SIMD + tiling)", "#b71c1c", Star)
        },
        _ => return None,
    };
    Some(style)
}

/// What an unknown version falls back to. Differs between chart kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fallback {
    pub color: &'static str,
    pub marker_size: f64,
}

pub const SCALING_FALLBACK: Fallback = Fallback{ color: "#333333", marker_size: 6.0 };
pub const TIME_FALLBACK:    Fallback = Fallback{ color: "#555555", marker_size: 9.0 };

/// Resolved style of one plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub label: String,
    pub color: &'static str,
    pub marker: Marker,
    pub marker_size: f64,
}

impl SeriesStyle {
    pub fn resolve(version: &str, fallback: Fallback) -> Self {
        match style_of(version) {
            Some(style) => Self{
                label: style.label.to_string(),
                color: style.color,
                marker: style.marker,
                marker_size: style.marker_size,
            },
            None => Self{
                label: version.to_string(),
                color: fallback.color,
                marker: Marker::Circle,
                marker_size: fallback.marker_size,
            },
        }
    }

    #[inline]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
