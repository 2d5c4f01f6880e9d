//! Plain-text tables of what went onto the charts.

use std::fmt::Write;
use speedup::{ScalingPlot, TimePlot};

const NAME_W: usize = 26;
const COL_W: usize = 10;

pub fn scaling_table(plot: &ScalingPlot) -> String {
    let mut out = String::new();
    writeln!(out, "{}", plot.title).unwrap();
    writeln!(
        out, "{:<NAME_W$} {:>7} {:>COL_W$} {:>COL_W$} {:>COL_W$}",
        "Version", "Threads", "Time", "Speedup", "Efficiency"
    ).unwrap();
    writeln!(out, "{}", "-".repeat(NAME_W + 7 + COL_W * 3 + 4)).unwrap();

    for line in &plot.lines {
        for p in &line.points {
            writeln!(
                out, "{:<NAME_W$} {:>7} {:>COL_W$} {:>COL_W$} {:>COL_W$}",
                line.style.label,
                p.threads,
                format!("{:.3}s", p.time),
                format!("{:.2}x", p.speedup),
                format!("{:.1}%", p.efficiency * 100.0),
            ).unwrap();
        }
    }
    out
}

pub fn time_table(plot: &TimePlot) -> String {
    let mut out = String::new();
    writeln!(out, "{}", plot.title).unwrap();
    writeln!(
        out, "{:<NAME_W$} {:>7} {:>COL_W$}",
        "Version", "Threads", "Best"
    ).unwrap();
    writeln!(out, "{}", "-".repeat(NAME_W + 7 + COL_W + 2)).unwrap();

    for line in &plot.lines {
        writeln!(
            out, "{:<NAME_W$} {:>7} {:>COL_W$}",
            line.style.label,
            line.fastest.threads,
            format!("{:.3}s", line.fastest.time),
        ).unwrap();
    }
    if let Some(time) = plot.reference {
        writeln!(
            out, "{:<NAME_W$} {:>7} {:>COL_W$}",
            "sequential", 1, format!("{time:.3}s")
        ).unwrap();
    }
    out
}
