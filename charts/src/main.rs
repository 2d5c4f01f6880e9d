mod figure;
mod render;
mod report;
mod scaling;
mod timing;

use std::fs;
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use speedup::{Error, Layout, Results, ScalingPlot};
use speedup::layout::ScalingGroup;
use crate::render::{Format, Output};

/// Speedup, efficiency and execution time charts from benchmark timings.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV with `version,threads,time_seconds,baseline` columns.
    #[arg(short, long, default_value = "benchmark_results.csv")]
    input: PathBuf,

    /// Directory for the generated images. Created if missing.
    #[arg(short, long, default_value = "charts")]
    out_dir: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Multiplier for chart pixel sizes.
    #[arg(long, default_value_t = 1.0, value_parser = parse_scale)]
    scale: f64,

    /// Also print the plotted numbers.
    #[arg(long)]
    table: bool,
}

fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be a positive number, got {scale}"))
    }
}

/// Plots of every scaling group whose timing baseline is recorded.
/// Groups without one are skipped with a warning.
fn scaling_plots<'a>(
    layout: &'a Layout,
    results: &Results,
) -> speedup::Result<Vec<(&'a ScalingGroup, ScalingPlot)>> {
    let mut plots = Vec::new();
    for group in &layout.scaling {
        match group.plot(results) {
            Ok(plot) => plots.push((group, plot)),
            Err(Error::MissingBaseline(baseline)) => {
                warn!(chart = %group.file_stem, %baseline, "baseline timing missing, chart skipped");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(plots)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("warn")),
                ),
        )
        .init();

    let args = Args::parse();

    let results = Results::from_path(&args.input)
        .with_context(|| format!("loading benchmark results from {}", args.input.display()))?;
    if results.is_empty() {
        warn!(input = %args.input.display(), "no benchmark rows found");
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let output = Output{
        dir: args.out_dir.clone(),
        format: args.format,
        scale: args.scale,
    };

    let layout = Layout::standard();

    for (group, plot) in scaling_plots(&layout, &results)? {
        if args.table {
            println!("\n{}", report::scaling_table(&plot));
        }

        let chart = scaling::chart(&plot);
        for path in output.save(&chart, &group.file_stem, scaling::SIZE)? {
            println!("Saved: {}", path.display());
        }
    }

    {
        let plot = layout.time.plot(&results);
        if plot.reference.is_none() {
            warn!(
                baseline = %layout.time.reference_baseline,
                "baseline timing missing, sequential reference line omitted"
            );
        }
        if args.table {
            println!("\n{}", report::time_table(&plot));
        }

        let chart = timing::chart(&plot);
        for path in output.save(&chart, &layout.time.file_stem, timing::SIZE)? {
            println!("Saved: {}", path.display());
        }
    }

    println!("\nAll charts generated successfully!");
    Ok(())
}
