//! Speedup (left) and efficiency (right) against thread count.

use charming::Chart;
use charming::component::{Grid, Legend};
use charming::element::LineStyleType;
use charming::series::Series;
use str_macro::str;
use speedup::ScalingPlot;
use speedup::style::IDEAL_COLOR;
use crate::figure::{data_line, reference_line, thread_axis, title, value_axis, xy};
use crate::render::CHART_BACKGROUND;

pub const SIZE: (u32, u32) = (1200, 450);

struct Panel {
    title: String,
    y_name: String,
    ideal_name: String,
    title_left: &'static str,
}

fn panels() -> [Panel; 2] {
    [
        Panel{
            title: str!("Speedup vs. Thread Count"),
            y_name: str!("Speedup"),
            ideal_name: str!("Ideal (linear)"),
            title_left: "12%",
        },
        Panel{
            title: str!("Efficiency vs. Thread Count"),
            y_name: str!("Efficiency"),
            ideal_name: str!("Ideal (100%)"),
            title_left: "62%",
        },
    ]
}

pub fn chart(plot: &ScalingPlot) -> Chart {
    let [speedup, efficiency] = panels();

    let mut chart =
    Chart::new()
        .background_color(CHART_BACKGROUND)
        .title(title(plot.title.clone(), "center"))
        .title(title(speedup.title.clone(), speedup.title_left).top(28))
        .title(title(efficiency.title.clone(), efficiency.title_left).top(28))
        .legend(
            Legend::new().top("bottom")
        )
        .grid(
            Grid::new()
                .left(70)
                .right("54%")
                .top(70)
                .bottom(90)
        )
        .grid(
            Grid::new()
                .left("56%")
                .right(30)
                .top(70)
                .bottom(90)
        );

    for (grid, panel) in [&speedup, &efficiency].into_iter().enumerate() {
        let grid = grid as u32;
        chart = chart
            .x_axis(thread_axis(&plot.thread_range, plot.tick_interval, grid))
            .y_axis(value_axis(&panel.y_name, grid));
    }

    for line in &plot.lines {
        let speedups    = xy(line.points.iter().map(|p| [p.threads as f64, p.speedup]));
        let efficiencies = xy(line.points.iter().map(|p| [p.threads as f64, p.efficiency]));
        chart = chart
            .series(Series::Line(data_line(&line.style, speedups, 0)))
            .series(Series::Line(data_line(&line.style, efficiencies, 1)));
    }

    if plot.show_ideal {
        chart = chart
            .series(Series::Line(reference_line(
                &speedup.ideal_name, IDEAL_COLOR, LineStyleType::Dashed,
                xy(plot.ideal_speedup()), 0,
            )))
            .series(Series::Line(reference_line(
                &efficiency.ideal_name, IDEAL_COLOR, LineStyleType::Dashed,
                xy(plot.ideal_efficiency()), 1,
            )));
    }

    chart
}
