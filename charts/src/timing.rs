//! Absolute execution time of the best versions.

use charming::Chart;
use charming::component::{Grid, Legend};
use charming::element::{Formatter, ItemStyle, Label, LabelPosition, LineStyle, LineStyleType};
use charming::series::Series;
use speedup::TimePlot;
use speedup::style::SEQUENTIAL_COLOR;
use crate::figure::{data_line, reference_line, thread_axis, title, value_axis, xy};
use crate::render::CHART_BACKGROUND;

pub const SIZE: (u32, u32) = (1000, 550);

/// Label only the point at `index`.
fn point_formatter_js(index: usize, text: &str) -> String {
    format!("function (param) {{ return param.dataIndex === {index} ? '{text}' : ''; }}")
}

fn point_formatter(index: usize, text: &str) -> Formatter {
    Formatter::Function(point_formatter_js(index, text).into())
}

/// `"0.083s"` next to the fastest point.
fn fastest_label(index: usize, time: f64, color: &str) -> Label {
    Label::new()
        .show(true)
        .position(LabelPosition::Top)
        .font_size(10)
        .font_weight("bold")
        .color(color)
        .formatter(point_formatter(index, &format!("{time:.3}s")))
}

pub fn chart(plot: &TimePlot) -> Chart {
    let mut chart =
    Chart::new()
        .background_color(CHART_BACKGROUND)
        .title(title(plot.title.clone(), "center"))
        .legend(
            Legend::new().top("bottom")
        )
        .grid(
            Grid::new()
                .left(70)
                .right(110)
                .top(50)
                .bottom(90)
        )
        .x_axis(thread_axis(&plot.thread_range, plot.tick_interval, 0))
        .y_axis(value_axis("Time (seconds)", 0).min(0.0));

    for line in &plot.lines {
        let times = xy(line.points.iter().map(|p| [p.threads as f64, p.time]));
        let series = data_line(&line.style, times, 0)
            .line_style(
                LineStyle::new()
                    .color(line.style.color)
                    .width(2.4)
            )
            .item_style(
                ItemStyle::new()
                    .color(line.style.color)
                    .border_color("white")
                    .border_width(0.9)
            )
            .label(fastest_label(line.fastest_index(), line.fastest.time, line.style.color));
        chart = chart.series(Series::Line(series));
    }

    if let (Some(time), Some(data)) = (plot.reference, plot.reference_line()) {
        let text = format!("sequential\\n{time:.3}s");
        let series = reference_line("sequential", SEQUENTIAL_COLOR, LineStyleType::Dotted, xy(data), 0)
            .label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Right)
                    .font_size(10)
                    .color(SEQUENTIAL_COLOR)
                    .formatter(point_formatter(1, &text))
            );
        chart = chart.series(Series::Line(series));
    }

    chart
}
