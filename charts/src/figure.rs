//! Pieces shared by every chart: axes, titles, plotted lines.

use charming::component::{Axis, Title};
use charming::element::{
    AxisLabel, AxisLine, AxisLineStyle, AxisType, Formatter, ItemStyle, LineStyle, LineStyleType, NameLocation,
    SplitLine, Symbol, TextStyle,
};
use charming::series::Line;
use str_macro::str;
use speedup::metrics::labelled_ticks;
use speedup::style::{Marker, SeriesStyle, AXIS_COLOR, GRID_COLOR};

pub const TITLE_SIZE: i32 = 14;
pub const AXIS_NAME_SIZE: i32 = 13;
pub const TICK_LABEL_SIZE: i32 = 11;
pub const LINE_WIDTH: f64 = 1.6;

pub fn title(text: impl Into<String>, left: &str) -> Title {
    Title::new()
        .text(text.into())
        .left(left)
        .text_style(TextStyle::new().font_size(TITLE_SIZE).color("black"))
}

/// Axis lines in grey, dotted grid.
fn styled(axis: Axis, name: &str, grid: u32) -> Axis {
    axis
        .name(name)
        .name_location(NameLocation::Center)
        .name_gap(30.0)
        .name_text_style(TextStyle::new().font_size(AXIS_NAME_SIZE).color("black"))
        .grid_index(grid)
        .axis_label(AxisLabel::new().font_size(TICK_LABEL_SIZE).color("black"))
        .axis_line(
            AxisLine::new()
                .line_style(AxisLineStyle::new().color((1.0, AXIS_COLOR)).width(0.7))
        )
        .split_line(
            SplitLine::new()
                .line_style(
                    LineStyle::new()
                        .color(GRID_COLOR)
                        .width(0.6)
                        .type_(LineStyleType::Dotted)
                )
        )
}

/// Axis label formatter that keeps only the thread counts in `labels`.
fn thread_label_js(labels: &[u32]) -> String {
    let list = labels.iter().map(u32::to_string).collect::<Vec<_>>().join(",");
    format!("function (value) {{ return [{list}].indexOf(value) >= 0 ? String(value) : ''; }}")
}

/// Linear thread axis. Every plotted thread count lands on a tick and only
/// those ticks are labelled.
pub fn thread_axis(range: &[u32], interval: u32, grid: u32) -> Axis {
    let mut axis = Axis::new()
        .type_(AxisType::Value)
        .interval(interval as f64);
    if let (Some(&first), Some(&last)) = (range.first(), range.last()) {
        axis = axis.min(first as f64).max(last as f64);
    }
    let labels = labelled_ticks(range, interval);
    styled(axis, "Threads", grid)
        .axis_label(
            AxisLabel::new()
                .font_size(TICK_LABEL_SIZE)
                .color("black")
                .formatter(Formatter::Function(thread_label_js(&labels).into()))
        )
}

pub fn value_axis(name: &str, grid: u32) -> Axis {
    styled(Axis::new().type_(AxisType::Value), name, grid)
}

pub fn symbol(marker: Marker) -> Symbol {
    match marker {
        Marker::Circle     => Symbol::Circle,
        Marker::Square     => Symbol::Rect,
        Marker::TriangleUp => Symbol::Triangle,
        Marker::Diamond    => Symbol::Diamond,
        Marker::TriangleDown => Symbol::Custom(str!("path://M0,0L10,0L5,10Z")),
        Marker::Plus  => Symbol::Custom(str!("path://M3,0H7V3H10V7H7V10H3V7H0V3H3Z")),
        Marker::Cross => Symbol::Custom(str!(
            "path://M1,0L5,4L9,0L10,1L6,5L10,9L9,10L5,6L1,10L0,9L4,5L0,1Z"
        )),
        Marker::Hexagon => Symbol::Custom(str!(
            "path://M5,0L9.33,2.5V7.5L5,10L0.67,7.5V2.5Z"
        )),
        Marker::Star => Symbol::Custom(str!(
            "path://M5,0L6.18,3.82L10,3.82L6.91,6.18L8.09,10L5,7.64L1.91,10L3.09,6.18L0,3.82L3.82,3.82Z"
        )),
    }
}

/// Series data as `[x, y]` pairs.
pub fn xy(points: impl IntoIterator<Item = [f64; 2]>) -> Vec<Vec<f64>> {
    points.into_iter().map(Vec::from).collect()
}

/// Solid line with markers in the series' own style.
pub fn data_line(style: &SeriesStyle, data: Vec<Vec<f64>>, grid: u32) -> Line {
    Line::new()
        .name(style.label.as_str())
        .symbol(symbol(style.marker))
        .symbol_size(style.marker_size)
        .line_style(LineStyle::new().color(style.color).width(LINE_WIDTH))
        .item_style(ItemStyle::new().color(style.color))
        .x_axis_index(grid)
        .y_axis_index(grid)
        .data(data)
}

/// Marker-less reference line.
pub fn reference_line(
    name: &str,
    color: &str,
    kind: LineStyleType,
    data: Vec<Vec<f64>>,
    grid: u32,
) -> Line {
    Line::new()
        .name(name)
        .symbol(Symbol::None)
        .line_style(LineStyle::new().color(color).width(1.1).type_(kind))
        .item_style(ItemStyle::new().color(color))
        .x_axis_index(grid)
        .y_axis_index(grid)
        .data(data)
}
