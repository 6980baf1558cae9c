//! Line chart component
//!
//! Categorical x-axis, percent y-axis, dashed grid, one colored line per
//! series with optional point markers and a legend.

use super::tooltip::{Tooltip, TooltipRow};
use crate::consts::ui_consts::charts::{GRID_DASH, GRID_SAMPLES};
use crate::ui::dashboard::utils::{AxisScale, format_axis_percent, format_value};
use crate::ui::dashboard::view::LineSpec;
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Position, Rect};
use ratatui::style::Style;
use ratatui::symbols::{Marker, line};
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Widget};

/// Dashed horizontal lines at every y tick and vertical lines at every
/// category.
fn grid_points(scale: &AxisScale, x_bounds: [f64; 2], categories: usize) -> Vec<(f64, f64)> {
    let dashed = |from: f64, to: f64| {
        (0..=GRID_SAMPLES)
            .filter(|s| (s / GRID_DASH) % 2 == 0)
            .map(move |s| from + (to - from) * s as f64 / GRID_SAMPLES as f64)
    };

    let mut points = Vec::new();
    for tick in scale.ticks() {
        points.extend(dashed(x_bounds[0], x_bounds[1]).map(|x| (x, tick)));
    }
    for category in 0..categories {
        let x = category as f64;
        points.extend(dashed(scale.min, scale.max).map(|y| (x, y)));
    }
    points
}

fn y_labels(scale: &AxisScale) -> Vec<String> {
    scale.ticks().into_iter().map(format_axis_percent).collect()
}

/// Render the chart into the content area of a card.
pub fn render_line(spec: &LineSpec, area: Rect, buf: &mut Buffer) {
    let scale = spec.y_scale();
    let x_bounds = spec.x_bounds();
    let grid = grid_points(&scale, x_bounds, spec.categories.len());
    let series_points: Vec<Vec<(f64, f64)>> =
        (0..spec.series.len()).map(|i| spec.points(i)).collect();

    // Later datasets draw over earlier ones: grid, then lines, then markers.
    let mut datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme::GRID))
            .data(&grid),
    ];
    for (series, points) in spec.series.iter().zip(&series_points) {
        datasets.push(
            Dataset::default()
                .name(series.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series.color))
                .data(points),
        );
    }
    for (series, points) in spec.series.iter().zip(&series_points) {
        if series.markers {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(series.color))
                    .data(points),
            );
        }
    }

    let y_labels: Vec<Span> = y_labels(&scale)
        .into_iter()
        .map(|l| Span::styled(l, theme::axis_style()))
        .collect();

    // The x axis and its labels are drawn below the chart so that every
    // label sits under its category.
    let chart_area = Rect {
        height: area.height.saturating_sub(2),
        ..area
    };
    Chart::new(datasets)
        .style(Style::default().fg(theme::TEXT))
        .x_axis(Axis::default().bounds(x_bounds).style(theme::axis_style()))
        .y_axis(
            Axis::default()
                .bounds(scale.bounds())
                .labels(y_labels)
                .style(theme::axis_style()),
        )
        .legend_position(Some(LegendPosition::Bottom))
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 2)))
        .render(chart_area, buf);

    render_x_axis(spec, area, buf);
}

/// Axis line and category labels along the bottom two rows of `area`.
fn render_x_axis(spec: &LineSpec, area: Rect, buf: &mut Buffer) {
    let graph = graph_area(spec, area);
    if graph.is_empty() || area.height < 2 {
        return;
    }
    let axis_y = graph.bottom();
    let label_y = axis_y + 1;

    buf.set_string(graph.x - 1, axis_y, line::BOTTOM_LEFT, theme::axis_style());
    for x in graph.left()..graph.right() {
        buf.set_string(x, axis_y, line::HORIZONTAL, theme::axis_style());
    }

    for (index, category) in spec.categories.iter().enumerate() {
        let width = category.chars().count() as u16;
        let center = category_column(graph, spec.categories.len(), index);
        let x = center
            .saturating_sub(width / 2)
            .min(area.right().saturating_sub(width))
            .max(area.x);
        buf.set_stringn(x, label_y, category, usize::from(width), theme::axis_style());
    }
}

/// Plotting area inside `area`: right of the y labels and axis line, above
/// the axis line and x labels.
fn graph_area(spec: &LineSpec, area: Rect) -> Rect {
    let label_width = y_labels(&spec.y_scale())
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16;
    let left = label_width + 1;
    Rect::new(
        area.x + left,
        area.y,
        area.width.saturating_sub(left),
        area.height.saturating_sub(2),
    )
}

/// Column of the `index`-th of `count` categories: the first on the left
/// edge of `graph`, the last on its right edge.
fn category_column(graph: Rect, count: usize, index: usize) -> u16 {
    let last = count.saturating_sub(1).max(1);
    let span = usize::from(graph.width.saturating_sub(1));
    graph.x + (index * span / last) as u16
}

/// Category closest to the cursor column.
pub fn category_at(spec: &LineSpec, area: Rect, pos: Position) -> Option<usize> {
    let graph = graph_area(spec, area);
    if !graph.contains(pos) {
        return None;
    }
    let count = spec.categories.len();
    (0..count).min_by_key(|&index| category_column(graph, count, index).abs_diff(pos.x))
}

pub fn tooltip(spec: &LineSpec, area: Rect, pos: Position) -> Option<Tooltip> {
    let index = category_at(spec, area, pos)?;
    Some(Tooltip {
        title: spec.categories.get(index).cloned(),
        rows: spec
            .series
            .iter()
            .filter_map(|s| {
                s.values
                    .get(index)
                    .map(|v| TooltipRow::new(s.name, format_value(*v), s.color))
            })
            .collect(),
    })
}
