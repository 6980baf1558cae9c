//! Risk Wall component
//!
//! Summary metrics laid out as a sub-grid of small tiles. Each tile shows the
//! metric name and its value, the value colored by tone.

use crate::consts::ui_consts::risk_wall::{CELL_GAP, CELL_PADDING};
use crate::ui::dashboard::components::card::wrapped_rows;
use crate::ui::dashboard::layout::Viewport;
use crate::ui::dashboard::view::{MetricCell, MetricGrid};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

fn value_style(cell: &MetricCell) -> Style {
    Style::default().fg(cell.color).add_modifier(Modifier::BOLD)
}

fn name_style() -> Style {
    Style::default().fg(theme::NEUTRAL)
}

fn fits_inline(cell: &MetricCell, width: u16) -> bool {
    cell.name.chars().count() + 1 + cell.value.chars().count() <= usize::from(width)
}

fn name_paragraph(cell: &MetricCell) -> Paragraph<'static> {
    Paragraph::new(cell.name)
        .style(name_style())
        .wrap(Wrap { trim: true })
}

/// Content rows of a tile `width` columns wide, padding excluded.
///
/// Name and value share a line when they fit side by side. Otherwise the
/// name wraps and the value goes right-aligned on the line below it.
fn tile_rows(cell: &MetricCell, width: u16) -> u16 {
    if fits_inline(cell, width) {
        1
    } else {
        wrapped_rows(&name_paragraph(cell), width) + 1
    }
}

/// Width of the narrowest tile when `width` columns hold `columns` tiles.
fn tile_width(width: u16, columns: u16) -> u16 {
    let columns = columns.max(1);
    width.saturating_sub(CELL_GAP * (columns - 1)) / columns
}

/// Height shared by every tile, sized for the longest wrapped metric name.
pub fn tile_height(grid: &MetricGrid, width: u16, columns: u16) -> u16 {
    let inner = tile_width(width, columns).saturating_sub(2 * CELL_PADDING);
    let rows = grid
        .cells
        .iter()
        .map(|cell| tile_rows(cell, inner))
        .max()
        .unwrap_or(1);
    rows + 2 * CELL_PADDING
}

fn render_tile(cell: &MetricCell, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .style(Style::default().bg(theme::METRIC_CELL_BG))
        .padding(Padding::uniform(CELL_PADDING));
    let inner = block.inner(area);
    block.render(area, buf);

    if fits_inline(cell, inner.width) {
        let fill = usize::from(inner.width) - cell.name.chars().count() - cell.value.chars().count();
        Paragraph::new(Line::from(vec![
            Span::styled(cell.name, name_style()),
            Span::raw(" ".repeat(fill)),
            Span::styled(cell.value, value_style(cell)),
        ]))
        .render(inner, buf);
        return;
    }

    let name = name_paragraph(cell);
    let [name_area, value_area] = Layout::vertical([
        Constraint::Length(wrapped_rows(&name, inner.width)),
        Constraint::Length(1),
    ])
    .areas(inner);
    name.render(name_area, buf);
    Line::styled(cell.value, value_style(cell))
        .alignment(Alignment::Right)
        .render(value_area, buf);
}

/// Areas of the tiles of `grid` inside `area`, in metric order.
fn tile_areas(grid: &MetricGrid, area: Rect, viewport: Viewport) -> Vec<Rect> {
    let columns = viewport.metric_columns().max(1);
    let height = tile_height(grid, area.width, columns);
    let columns = usize::from(columns);
    let rows = grid.cells.len().div_ceil(columns);
    let row_areas = Layout::vertical(vec![Constraint::Length(height); rows])
        .spacing(CELL_GAP)
        .split(area);

    row_areas
        .iter()
        .flat_map(|row_area| {
            Layout::horizontal(vec![Constraint::Fill(1); columns])
                .spacing(CELL_GAP)
                .split(*row_area)
                .to_vec()
        })
        .collect()
}

/// Render the metric tiles into the content area of the Risk Wall card.
pub fn render_risk_wall(grid: &MetricGrid, area: Rect, viewport: Viewport, buf: &mut Buffer) {
    for (cell, tile_area) in grid.cells.iter().zip(tile_areas(grid, area, viewport)) {
        render_tile(cell, tile_area, buf);
    }
}
