//! Dashboard main renderer
//!
//! The whole page is drawn into an off-screen buffer as tall as its content,
//! then the visible window is copied into the frame. Tooltips are drawn last,
//! in screen coordinates, so they never scroll out from under the cursor.

use super::components::tooltip::{Tooltip, render_tooltip};
use super::components::{bar, card, footer, line, pie, risk_wall};
use super::layout::{Breakpoints, GridLayout, arrange};
use super::state::DashboardState;
use super::view::{DashboardView, PanelContent};
use crate::config::Config;
use crate::consts::ui_consts::FOOTER_HEIGHT;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

/// Per-frame inputs of [`render_page`] beyond the tree itself.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub breakpoints: Breakpoints,
    pub with_background_color: bool,
    /// Opacity of fade-in panels.
    pub opacity: f64,
    /// Cursor in page coordinates.
    pub hover: Option<Position>,
}

/// A fully drawn page.
pub struct Page {
    pub buffer: Buffer,
    pub layout: GridLayout,
    /// Tooltip for whatever lies under the cursor.
    pub tooltip: Option<Tooltip>,
}

/// Draws every panel of `view` for a page `width` columns wide.
pub fn render_page(view: &DashboardView, width: u16, options: PageOptions) -> Page {
    let layout = arrange(&view.panels, width, options.breakpoints);
    let mut buffer = Buffer::empty(Rect::new(0, 0, width, layout.content_height));
    if options.with_background_color {
        buffer.set_style(buffer.area, Style::default().bg(theme::PAGE_BG));
    }

    let mut tooltip = None;
    for cell in &layout.cells {
        let Some(panel) = view.panels.get(cell.panel) else {
            continue;
        };
        let content = card::render_card(panel, cell.area, &mut buffer);
        let hovered = options.hover.filter(|pos| content.contains(*pos));

        match &panel.content {
            PanelContent::Pie(spec) => {
                pie::render_pie(spec, content, &mut buffer);
                tooltip = tooltip.or_else(|| hovered.and_then(|p| pie::tooltip(spec, content, p)));
            }
            PanelContent::Line(spec) => {
                line::render_line(spec, content, &mut buffer);
                tooltip =
                    tooltip.or_else(|| hovered.and_then(|p| line::tooltip(spec, content, p)));
            }
            PanelContent::Bar(spec) => {
                bar::render_bar(spec, content, &mut buffer);
                tooltip = tooltip.or_else(|| hovered.and_then(|p| bar::tooltip(spec, content, p)));
            }
            PanelContent::Metrics(grid) => {
                risk_wall::render_risk_wall(grid, content, layout.viewport, &mut buffer);
            }
        }

        if panel.fade_in && options.opacity < 1.0 {
            // Include the shadow strips.
            let faded = Rect::new(
                cell.area.x,
                cell.area.y,
                cell.area.width + 1,
                cell.area.height + 1,
            );
            fade(&mut buffer, faded, options.opacity);
        }
    }

    Page {
        buffer,
        layout,
        tooltip,
    }
}

/// Blends every cell of `area` toward the page background.
fn fade(buf: &mut Buffer, area: Rect, opacity: f64) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = theme::blend(theme::PAGE_BG, cell.fg, opacity);
                let bg = theme::blend(theme::PAGE_BG, cell.bg, opacity);
                cell.set_fg(fg).set_bg(bg);
            }
        }
    }
}

/// Copies rows `from_row..` of `src` into `dst_area` of `dst`.
fn blit(src: &Buffer, from_row: u16, dst: &mut Buffer, dst_area: Rect) {
    for dy in 0..dst_area.height {
        let src_y = from_row.saturating_add(dy);
        if src_y >= src.area.bottom() {
            break;
        }
        for dx in 0..dst_area.width {
            if let (Some(from), Some(to)) = (
                src.cell((src.area.x + dx, src_y)),
                dst.cell_mut((dst_area.x + dx, dst_area.y + dy)),
            ) {
                *to = from.clone();
            }
        }
    }
}

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let area = f.area();
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(theme::PAGE_BG)),
            area,
        );
    }

    let [body, footer_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(FOOTER_HEIGHT)]).areas(area);

    let scroll = state.scroll.min(state.max_scroll(body.as_size()));
    let hover_on_body = state.hover.filter(|pos| body.contains(*pos));
    let page_hover = hover_on_body
        .map(|pos| Position::new(pos.x - body.x, pos.y - body.y + scroll));

    let page = render_page(
        &state.view,
        body.width,
        PageOptions {
            breakpoints: state.breakpoints,
            with_background_color: state.with_background_color,
            opacity: state.opacity,
            hover: page_hover,
        },
    );

    blit(&page.buffer, scroll, f.buffer_mut(), body);
    if let (Some(tooltip), Some(anchor)) = (&page.tooltip, hover_on_body) {
        render_tooltip(tooltip, anchor, body, f.buffer_mut());
    }
    footer::render_footer(f, footer_area, page.layout.viewport);
}

/// Renders the dashboard once, fully faded in and without a cursor.
///
/// `height` defaults to the full content height; a shorter height crops the
/// page, a taller one pads it.
pub fn render_snapshot(
    view: &DashboardView,
    config: &Config,
    width: u16,
    height: Option<u16>,
) -> Buffer {
    let page = render_page(
        view,
        width,
        PageOptions {
            breakpoints: Breakpoints::from(config),
            with_background_color: config.with_background_color,
            opacity: 1.0,
            hover: None,
        },
    );

    match height {
        Some(height) if height != page.buffer.area.height => {
            let area = Rect::new(0, 0, width, height);
            let mut cropped = Buffer::empty(area);
            blit(&page.buffer, 0, &mut cropped, area);
            cropped
        }
        _ => page.buffer,
    }
}
