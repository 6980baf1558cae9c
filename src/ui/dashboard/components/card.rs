//! Panel card component
//!
//! Draws the card frame, shadow, title and caption of a panel and hands back
//! the area left for its chart.

use crate::ui::dashboard::view::Panel;
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap};

/// Render the card of `panel` into `area` and return its content area.
pub fn render_card(panel: &Panel, area: Rect, buf: &mut Buffer) -> Rect {
    let card = panel.card;
    if card.has_shadow() {
        render_shadow(area, buf);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(card.border_type())
        .border_style(card.border_style())
        .style(Style::default().bg(card.background()).fg(theme::TEXT))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    block.render(area, buf);

    let caption = panel.caption.map(caption_paragraph);
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    if let Some(caption) = &caption {
        constraints.push(Constraint::Length(wrapped_rows(caption, inner.width)));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Fill(1));
    let rows = Layout::vertical(constraints).split(inner);

    Paragraph::new(Line::styled(panel.title, theme::title_style())).render(rows[0], buf);
    if let Some(caption) = caption {
        caption.render(rows[2], buf);
    }

    rows[rows.len() - 1]
}

fn caption_paragraph(caption: &str) -> Paragraph<'_> {
    Paragraph::new(caption)
        .style(theme::caption_style())
        .wrap(Wrap { trim: true })
}

/// Rows `paragraph` occupies once wrapped to `width`.
pub fn wrapped_rows(paragraph: &Paragraph, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width.max(1))).unwrap_or(u16::MAX)
}

/// One-cell drop shadow along the right and bottom edges.
fn render_shadow(area: Rect, buf: &mut Buffer) {
    let right = Rect::new(area.right(), area.y.saturating_add(1), 1, area.height);
    let bottom = Rect::new(area.x.saturating_add(1), area.bottom(), area.width, 1);
    for strip in [right, bottom] {
        let strip = strip.intersection(buf.area);
        if !strip.is_empty() {
            buf.set_style(strip, Style::default().bg(theme::SHADOW));
        }
    }
}
