//! Hover tooltip component
//!
//! Every chart reports what lies under the cursor as a [`Tooltip`]; this
//! module draws it with the shared tooltip style.

use crate::ui::theme::TOOLTIP;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Widget};

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub name: String,
    pub value: String,
    pub color: Color,
}

impl TooltipRow {
    pub fn new(name: impl Into<String>, value: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            color,
        }
    }

    pub fn text(&self) -> String {
        format!("{} : {}", self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: Option<String>,
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        if let Some(title) = &self.title {
            lines.push(Line::from(Span::styled(
                title.clone(),
                Style::default().fg(TOOLTIP.text),
            )));
        }
        for row in &self.rows {
            lines.push(Line::from(Span::styled(
                row.text(),
                Style::default().fg(row.color),
            )));
        }
        lines
    }

    /// Outer size, borders and padding included.
    pub fn size(&self) -> (u16, u16) {
        let lines = self.lines();
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        (width + 4, lines.len() as u16 + 2)
    }

    /// Where the tooltip box goes for a cursor at `anchor`: below and to the
    /// right, flipped to the other side when it would leave `bounds`.
    pub fn placement(&self, anchor: Position, bounds: Rect) -> Rect {
        let (width, height) = self.size();
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);

        let mut x = anchor.x.saturating_add(2);
        if x + width > bounds.right() {
            x = anchor.x.saturating_sub(width + 1).max(bounds.x);
        }
        let mut y = anchor.y.saturating_add(1);
        if y + height > bounds.bottom() {
            y = bounds.bottom().saturating_sub(height).max(bounds.y);
        }
        Rect::new(x, y, width, height)
    }
}

/// Draws `tooltip` next to the cursor, kept inside `bounds`.
pub fn render_tooltip(tooltip: &Tooltip, anchor: Position, bounds: Rect, buf: &mut Buffer) {
    let area = tooltip.placement(anchor, bounds).intersection(buf.area);
    if area.is_empty() {
        return;
    }

    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(TOOLTIP.border_style())
        .style(TOOLTIP.body())
        .padding(Padding::horizontal(1));
    Paragraph::new(tooltip.lines())
        .block(block)
        .style(TOOLTIP.body())
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme;

    fn sample() -> Tooltip {
        Tooltip {
            title: Some("1y".to_string()),
            rows: vec![
                TooltipRow::new("Relief", "28", theme::GREEN),
                TooltipRow::new("Tighten", "55", theme::RED),
            ],
        }
    }

    #[test]
    fn test_row_text() {
        assert_eq!(sample().rows[1].text(), "Tighten : 55");
    }

    #[test]
    fn test_size_fits_longest_line() {
        // "Tighten : 55" is 12 wide.
        assert_eq!(sample().size(), (16, 5));
    }

    #[test]
    fn test_placement_flips_at_right_edge() {
        let bounds = Rect::new(0, 0, 40, 20);
        let tip = sample();
        assert_eq!(tip.placement(Position::new(5, 5), bounds), Rect::new(7, 6, 16, 5));

        let flipped = tip.placement(Position::new(35, 18), bounds);
        assert!(flipped.right() <= bounds.right());
        assert!(flipped.bottom() <= bounds.bottom());
        assert!(flipped.x < 35);
    }

    #[test]
    fn test_render_uses_shared_style() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));
        render_tooltip(&sample(), Position::new(1, 1), buf.area, &mut buf);

        // Top-left corner of the box sits at (3, 2).
        let corner = buf.cell((3, 2)).unwrap();
        assert_eq!(corner.fg, theme::TOOLTIP.border);
        assert_eq!(corner.bg, theme::TOOLTIP.background);
        let text = crate::ui::dashboard::utils::buffer_to_lines(&buf).join("\n");
        assert!(text.contains("Relief : 28"));
        assert!(text.contains("Tighten : 55"));
    }
}
