//! Pie chart component
//!
//! Paints a disc cell by cell, correcting for cells being about twice as
//! tall as they are wide, and lists the slice labels beside it.

use super::tooltip::{Tooltip, TooltipRow};
use crate::consts::ui_consts::charts::PIE_DISC_PERCENT;
use crate::ui::dashboard::utils::format_value;
use crate::ui::dashboard::view::PieSpec;
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use std::f64::consts::TAU;

const SLICE_SYMBOL: &str = "█";
const SWATCH: &str = "■ ";

/// Disc geometry in row units; columns are scaled by one half.
#[derive(Debug, Clone, Copy)]
struct Disc {
    cx: f64,
    cy: f64,
    radius: f64,
}

impl Disc {
    fn fit(area: Rect) -> Option<Self> {
        let radius = (area.height as f64 / 2.0).min(area.width as f64 / 4.0) - 0.5;
        if radius <= 0.0 {
            return None;
        }
        Some(Self {
            cx: area.x as f64 + area.width as f64 / 2.0,
            cy: area.y as f64 + area.height as f64 / 2.0,
            radius,
        })
    }

    /// Fraction of a clockwise turn from twelve o'clock at the center of
    /// cell `(x, y)`, or `None` outside the disc.
    fn turn_at(&self, x: u16, y: u16) -> Option<f64> {
        let dx = (x as f64 + 0.5 - self.cx) / 2.0;
        let dy = y as f64 + 0.5 - self.cy;
        if dx * dx + dy * dy > self.radius * self.radius {
            return None;
        }
        Some(dx.atan2(-dy).rem_euclid(TAU) / TAU)
    }
}

/// Disc-only widget.
pub struct PieChart<'a> {
    spec: &'a PieSpec,
}

impl<'a> PieChart<'a> {
    pub fn new(spec: &'a PieSpec) -> Self {
        Self { spec }
    }
}

impl Widget for PieChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let Some(disc) = Disc::fit(area) else {
            return;
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let slice = disc
                    .turn_at(x, y)
                    .and_then(|turn| self.spec.slice_at(turn))
                    .and_then(|i| self.spec.slices.get(i));
                if let (Some(slice), Some(cell)) = (slice, buf.cell_mut((x, y))) {
                    cell.set_symbol(SLICE_SYMBOL).set_fg(slice.color);
                }
            }
        }
    }
}

fn split(area: Rect) -> [Rect; 2] {
    Layout::horizontal([
        Constraint::Percentage(PIE_DISC_PERCENT),
        Constraint::Fill(1),
    ])
    .areas(area)
}

/// Render the disc and its labels into the chart area of a card.
pub fn render_pie(spec: &PieSpec, area: Rect, buf: &mut Buffer) {
    let [disc_area, label_area] = split(area);
    PieChart::new(spec).render(disc_area, buf);

    let lines: Vec<Line> = spec
        .labels()
        .into_iter()
        .zip(&spec.slices)
        .map(|(label, slice)| {
            Line::from(vec![
                Span::styled(SWATCH, Style::default().fg(slice.color)),
                Span::styled(label, Style::default().fg(theme::TEXT)),
            ])
        })
        .collect();

    let height = (lines.len() as u16).min(label_area.height);
    let top = label_area.y + (label_area.height - height) / 2;
    Paragraph::new(lines).render(
        Rect::new(label_area.x, top, label_area.width, height),
        buf,
    );
}

/// Index of the slice under `pos`, if any.
pub fn slice_at(spec: &PieSpec, area: Rect, pos: Position) -> Option<usize> {
    let [disc_area, _] = split(area);
    if !disc_area.contains(pos) {
        return None;
    }
    let turn = Disc::fit(disc_area)?.turn_at(pos.x, pos.y)?;
    spec.slice_at(turn)
}

pub fn tooltip(spec: &PieSpec, area: Rect, pos: Position) -> Option<Tooltip> {
    let slice = spec.slices.get(slice_at(spec, area, pos)?)?;
    Some(Tooltip {
        title: None,
        rows: vec![TooltipRow::new(
            slice.label,
            format_value(slice.value),
            slice.color,
        )],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::utils::buffer_to_lines;
    use crate::ui::dashboard::view::{self, PanelContent, PanelId};

    fn scenario() -> PieSpec {
        match view::render().panel(PanelId::Scenario).unwrap().content.clone() {
            PanelContent::Pie(spec) => spec,
            _ => unreachable!(),
        }
    }

    fn area() -> Rect {
        Rect::new(0, 0, 60, 16)
    }

    #[test]
    fn test_labels_rendered_beside_disc() {
        let spec = scenario();
        let mut buf = Buffer::empty(area());
        render_pie(&spec, area(), &mut buf);

        let text = buffer_to_lines(&buf).join("\n");
        for label in ["Relief 28%", "Tighten 55%", "StatusQuo 17%"] {
            assert!(text.contains(label), "missing {}", label);
        }
    }

    #[test]
    // Each slice paints roughly its share of the disc.
    fn test_slice_areas_follow_shares() {
        let spec = scenario();
        let mut buf = Buffer::empty(area());
        render_pie(&spec, area(), &mut buf);

        let counts: Vec<usize> = spec
            .slices
            .iter()
            .map(|slice| {
                buf.content()
                    .iter()
                    .filter(|cell| cell.symbol() == SLICE_SYMBOL && cell.fg == slice.color)
                    .count()
            })
            .collect();
        let total: usize = counts.iter().sum();
        assert!(total > 0);
        for (i, count) in counts.iter().enumerate() {
            let painted = *count as f64 / total as f64;
            assert!(
                (painted - spec.share(i)).abs() < 0.06,
                "slice {} painted {:.3} for share {:.3}",
                i,
                painted,
                spec.share(i)
            );
        }
    }

    #[test]
    fn test_slice_under_cursor() {
        let spec = scenario();
        let [disc_area, label_area] = split(area());
        let disc = Disc::fit(disc_area).unwrap();
        let cy = disc.cy as u16;
        let cx = disc.cx as u16;

        // Just right of twelve o'clock is the first slice (Relief).
        assert_eq!(slice_at(&spec, area(), Position::new(cx + 1, cy - 5)), Some(0));
        // Straight below the center is past the halfway turn: Tighten.
        assert_eq!(slice_at(&spec, area(), Position::new(cx, cy + 5)), Some(1));
        // Labels are not part of the disc.
        assert_eq!(
            slice_at(&spec, area(), Position::new(label_area.x + 1, cy)),
            None
        );
    }

    #[test]
    fn test_tooltip_names_slice_and_value() {
        let spec = scenario();
        let disc = Disc::fit(split(area())[0]).unwrap();
        let tip = tooltip(
            &spec,
            area(),
            Position::new(disc.cx as u16, disc.cy as u16 + 5),
        )
        .unwrap();
        assert_eq!(tip.rows[0].text(), "Tighten : 55");
        assert_eq!(tip.rows[0].color, theme::RED);
    }

    #[test]
    fn test_tiny_area_draws_nothing() {
        let spec = scenario();
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        PieChart::new(&spec).render(buf.area, &mut buf);
        assert!(buf.content().iter().all(|cell| cell.symbol() == " "));
    }
}
