//! Bar chart component
//!
//! One vertical bar per entity, each in the entity's own color, on a fixed
//! 0-100 scale.

use super::tooltip::{Tooltip, TooltipRow};
use crate::consts::ui_consts::charts::{BAR_GAP, BAR_MAX};
use crate::ui::dashboard::view::BarSpec;
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Widget};

/// Width of each bar and the gap between bars for `count` bars in `area`.
fn bar_layout(area: Rect, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, BAR_GAP);
    }
    let count = count as u16;
    let gaps = BAR_GAP * (count - 1);
    let width = (area.width.saturating_sub(gaps) / count).max(1);
    (width, BAR_GAP)
}

pub fn render_bar(spec: &BarSpec, area: Rect, buf: &mut Buffer) {
    let (width, gap) = bar_layout(area, spec.bars.len());
    let bars: Vec<Bar> = spec
        .bars
        .iter()
        .map(|item| {
            Bar::default()
                .value(u64::from(item.value))
                .text_value(format!("{}%", item.value))
                .label(Line::from(item.label))
                .style(Style::default().fg(item.color))
                .value_style(Style::default().fg(theme::PAGE_BG).bg(item.color))
        })
        .collect();

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(gap)
        .max(BAR_MAX)
        .label_style(Style::default().fg(theme::TEXT))
        .render(area, buf);
}

/// Index of the bar whose column band contains `pos`.
pub fn bar_at(spec: &BarSpec, area: Rect, pos: Position) -> Option<usize> {
    if !area.contains(pos) {
        return None;
    }
    let (width, gap) = bar_layout(area, spec.bars.len());
    let offset = pos.x - area.x;
    let index = (offset / (width + gap)) as usize;
    (offset % (width + gap) < width && index < spec.bars.len()).then_some(index)
}

pub fn tooltip(spec: &BarSpec, area: Rect, pos: Position) -> Option<Tooltip> {
    let bar = spec.bars.get(bar_at(spec, area, pos)?)?;
    Some(Tooltip {
        title: Some(bar.label.to_string()),
        rows: vec![TooltipRow::new(
            spec.value_name,
            bar.value.to_string(),
            bar.color,
        )],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::utils::buffer_to_lines;
    use crate::ui::dashboard::view::{self, PanelContent, PanelId};

    fn spec() -> BarSpec {
        match view::render()
            .panel(PanelId::SecondarySanctions)
            .unwrap()
            .content
            .clone()
        {
            PanelContent::Bar(spec) => spec,
            _ => unreachable!(),
        }
    }

    fn area() -> Rect {
        Rect::new(0, 0, 70, 14)
    }

    #[test]
    fn test_layout_fills_width() {
        assert_eq!(bar_layout(area(), 5), (12, BAR_GAP));
        assert_eq!(bar_layout(Rect::new(0, 0, 6, 5), 5), (1, BAR_GAP));
    }

    #[test]
    fn test_bars_use_entity_colors() {
        let spec = spec();
        let mut buf = Buffer::empty(area());
        render_bar(&spec, area(), &mut buf);

        for bar in &spec.bars {
            assert!(
                buf.content().iter().any(|cell| cell.fg == bar.color),
                "{} bar not drawn in its color",
                bar.label
            );
        }
        let text = buffer_to_lines(&buf).join("\n");
        assert!(text.contains("Moscow"));
        assert!(text.contains("65%"));
    }

    #[test]
    fn test_bar_under_cursor() {
        let spec = spec();
        assert_eq!(bar_at(&spec, area(), Position::new(0, 5)), Some(0));
        assert_eq!(bar_at(&spec, area(), Position::new(12, 5)), None);
        assert_eq!(bar_at(&spec, area(), Position::new(14, 5)), Some(1));
        assert_eq!(bar_at(&spec, area(), Position::new(60, 5)), Some(4));
        assert_eq!(bar_at(&spec, area(), Position::new(69, 5)), None);
    }

    #[test]
    fn test_tooltip_reports_risk() {
        let tip = tooltip(&spec(), area(), Position::new(3, 2)).unwrap();
        assert_eq!(tip.title.as_deref(), Some("Moscow"));
        assert_eq!(tip.rows[0].text(), "risk : 65");
        assert_eq!(tip.rows[0].color, theme::BLUE);
    }
}
