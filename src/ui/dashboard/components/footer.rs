//! Dashboard footer component
//!
//! Renders key hints and the active viewport class.

use crate::ui::dashboard::layout::Viewport;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn footer_text(viewport: Viewport) -> String {
    format!("[Q] Quit | [↑↓] Scroll | Risk Wall | {} layout", viewport)
}

/// Render footer.
pub fn render_footer(f: &mut Frame, area: Rect, viewport: Viewport) {
    let footer = Paragraph::new(footer_text(viewport))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme::CAPTION)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(theme::CARD_EDGE)),
        );
    f.render_widget(footer, area);
}
