//! Dashboard theme
//!
//! One dark palette shared by every panel, plus the card and tooltip styles.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Builds an RGB color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

// Surfaces
pub const PAGE_BG: Color = rgb(0x000000);
pub const CARD_BG: Color = rgb(0x111827);
pub const CARD_EDGE: Color = rgb(0x1F2937);
pub const OUTLINED_BG: Color = rgb(0x0B0F14);
pub const OUTLINE: Color = rgb(0x2A2F36);
pub const METRIC_CELL_BG: Color = rgb(0x1A1F27);
pub const SHADOW: Color = rgb(0x05070A);

// Text
pub const TEXT: Color = rgb(0xF3F4F6);
pub const TITLE: Color = rgb(0xFFFFFF);
pub const CAPTION: Color = rgb(0x9CA3AF);
pub const NEUTRAL: Color = rgb(0xE5E7EB);
pub const GRID: Color = rgb(0x2A2F36);

// Series and entity colors
pub const BLUE: Color = rgb(0x0072CE);
pub const GREEN: Color = rgb(0x00A65A);
pub const RED: Color = rgb(0xD32F2F);
pub const GREY: Color = rgb(0x6B7280);
pub const AMBER: Color = rgb(0xF59E0B);

// Risk Wall value tones
pub const WARNING: Color = rgb(0xFF3B30);
pub const POSITIVE: Color = GREEN;
pub const HIGHLIGHT: Color = rgb(0x00FF88);

/// Slice colors of the scenario pie, applied by position.
pub const SCENARIO_PALETTE: [Color; 3] = [GREEN, RED, GREY];

/// Slice colors of the geo exposure pie, applied by position.
pub const GEO_PALETTE: [Color; 5] = [BLUE, GREEN, RED, GREY, AMBER];

/// Picks a palette color by position, wrapping around.
pub fn palette_color(palette: &[Color], index: usize) -> Color {
    palette[index % palette.len()]
}

/// Style shared by every hover tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipStyle {
    pub background: Color,
    pub border: Color,
    pub text: Color,
}

pub const TOOLTIP: TooltipStyle = TooltipStyle {
    background: CARD_BG,
    border: OUTLINE,
    text: TEXT,
};

impl TooltipStyle {
    pub fn body(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn border_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.border)
    }
}

/// Visual treatment of a panel card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum CardStyle {
    /// Filled card with a drop shadow, used for charts.
    Elevated,
    /// Darker card with a visible outline, used for summaries.
    Outlined,
}

impl CardStyle {
    pub fn background(&self) -> Color {
        match self {
            CardStyle::Elevated => CARD_BG,
            CardStyle::Outlined => OUTLINED_BG,
        }
    }

    pub fn border_style(&self) -> Style {
        match self {
            CardStyle::Elevated => Style::default().fg(CARD_EDGE).bg(CARD_BG),
            CardStyle::Outlined => Style::default()
                .fg(OUTLINE)
                .bg(OUTLINED_BG)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn border_type(&self) -> BorderType {
        BorderType::Rounded
    }

    pub fn has_shadow(&self) -> bool {
        matches!(self, CardStyle::Elevated)
    }
}

pub fn title_style() -> Style {
    Style::default().fg(TITLE).add_modifier(Modifier::BOLD)
}

pub fn caption_style() -> Style {
    Style::default().fg(CAPTION)
}

pub fn axis_style() -> Style {
    Style::default().fg(TEXT)
}

/// Linearly blends `to` over `from` with the given opacity in `[0, 1]`.
///
/// Only RGB colors are blended; named colors are returned unchanged once
/// the opacity is positive, and replaced by `from` while fully transparent.
pub fn blend(from: Color, to: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * opacity).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if opacity == 0.0 => from,
        _ => to,
    }
}
