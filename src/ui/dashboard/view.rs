//! Renderable dashboard tree
//!
//! [`render`] maps every embedded dataset to one panel with a fixed chart
//! type. The result is plain data: the ratatui renderer draws it, tests
//! inspect it directly.

use super::utils::{AxisScale, format_share_label};
use crate::consts::ui_consts::charts::Y_TICK_INTERVALS;
use crate::data::{RegimeShift, RiskData, SanctionImpact, TimelinePoint};
use crate::ui::theme::{self, CardStyle};
use ratatui::style::Color;

/// Identifies a panel independently of its position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PanelId {
    Scenario,
    Timeline,
    GeoExposure,
    SanctionImpact,
    RiskWall,
    RegimeShift,
    SecondarySanctions,
}

/// How many grid columns a panel occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSpan {
    /// One grid slot.
    Half,
    /// The whole grid row, at every viewport size.
    Full,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub title: &'static str,
    pub caption: Option<&'static str>,
    pub span: PanelSpan,
    pub card: CardStyle,
    /// Fades in from transparent when the dashboard mounts.
    pub fade_in: bool,
    pub content: PanelContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Pie(PieSpec),
    Line(LineSpec),
    Bar(BarSpec),
    Metrics(MetricGrid),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    /// Fraction of the total taken by slice `index`, zero for an empty pie.
    pub fn share(&self, index: usize) -> f64 {
        let total = self.total();
        match self.slices.get(index) {
            Some(slice) if total > 0.0 => slice.value / total,
            _ => 0.0,
        }
    }

    /// Display labels such as `"Relief 28%"`, in slice order.
    pub fn labels(&self) -> Vec<String> {
        self.slices
            .iter()
            .enumerate()
            .map(|(i, slice)| format_share_label(slice.label, self.share(i)))
            .collect()
    }

    /// Slice covering the given fraction of a full turn, starting at twelve
    /// o'clock and running clockwise.
    pub fn slice_at(&self, turn: f64) -> Option<usize> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }
        let mut cumulative = 0.0;
        for (i, slice) in self.slices.iter().enumerate() {
            cumulative += slice.value / total;
            if turn < cumulative {
                return Some(i);
            }
        }
        // Rounding may leave the last sliver of the turn uncovered.
        self.slices.iter().rposition(|slice| slice.value > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: &'static str,
    pub color: Color,
    pub values: Vec<f64>,
    /// Draw a point marker at every value.
    pub markers: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub categories: Vec<String>,
    pub series: Vec<LineSeries>,
}

impl LineSpec {
    /// Plotted value of `series` at `category`.
    #[cfg(test)]
    pub fn value_at(&self, series: &str, category: &str) -> Option<f64> {
        let index = self.categories.iter().position(|c| c == category)?;
        self.series
            .iter()
            .find(|s| s.name == series)
            .and_then(|s| s.values.get(index).copied())
    }

    /// `(x, y)` points of one series, with categories at `x = 0, 1, 2, ...`.
    pub fn points(&self, series: usize) -> Vec<(f64, f64)> {
        self.series
            .get(series)
            .map(|s| {
                s.values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, *v))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn y_scale(&self) -> AxisScale {
        let values = self.series.iter().flat_map(|s| s.values.iter().copied());
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if min.is_finite() && max.is_finite() {
            AxisScale::fit(min, max, Y_TICK_INTERVALS)
        } else {
            AxisScale::fit(0.0, 0.0, Y_TICK_INTERVALS)
        }
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.categories.len().saturating_sub(1).max(1) as f64]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub label: &'static str,
    pub value: u8,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    /// Name shown for the value in tooltips.
    pub value_name: &'static str,
    pub bars: Vec<BarItem>,
}

#[cfg(test)]
impl BarSpec {
    pub fn color_of(&self, label: &str) -> Option<Color> {
        self.bars
            .iter()
            .find(|bar| bar.label == label)
            .map(|bar| bar.color)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCell {
    pub name: &'static str,
    pub value: &'static str,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricGrid {
    pub cells: Vec<MetricCell>,
}

#[cfg(test)]
impl MetricGrid {
    pub fn cell(&self, name: &str) -> Option<&MetricCell> {
        self.cells.iter().find(|cell| cell.name == name)
    }
}

/// The complete dashboard: panels in grid flow order.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub panels: Vec<Panel>,
}

#[cfg(test)]
impl DashboardView {
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id == id)
    }
}

/// Builds the dashboard tree from the embedded datasets.
pub fn render() -> DashboardView {
    compose(&RiskData::embedded())
}

/// Maps each dataset to its panel.
pub fn compose(data: &RiskData) -> DashboardView {
    let chart = |id: PanelId,
                 title: &'static str,
                 caption: Option<&'static str>,
                 content: PanelContent| Panel {
        id,
        title,
        caption,
        span: PanelSpan::Half,
        card: CardStyle::Elevated,
        fade_in: false,
        content,
    };

    let scenario = Panel {
        fade_in: true,
        ..chart(
            PanelId::Scenario,
            "Scenario Distribution (1Y)",
            None,
            PanelContent::Pie(PieSpec {
                slices: data
                    .scenarios
                    .iter()
                    .enumerate()
                    .map(|(i, s)| PieSlice {
                        label: s.label,
                        value: s.probability,
                        color: theme::palette_color(&theme::SCENARIO_PALETTE, i),
                    })
                    .collect(),
            }),
        )
    };

    let timeline = chart(
        PanelId::Timeline,
        "Probability Timeline",
        None,
        PanelContent::Line(LineSpec {
            categories: data.timeline.iter().map(|p| p.horizon.to_string()).collect(),
            series: vec![
                LineSeries {
                    name: TimelinePoint::SERIES[0],
                    color: theme::GREEN,
                    values: data.timeline.iter().map(|p| p.relief).collect(),
                    markers: true,
                },
                LineSeries {
                    name: TimelinePoint::SERIES[1],
                    color: theme::RED,
                    values: data.timeline.iter().map(|p| p.tighten).collect(),
                    markers: true,
                },
            ],
        }),
    );

    let geo = chart(
        PanelId::GeoExposure,
        "Geo Risk Exposure",
        None,
        PanelContent::Pie(PieSpec {
            slices: data
                .geo_exposure
                .iter()
                .enumerate()
                .map(|(i, g)| PieSlice {
                    label: g.location,
                    value: g.weight,
                    color: theme::palette_color(&theme::GEO_PALETTE, i),
                })
                .collect(),
        }),
    );

    let sanction_impact = chart(
        PanelId::SanctionImpact,
        "Asset Reaction Under Sanctions Escalation",
        Some(
            "X-axis = sanction intensity (Low / Medium / High). Y-axis = expected drawdown in percent. If escalation increases, equities fall more than real estate.",
        ),
        PanelContent::Line(LineSpec {
            categories: data
                .sanction_impact
                .iter()
                .map(|p| p.level.to_string())
                .collect(),
            series: vec![
                LineSeries {
                    name: SanctionImpact::SERIES[0],
                    color: theme::RED,
                    values: data.sanction_impact.iter().map(|p| p.equities).collect(),
                    markers: false,
                },
                LineSeries {
                    name: SanctionImpact::SERIES[1],
                    color: theme::GREEN,
                    values: data.sanction_impact.iter().map(|p| p.real_estate).collect(),
                    markers: false,
                },
            ],
        }),
    );

    let risk_wall = Panel {
        id: PanelId::RiskWall,
        title: "Risk Wall",
        caption: None,
        span: PanelSpan::Full,
        card: CardStyle::Outlined,
        fade_in: false,
        content: PanelContent::Metrics(MetricGrid {
            cells: data
                .risk_wall
                .iter()
                .map(|m| MetricCell {
                    name: m.name,
                    value: m.value,
                    color: m.color,
                })
                .collect(),
        }),
    };

    let regime_shift = chart(
        PanelId::RegimeShift,
        "Monthly Increase in Tighten Risk (percentage points)",
        Some("Shows how many percentage points Tighten probability increased each month."),
        PanelContent::Line(LineSpec {
            categories: data.regime_shift.iter().map(|p| p.month.to_string()).collect(),
            series: vec![LineSeries {
                name: RegimeShift::SERIES,
                color: theme::AMBER,
                values: data.regime_shift.iter().map(|p| p.change).collect(),
                markers: true,
            }],
        }),
    );

    let secondary = chart(
        PanelId::SecondarySanctions,
        "Secondary Sanctions Risk (1Y Probability %)",
        Some(
            "Probability of secondary sanctions impact by jurisdiction. Higher bar = higher exposure risk.",
        ),
        PanelContent::Bar(BarSpec {
            value_name: "risk",
            bars: data
                .secondary_sanctions
                .iter()
                .map(|s| BarItem {
                    label: s.entity,
                    value: s.probability,
                    color: s.color,
                })
                .collect(),
        }),
    );

    DashboardView {
        panels: vec![
            scenario,
            timeline,
            geo,
            sanction_impact,
            risk_wall,
            regime_shift,
            secondary,
        ],
    }
}
