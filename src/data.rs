//! Embedded risk datasets
//!
//! Every figure shown on the dashboard is a precomputed literal. Nothing here
//! is fetched, derived or mutated; the renderer reads these slices as-is.

use crate::ui::theme;
use ratatui::style::Color;

/// One slice of the 1Y regime scenario distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioSlice {
    pub label: &'static str,
    /// Probability in percent.
    pub probability: f64,
}

/// Regime probabilities at one forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePoint {
    pub horizon: &'static str,
    pub relief: f64,
    pub tighten: f64,
}

impl TimelinePoint {
    pub const SERIES: [&'static str; 2] = ["Relief", "Tighten"];
}

/// Relative weight of one location in the geographic exposure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoExposure {
    pub location: &'static str,
    pub weight: f64,
}

/// Sanction escalation level, ordered from mildest to harshest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// Expected drawdowns per asset class at one sanction intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SanctionImpact {
    pub level: Intensity,
    pub equities: f64,
    pub real_estate: f64,
}

impl SanctionImpact {
    pub const SERIES: [&'static str; 2] = ["Equities", "RealEstate"];
}

/// Month-over-month change in Tighten probability, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeShift {
    pub month: &'static str,
    pub change: f64,
}

impl RegimeShift {
    pub const SERIES: &'static str = "change";
}

/// 1Y probability of secondary sanctions for one jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondarySanctionsRisk {
    pub entity: &'static str,
    /// Probability in percent, within `[0, 100]`.
    pub probability: u8,
    pub color: Color,
}

/// One entry of the Risk Wall summary strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskWallMetric {
    pub name: &'static str,
    pub value: &'static str,
    pub color: Color,
}

#[rustfmt::skip]
pub const SCENARIOS: [ScenarioSlice; 3] = [
    ScenarioSlice { label: "Relief", probability: 28.0 },
    ScenarioSlice { label: "Tighten", probability: 55.0 },
    ScenarioSlice { label: "StatusQuo", probability: 17.0 },
];

#[rustfmt::skip]
pub const TIMELINE: [TimelinePoint; 7] = [
    TimelinePoint { horizon: "1m", relief: 3.0, tighten: 11.0 },
    TimelinePoint { horizon: "3m", relief: 7.0, tighten: 24.0 },
    TimelinePoint { horizon: "6m", relief: 14.0, tighten: 38.0 },
    TimelinePoint { horizon: "1y", relief: 28.0, tighten: 55.0 },
    TimelinePoint { horizon: "3y", relief: 46.0, tighten: 41.0 },
    TimelinePoint { horizon: "5y", relief: 58.0, tighten: 31.0 },
    TimelinePoint { horizon: "10y", relief: 72.0, tighten: 18.0 },
];

#[rustfmt::skip]
pub const GEO_EXPOSURE: [GeoExposure; 5] = [
    GeoExposure { location: "Moscow", weight: 25.0 },
    GeoExposure { location: "Ekaterinburg", weight: 45.0 },
    GeoExposure { location: "UAE", weight: 10.0 },
    GeoExposure { location: "Thailand", weight: 10.0 },
    GeoExposure { location: "Bali", weight: 10.0 },
];

#[rustfmt::skip]
pub const SANCTION_IMPACT: [SanctionImpact; 3] = [
    SanctionImpact { level: Intensity::Low, equities: -5.0, real_estate: -2.0 },
    SanctionImpact { level: Intensity::Medium, equities: -15.0, real_estate: -8.0 },
    SanctionImpact { level: Intensity::High, equities: -30.0, real_estate: -18.0 },
];

#[rustfmt::skip]
pub const REGIME_SHIFT: [RegimeShift; 12] = [
    RegimeShift { month: "Jan", change: 1.2 },
    RegimeShift { month: "Feb", change: 2.1 },
    RegimeShift { month: "Mar", change: 3.4 },
    RegimeShift { month: "Apr", change: 4.8 },
    RegimeShift { month: "May", change: 5.2 },
    RegimeShift { month: "Jun", change: 5.8 },
    RegimeShift { month: "Jul", change: 6.1 },
    RegimeShift { month: "Aug", change: 6.4 },
    RegimeShift { month: "Sep", change: 6.8 },
    RegimeShift { month: "Oct", change: 7.1 },
    RegimeShift { month: "Nov", change: 7.5 },
    RegimeShift { month: "Dec", change: 7.9 },
];

#[rustfmt::skip]
pub const SECONDARY_SANCTIONS: [SecondarySanctionsRisk; 5] = [
    SecondarySanctionsRisk { entity: "Moscow", probability: 65, color: theme::BLUE },
    SecondarySanctionsRisk { entity: "Ekaterinburg", probability: 60, color: theme::GREEN },
    SecondarySanctionsRisk { entity: "Bali", probability: 15, color: theme::AMBER },
    SecondarySanctionsRisk { entity: "Thailand", probability: 25, color: theme::GREY },
    SecondarySanctionsRisk { entity: "UAE", probability: 30, color: theme::RED },
];

#[rustfmt::skip]
pub const RISK_WALL: [RiskWallMetric; 7] = [
    RiskWallMetric { name: "Base Regime", value: "Tighten", color: theme::HIGHLIGHT },
    RiskWallMetric { name: "P(Tighten 1Y)", value: "55%", color: theme::WARNING },
    RiskWallMetric { name: "P(Relief 1Y)", value: "28%", color: theme::POSITIVE },
    RiskWallMetric { name: "VaR 95%", value: "-19%", color: theme::WARNING },
    RiskWallMetric { name: "CVaR 95%", value: "-27%", color: theme::WARNING },
    RiskWallMetric { name: "Max Drawdown", value: "-34%", color: theme::WARNING },
    RiskWallMetric { name: "Expected Time to Relief", value: "4.6Y", color: theme::NEUTRAL },
];

/// Read-only view over every dataset the dashboard shows.
#[derive(Debug, Clone, Copy)]
pub struct RiskData {
    pub scenarios: &'static [ScenarioSlice],
    pub timeline: &'static [TimelinePoint],
    pub geo_exposure: &'static [GeoExposure],
    pub sanction_impact: &'static [SanctionImpact],
    pub regime_shift: &'static [RegimeShift],
    pub secondary_sanctions: &'static [SecondarySanctionsRisk],
    pub risk_wall: &'static [RiskWallMetric],
}

impl RiskData {
    /// The fixed illustrative datasets compiled into the binary.
    pub const fn embedded() -> Self {
        Self {
            scenarios: &SCENARIOS,
            timeline: &TIMELINE,
            geo_exposure: &GEO_EXPOSURE,
            sanction_impact: &SANCTION_IMPACT,
            regime_shift: &REGIME_SHIFT,
            secondary_sanctions: &SECONDARY_SANCTIONS,
            risk_wall: &RISK_WALL,
        }
    }

    /// Looks up a Risk Wall metric by its display name.
    #[cfg(test)]
    pub fn metric(&self, name: &str) -> Option<&'static RiskWallMetric> {
        self.risk_wall.iter().find(|metric| metric.name == name)
    }
}
