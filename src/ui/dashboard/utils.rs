//! Dashboard utility functions
//!
//! Contains formatting and scaling helpers used across dashboard components

use ratatui::buffer::Buffer;

/// Label of a pie slice: name followed by its share of the total, rounded
/// to whole percent.
pub fn format_share_label(name: &str, share: f64) -> String {
    format!("{} {}%", name, (share * 100.0).round() as i64)
}

/// Axis tick label with a `%` suffix. Whole numbers drop the decimals.
pub fn format_axis_percent(value: f64) -> String {
    // Avoid printing "-0%" for ticks that land on zero.
    let value = if value.abs() < 1e-9 { 0.0 } else { value };
    if (value - value.round()).abs() < 1e-9 {
        format!("{}%", value.round() as i64)
    } else {
        format!("{:.1}%", value)
    }
}

/// Tooltip value: integers without decimals, everything else as given.
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{}", value)
    }
}

/// Evenly spaced value axis with "nice" step sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisScale {
    /// Fits `[min, max]`, always including zero, into `intervals` steps of
    /// 1, 2, 2.5 or 5 times a power of ten.
    pub fn fit(min: f64, max: f64, intervals: u32) -> Self {
        let lo = min.min(0.0);
        let hi = max.max(0.0);
        let intervals = intervals.max(1) as f64;
        if hi - lo <= f64::EPSILON {
            return Self {
                min: 0.0,
                max: 1.0,
                step: 1.0,
            };
        }

        let raw = (hi - lo) / intervals;
        let magnitude = 10f64.powf(raw.log10().floor());
        let normalized = raw / magnitude;
        let nice = if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 2.5 {
            2.5
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };
        let step = nice * magnitude;

        Self {
            min: (lo / step).floor() * step,
            max: (hi / step).ceil() * step,
            step,
        }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }

    pub fn bounds(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

/// Plain-text rows of a rendered buffer, trailing blanks trimmed.
pub fn buffer_to_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol()))
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_label_rounds_to_whole_percent() {
        assert_eq!(format_share_label("Relief", 0.28), "Relief 28%");
        assert_eq!(format_share_label("UAE", 1.0 / 3.0), "UAE 33%");
        assert_eq!(format_share_label("Bali", 0.125), "Bali 13%");
    }

    #[test]
    fn test_axis_percent() {
        assert_eq!(format_axis_percent(20.0), "20%");
        assert_eq!(format_axis_percent(-30.0), "-30%");
        assert_eq!(format_axis_percent(-0.0), "0%");
        assert_eq!(format_axis_percent(2.5), "2.5%");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(28.0), "28");
        assert_eq!(format_value(7.9), "7.9");
    }

    #[test]
    fn test_scale_for_positive_series() {
        let scale = AxisScale::fit(3.0, 72.0, 4);
        assert_eq!(scale.bounds(), [0.0, 80.0]);
        assert_eq!(scale.ticks(), vec![0.0, 20.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn test_scale_for_drawdowns_includes_zero() {
        let scale = AxisScale::fit(-30.0, -2.0, 4);
        assert_eq!(scale.bounds(), [-30.0, 0.0]);
        assert_eq!(scale.ticks(), vec![-30.0, -20.0, -10.0, 0.0]);
    }

    #[test]
    fn test_scale_for_small_deltas() {
        let scale = AxisScale::fit(1.2, 7.9, 4);
        assert_eq!(scale.bounds(), [0.0, 8.0]);
        assert_eq!(scale.step, 2.0);
    }

    #[test]
    fn test_scale_for_flat_zero_series() {
        let scale = AxisScale::fit(0.0, 0.0, 4);
        assert_eq!(scale.bounds(), [0.0, 1.0]);
    }
}
