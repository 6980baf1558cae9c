//! Headless mode execution
//!
//! Renders the dashboard once into memory and prints it as plain text.

use crate::config::Config;
use crate::consts::ui_consts::MIN_RENDER_WIDTH;
use crate::error::DashboardError;
use crate::ui::dashboard::utils::buffer_to_lines;
use crate::ui::dashboard::{render, render_snapshot};
use log::{debug, info};
use std::io::{self, Write};

/// Plain-text rendering of the dashboard at the given size.
///
/// # Errors
/// Returns [`DashboardError::InvalidConfig`] when the width is below
/// [`MIN_RENDER_WIDTH`] or the height is zero.
pub fn snapshot_text(
    config: &Config,
    width: u16,
    height: Option<u16>,
) -> Result<String, DashboardError> {
    if width < MIN_RENDER_WIDTH {
        return Err(DashboardError::InvalidConfig(format!(
            "snapshot width must be at least {} columns, got {}",
            MIN_RENDER_WIDTH, width
        )));
    }
    if height == Some(0) {
        return Err(DashboardError::InvalidConfig(
            "snapshot height must be positive".to_string(),
        ));
    }

    let buffer = render_snapshot(&render(), config, width, height);
    debug!(
        "Rendered snapshot of {}x{}",
        buffer.area.width, buffer.area.height
    );
    Ok(buffer_to_lines(&buffer).join("\n"))
}

/// Runs the application in headless mode
///
/// # Returns
/// * `Ok(())` - Snapshot written to stdout
/// * `Err` - Invalid size or stdout unavailable
pub fn run_headless_mode(
    config: &Config,
    width: u16,
    height: Option<u16>,
) -> Result<(), DashboardError> {
    info!("Starting headless snapshot at width {}", width);
    let text = snapshot_text(config, width, height)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_text_lists_panels() {
        let text = snapshot_text(&Config::default(), 160, None).unwrap();
        assert!(text.contains("Risk Wall"));
        assert!(text.contains("Relief 28%"));
        assert!(text.contains("Moscow"));
    }

    #[test]
    fn test_snapshot_respects_height() {
        let text = snapshot_text(&Config::default(), 100, Some(12)).unwrap();
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn test_rejects_tiny_sizes() {
        assert!(matches!(
            snapshot_text(&Config::default(), 10, None),
            Err(DashboardError::InvalidConfig(_))
        ));
        assert!(snapshot_text(&Config::default(), 100, Some(0)).is_err());
    }
}
