//! TUI mode execution

use super::messages::{print_session_exit_success, print_session_starting};
use crate::config::Config;
use crate::error::DashboardError;
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Runs the dashboard full-screen until the user quits
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
///
/// The terminal is restored before any error from the UI loop is returned.
///
/// # Arguments
/// * `config` - Resolved configuration
/// * `with_background` - Whether to enable background colors
pub fn run_tui_mode(config: &Config, with_background: bool) -> Result<(), DashboardError> {
    let (width, height) = crossterm::terminal::size()?;
    print_session_starting("TUI", width, height);

    let config = Config {
        with_background_color: config.with_background_color && with_background,
        ..config.clone()
    };

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(&config);
    let result = ui::run(&mut terminal, app);

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle the result
    result?;
    info!("Terminal restored");

    print_session_exit_success();
    Ok(())
}
