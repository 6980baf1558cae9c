//! Main application state and UI loop
//!
//! Contains the App struct and the terminal event handling logic

use crate::config::Config;
use crate::consts::ui_consts::FOOTER_HEIGHT;
use crate::ui::animation::{Clock, SystemClock};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};
use log::{debug, info};
use ratatui::layout::{Position, Size};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

/// Application state
pub struct App {
    /// Dashboard shown for the whole session.
    state: DashboardState,
    /// Time source for animations.
    clock: Box<dyn Clock>,
    /// How long to wait for input before redrawing.
    tick_rate: Duration,
}

impl App {
    /// Creates a new instance of the application, mounting the dashboard.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &Config, clock: Box<dyn Clock>) -> Self {
        Self {
            state: DashboardState::new(config, clock.as_ref()),
            clock,
            tick_rate: config.tick_rate(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Applies one terminal event. Returns `true` when the user asked to quit.
    ///
    /// `body` is the size of the scrolling area, footer excluded.
    pub fn handle_event(&mut self, event: Event, body: Size) -> bool {
        match event {
            Event::Key(key) => {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    return false;
                }
                let page = i32::from(body.height.max(1));
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return true,
                    KeyCode::Up | KeyCode::Char('k') => self.state.scroll_by(-1, body),
                    KeyCode::Down | KeyCode::Char('j') => self.state.scroll_by(1, body),
                    KeyCode::PageUp => self.state.scroll_by(-page, body),
                    KeyCode::PageDown | KeyCode::Char(' ') => self.state.scroll_by(page, body),
                    KeyCode::Home => self.state.scroll_to(0, body),
                    KeyCode::End => self.state.scroll_to(u16::MAX, body),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    self.state
                        .set_hover(Some(Position::new(mouse.column, mouse.row)));
                }
                MouseEventKind::ScrollUp => self.state.scroll_by(-WHEEL_STEP, body),
                MouseEventKind::ScrollDown => self.state.scroll_by(WHEEL_STEP, body),
                _ => {}
            },
            Event::FocusLost => self.state.set_hover(None),
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
                // Keep the offset valid for the new page height.
                self.state.scroll_by(0, body);
            }
            _ => {}
        }
        false
    }
}

/// Scrolling area of a terminal of `size`.
fn body_size(size: Size) -> Size {
    Size::new(size.width, size.height.saturating_sub(FOOTER_HEIGHT))
}

/// Runs the dashboard in a loop until the user quits, redrawing every tick.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    info!("Dashboard mounted");

    loop {
        app.state.update(app.clock.as_ref());
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        if event::poll(app.tick_rate)? {
            let event = event::read()?;
            let body = body_size(terminal.size()?);
            if app.handle_event(event, body) {
                info!("Quit requested after {} frames", app.state.tick);
                return Ok(());
            }
        }
    }
}
