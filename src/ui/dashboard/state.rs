//! Dashboard state management
//!
//! Holds the renderable tree together with the per-frame presentation state:
//! scroll offset, cursor position and fade-in progress.

use super::layout::{Breakpoints, arrange};
use super::view::{self, DashboardView};
use crate::config::Config;
use crate::ui::animation::{Clock, FadeIn};
use log::debug;
use ratatui::layout::{Position, Size};

#[derive(Debug)]
pub struct DashboardState {
    /// Panels to draw, built once at mount.
    pub view: DashboardView,
    pub breakpoints: Breakpoints,
    /// Whether to paint the page background.
    pub with_background_color: bool,
    /// Last known mouse position in screen coordinates.
    pub hover: Option<Position>,
    /// Frame counter
    pub tick: usize,
    /// Opacity of fade-in panels for the current frame.
    pub opacity: f64,
    /// First content row shown at the top of the screen.
    pub scroll: u16,
    fade: FadeIn,
}

impl DashboardState {
    /// Mounts the dashboard: builds the tree and starts the fade-in.
    pub fn new(config: &Config, clock: &dyn Clock) -> Self {
        let fade = FadeIn::on_mount(clock.now(), config.fade_in());
        Self {
            view: view::render(),
            breakpoints: Breakpoints::from(config),
            with_background_color: config.with_background_color,
            hover: None,
            tick: 0,
            opacity: fade.opacity(clock.now()),
            scroll: 0,
            fade,
        }
    }

    /// Advances one frame.
    pub fn update(&mut self, clock: &dyn Clock) {
        self.tick = self.tick.wrapping_add(1);
        let now = clock.now();
        let was_fading = self.is_fading();
        self.opacity = self.fade.opacity(now);
        if was_fading && self.fade.is_complete(now) {
            debug!("Fade-in complete after {} frames", self.tick);
        }
    }

    pub fn is_fading(&self) -> bool {
        self.opacity < 1.0
    }

    /// Page height at the given terminal width.
    pub fn content_height(&self, width: u16) -> u16 {
        arrange(&self.view.panels, width, self.breakpoints).content_height
    }

    /// Largest scroll offset that still fills a body of `size`.
    pub fn max_scroll(&self, size: Size) -> u16 {
        self.content_height(size.width).saturating_sub(size.height)
    }

    pub fn scroll_by(&mut self, delta: i32, size: Size) {
        let target = (self.scroll as i32 + delta).max(0);
        self.scroll_to(u16::try_from(target).unwrap_or(u16::MAX), size);
    }

    pub fn scroll_to(&mut self, row: u16, size: Size) {
        self.scroll = row.min(self.max_scroll(size));
    }

    pub fn set_hover(&mut self, position: Option<Position>) {
        self.hover = position;
    }
}
