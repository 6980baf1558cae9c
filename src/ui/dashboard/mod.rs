//! Modular dashboard implementation
//!
//! Split into the renderable tree, the responsive layout, presentation state
//! and the ratatui drawing code.

pub mod components;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod utils;
pub mod view;

// Re-export main types and functions for external use
pub use renderer::{render_dashboard, render_snapshot};
pub use state::DashboardState;
pub use view::render;
