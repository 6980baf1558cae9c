// Module declarations
pub mod animation;
mod app;
pub mod dashboard;
pub mod theme;
// Re-exports for external use
pub use app::{App, run};
