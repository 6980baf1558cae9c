//! Error types for the fallible edges of the dashboard
//!
//! Rendering itself cannot fail; only configuration, logging setup and
//! terminal I/O can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The config file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`crate::config::Config`].
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The config parsed but holds values the dashboard cannot use.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The log subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Terminal setup, drawing or teardown failed.
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}
