//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod bar;
pub mod card;
pub mod footer;
pub mod line;
pub mod pie;
pub mod risk_wall;
pub mod tooltip;
