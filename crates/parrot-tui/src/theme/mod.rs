//! Theme components for the TUI.
//!
//! - [`Theme`] - Color palette (light page, dark variant)

mod colors;

pub use colors::Theme;
