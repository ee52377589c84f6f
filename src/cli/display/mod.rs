//! Display framework for CLI output formatting.
//!
//! Shared primitives for colors and tables, plus the rendering of
//! [`ActionOutcome`](crate::domain::models::ActionOutcome) values.

pub mod colors;
pub mod table;
pub mod view;

pub use colors::*;
pub use table::*;
pub use view::{render_document, render_panel};

use console::style;

/// Render a failure action result.
pub fn action_failure(message: &str) -> String {
    format!("{} {}", style("\u{2717}").red().bold(), message)
}
