//! Spinners for requests in flight.
//!
//! Each action sends a single request of unknown duration, so only
//! indeterminate spinners are offered. They draw to stderr and hide
//! themselves when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg} [{elapsed}]";
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

/// Create a spinner for indeterminate operations
///
/// # Example
/// ```
/// use mastools::cli::output::progress::create_spinner;
///
/// let spinner = create_spinner();
/// spinner.set_message("Fetching tool logs...");
/// // send the request
/// spinner.finish_and_clear();
/// ```
pub fn create_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
        spinner.set_style(style.tick_chars(SPINNER_CHARS));
    }
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Create a spinner with a custom message
pub fn create_spinner_with_message(message: impl Into<String>) -> ProgressBar {
    let spinner = create_spinner();
    spinner.set_message(message.into());
    spinner
}

/// A spinner that never draws, for `--json` runs and tests.
pub fn hidden_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_draw_target(ProgressDrawTarget::hidden());
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_with_message() {
        let spinner = create_spinner_with_message("Uploading logs...");
        assert_eq!(spinner.message(), "Uploading logs...");
        spinner.finish_and_clear();
        assert!(spinner.is_finished());
    }

    #[test]
    fn test_hidden_spinner() {
        let spinner = hidden_spinner();
        assert!(spinner.is_hidden());
        spinner.finish_with_message("done");
        assert!(spinner.is_finished());
    }
}
