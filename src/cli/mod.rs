//! Command-line interface
//!
//! - types: clap definitions
//! - commands: one module per command group
//! - display/output: rendering and spinners
//! - terminal: the terminal [`Operator`](crate::domain::ports::Operator)

pub mod commands;
pub mod display;
pub mod output;
pub mod terminal;
pub mod types;

pub use output::{create_spinner, output, CommandOutput};
pub use terminal::TerminalOperator;
pub use types::{Cli, Commands};

/// Print an error and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    tracing::debug!(error = ?err, "command failed");
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{}", display::action_failure(&format!("{err:#}")));
    }
    std::process::exit(1)
}
