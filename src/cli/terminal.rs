//! Terminal implementation of the [`Operator`] port.
//!
//! Prompts and confirmations go to stderr so stdout stays reserved for
//! command output (and clean JSON under `--json`). A spinner attached with
//! [`TerminalOperator::attach_progress`] is suspended while the operator
//! is being asked something.

use std::sync::{Mutex, PoisonError};

use console::{style, Term};
use indicatif::ProgressBar;

use crate::cli::display::{hint, label, render_panel};
use crate::domain::errors::{ToolsError, ToolsResult};
use crate::domain::models::{EnvironmentSummary, Panel};
use crate::domain::ports::{EnvironmentChoice, Operator, TextPrompt};

pub struct TerminalOperator {
    term: Term,
    progress: Mutex<Option<ProgressBar>>,
}

impl Default for TerminalOperator {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOperator {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            progress: Mutex::new(None),
        }
    }

    /// Spinner to hide while prompting.
    pub fn attach_progress(&self, spinner: ProgressBar) {
        *self.progress.lock().unwrap_or_else(PoisonError::into_inner) = Some(spinner);
    }

    pub fn detach_progress(&self) -> Option<ProgressBar> {
        self.progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn interact<T>(&self, f: impl FnOnce(&Term) -> T) -> T {
        let progress = self
            .progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match progress {
            Some(spinner) => spinner.suspend(|| f(&self.term)),
            None => f(&self.term),
        }
    }

    /// Ask which openable panel item to open next. `None` ends the session.
    pub fn pick_item(&self, panel: &Panel) -> ToolsResult<Option<usize>> {
        if !panel.has_actions() {
            return Ok(None);
        }
        let prompt = format!(
            "Open which item? {} ",
            hint(&format!("[1-{}, Enter to finish]", panel.items.len()))
        );
        loop {
            let answer = self.interact(|term| -> std::io::Result<String> {
                term.write_str(&prompt)?;
                term.read_line()
            })?;
            match parse_selection(&answer, panel) {
                Selection::Done => return Ok(None),
                Selection::Item(index) => return Ok(Some(index)),
                Selection::Invalid => {
                    self.reject_input("Choose the number of an item that can be opened");
                }
            }
        }
    }

    /// Re-show a panel before asking again.
    pub fn show_panel(&self, panel: &Panel) -> ToolsResult<()> {
        self.interact(|term| term.write_line(&render_panel(panel)))?;
        Ok(())
    }
}

impl Operator for TerminalOperator {
    fn confirm_environment(
        &self,
        environment: &EnvironmentSummary,
    ) -> ToolsResult<EnvironmentChoice> {
        let answer = self.interact(|term| -> std::io::Result<String> {
            term.write_line(&format!(
                "You are connected to:\n  {} {}\n  {} {}",
                label("Maxinst URL"),
                environment.tools_url,
                label("Manage URL"),
                environment.manage_url
            ))?;
            term.write_str(&format!(
                "Continue? {} ",
                hint("[c]ontinue / c[h]ange environment / [q]uit")
            ))?;
            term.read_line()
        })?;
        Ok(parse_environment_choice(&answer))
    }

    fn prompt(&self, prompt: &TextPrompt) -> ToolsResult<Option<String>> {
        let line = self.interact(|term| -> std::io::Result<String> {
            match &prompt.placeholder {
                Some(placeholder) => {
                    term.write_str(&format!("{} {}: ", prompt.message, hint(placeholder)))?
                }
                None => term.write_str(&format!("{}: ", prompt.message))?,
            }
            if prompt.secret {
                term.read_secure_line()
            } else {
                term.read_line()
            }
        });

        match line {
            Ok(line) if line.trim().is_empty() => Ok(None),
            Ok(line) => Ok(Some(line)),
            Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
            Err(err) => Err(ToolsError::Prompt(err.to_string())),
        }
    }

    fn reject_input(&self, message: &str) {
        let written = self.interact(|term| term.write_line(&format!("{}", style(message).red())));
        log_write_failure(written, "input rejection");
    }
}

/// Log a terminal write that could not be completed. Returns whether it was.
fn log_write_failure(result: std::io::Result<()>, what: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, what, "terminal write failed");
            false
        }
    }
}

/// Read the environment dialog answer. Anything unrecognized dismisses.
pub fn parse_environment_choice(answer: &str) -> EnvironmentChoice {
    match answer.trim().to_lowercase().as_str() {
        "c" | "continue" | "y" | "yes" => EnvironmentChoice::Continue,
        "h" | "change" | "change environment" => EnvironmentChoice::Change,
        _ => EnvironmentChoice::Dismiss,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Done,
    Item(usize),
    Invalid,
}

/// Read a 1-based item number against the panel's openable items.
pub fn parse_selection(answer: &str, panel: &Panel) -> Selection {
    let answer = answer.trim();
    if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
        return Selection::Done;
    }
    match answer.parse::<usize>() {
        Ok(number) if number >= 1 && panel.action_at(number - 1).is_some() => {
            Selection::Item(number - 1)
        }
        _ => Selection::Invalid,
    }
}
