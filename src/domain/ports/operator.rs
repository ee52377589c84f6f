use crate::domain::errors::ToolsResult;
use crate::domain::models::EnvironmentSummary;

/// Answer to the "continue with this environment?" dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentChoice {
    Continue,
    /// Re-run setup and abort the current action.
    Change,
    /// Dialog closed without a choice; abort.
    Dismiss,
}

/// A single-line input request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt {
    pub message: String,
    pub placeholder: Option<String>,
    /// Hide the typed value.
    pub secret: bool,
}

impl TextPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            placeholder: None,
            secret: false,
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// Interactive surface the handlers talk to.
///
/// Rendering of results is not part of this port: handlers return
/// [`ActionOutcome`](crate::domain::models::ActionOutcome) values instead.
pub trait Operator: Send + Sync {
    /// Show the configured endpoints and ask whether to proceed.
    fn confirm_environment(&self, environment: &EnvironmentSummary)
        -> ToolsResult<EnvironmentChoice>;

    /// Ask for a line of input. `Ok(None)` means the operator cancelled.
    fn prompt(&self, prompt: &TextPrompt) -> ToolsResult<Option<String>>;

    /// Tell the operator the last input was rejected, before re-prompting.
    fn reject_input(&self, message: &str);
}
