//! Domain errors for the MAS tools client.

use thiserror::Error;

use crate::domain::models::CredentialField;

/// Join missing credential labels as a human-readable list: `Maxinst URL, API Key`.
fn format_missing(fields: &[CredentialField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that terminate a single operator action.
///
/// None of these are retried. Unexpected response payloads are not errors:
/// handlers degrade to showing the raw payload instead.
#[derive(Debug, Error)]
pub enum ToolsError {
    #[error(
        "MAS Tools API configuration incomplete. Missing: {}. Please run `mastools setup`.",
        format_missing(.missing)
    )]
    ConfigurationMissing { missing: Vec<CredentialField> },

    #[error("Invalid endpoint: {0}. Must start with /toolsapi/ or /maximo/")]
    InvalidEndpoint(String),

    #[error("Invalid {field} '{value}'. Please run `mastools setup` to correct it.")]
    InvalidUrl { field: CredentialField, value: String },

    #[error("API request failed ({status}): {status_text}\nResponse: {body}")]
    RemoteFailure {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("API request failed: {0}")]
    Transport(String),

    #[error("Secret storage error: {0}")]
    SecretStore(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

pub type ToolsResult<T> = Result<T, ToolsError>;

impl ToolsError {
    /// HTTP status carried by a remote failure, if any.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteFailure { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ToolsError {
    fn from(err: std::io::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}
