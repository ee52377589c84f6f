//! Shared rendering of response payloads into view models.

use crate::domain::models::{ActionOutcome, ApiResponse, Document};

/// Read-only document holding a response body.
pub fn document(title: impl Into<String>, language: &str, response: &ApiResponse) -> Document {
    Document {
        title: title.into(),
        language: language.to_string(),
        content: response.display_text(),
    }
}

/// Degrade an unexpected payload to a raw view plus a warning.
pub fn unexpected(title: &str, response: &ApiResponse, warning: impl Into<String>) -> ActionOutcome {
    let language = if response.as_json().is_some() { "json" } else { "log" };
    ActionOutcome::new()
        .with_document(document(title, language, response))
        .warning(warning)
}
