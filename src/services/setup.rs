//! Credential setup, inspection, and reset.

use reqwest::Url;
use tracing::{debug, info};

use crate::domain::errors::ToolsResult;
use crate::domain::models::{ActionOutcome, CredentialField, CredentialSet, CredentialStatus};
use crate::domain::ports::{Operator, TextPrompt};
use crate::infrastructure::credentials::CredentialStore;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";
pub const SAVED_MESSAGE: &str = "MAS Tools API configuration saved";
pub const CLEARED_MESSAGE: &str = "MAS Tools API configuration cleared";
pub const CANCELLED_MESSAGE: &str = "Setup cancelled; nothing was saved.";

/// Prompt for both URLs and the API key, then store all three.
///
/// Cancelling any prompt aborts without writing anything.
pub async fn run_wizard(
    store: &CredentialStore,
    operator: &dyn Operator,
) -> ToolsResult<ActionOutcome> {
    let Some(tools_url) = ask(operator, CredentialField::ToolsUrl)? else {
        return Ok(cancelled());
    };
    let Some(manage_url) = ask(operator, CredentialField::ManageUrl)? else {
        return Ok(cancelled());
    };
    let Some(api_key) = ask(operator, CredentialField::ApiKey)? else {
        return Ok(cancelled());
    };

    let credentials = CredentialSet::new(tools_url, manage_url, api_key);
    store.set(&credentials).await?;

    info!(
        tools_url = %credentials.tools_url,
        manage_url = %credentials.manage_url,
        "setup completed"
    );
    Ok(ActionOutcome::new().info(SAVED_MESSAGE))
}

fn cancelled() -> ActionOutcome {
    debug!("setup cancelled");
    ActionOutcome::aborted().info(CANCELLED_MESSAGE)
}

fn ask(operator: &dyn Operator, field: CredentialField) -> ToolsResult<Option<String>> {
    let prompt = prompt_for(field);
    loop {
        let Some(input) = operator.prompt(&prompt)? else {
            return Ok(None);
        };
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        if field.is_url() && !validate_url(input) {
            operator.reject_input(INVALID_URL_MESSAGE);
            continue;
        }
        return Ok(Some(input.to_string()));
    }
}

fn prompt_for(field: CredentialField) -> TextPrompt {
    let prompt = TextPrompt::new(format!("Enter {}", field.label()));
    match field {
        CredentialField::ToolsUrl => prompt.with_placeholder("https://your-maxinst-url.com"),
        CredentialField::ManageUrl => prompt.with_placeholder("https://your-manage-url.com"),
        CredentialField::ApiKey => prompt.secret(),
    }
}

/// Absolute `http` or `https` URL with a host.
pub fn validate_url(input: &str) -> bool {
    Url::parse(input)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

/// Configured endpoints, or which fields still need setting. Never shows the key.
pub async fn describe(store: &CredentialStore) -> ToolsResult<ActionOutcome> {
    match store.get().await? {
        CredentialStatus::Complete(credentials) => Ok(ActionOutcome::new()
            .info(format!("Maxinst URL: {}", credentials.tools_url))
            .info(format!("Manage URL: {}", credentials.manage_url))
            .info("API Key: configured")),
        CredentialStatus::Missing(missing) => {
            let labels: Vec<_> = missing.iter().map(|field| field.label()).collect();
            Ok(ActionOutcome::new().warning(format!(
                "MAS Tools API configuration incomplete. Missing: {}. Please run `mastools setup`.",
                labels.join(", ")
            )))
        }
    }
}

/// Delete every stored credential.
pub async fn reset(store: &CredentialStore) -> ToolsResult<ActionOutcome> {
    store.clear().await?;
    Ok(ActionOutcome::new().success(CLEARED_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://tools.example.com"));
        assert!(validate_url("http://10.0.0.1:9080/"));
        assert!(!validate_url("tools.example.com"));
        assert!(!validate_url("ftp://tools.example.com"));
        assert!(!validate_url("not a url"));
        assert!(!validate_url(""));
    }

    #[test]
    fn test_prompt_order_and_secrecy() {
        let prompts: Vec<_> = CredentialField::ALL.into_iter().map(prompt_for).collect();
        assert_eq!(prompts[0].message, "Enter Maxinst URL");
        assert_eq!(prompts[1].message, "Enter Manage URL");
        assert_eq!(prompts[2].message, "Enter API Key");
        assert!(prompts[2].secret);
        assert!(!prompts[0].secret);
    }
}
