//! Tool log listing and single-log retrieval.
//!
//! Shape rules for the listing endpoint:
//! - non-empty array: one panel item per entry, read leniently
//! - anything else: "No tool logs found." (info)

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::errors::ToolsResult;
use crate::domain::models::{
    ActionOutcome, ApiRequest, Document, LogReference, Panel, PanelAction, PanelItem,
};
use crate::domain::ports::TextPrompt;
use crate::services::action_context::{ActionContext, Preflight};

/// Listing and retrieval share one endpoint; `logfile` selects a single log.
pub const TOOLS_LOG_PATH: &str = "/toolsapi/toolservice/toolslog";
pub const LOG_FILE_PARAM: &str = "logfile";

pub const NO_LOGS_MESSAGE: &str = "No tool logs found.";
const PANEL_TITLE: &str = "Available Tool Logs";

/// List available tool logs as a panel whose items open each log.
pub async fn list_logs(ctx: &ActionContext<'_>) -> ToolsResult<ActionOutcome> {
    let credentials = match ctx.begin().await? {
        Preflight::Proceed(credentials) => credentials,
        Preflight::Aborted(outcome) => return Ok(outcome),
    };

    let response = ctx.call(&credentials, &ApiRequest::get(TOOLS_LOG_PATH)).await?;
    let entries = match response.as_json() {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => {
            debug!(?response, "tool log listing has no entries");
            return Ok(ActionOutcome::new().info(NO_LOGS_MESSAGE));
        }
    };

    let references: Vec<LogReference> = entries.iter().map(LogReference::from_value).collect();
    info!(count = references.len(), "tool logs listed");
    Ok(ActionOutcome::new().with_panel(log_panel(&references)))
}

/// Panel view of a log listing. Entries without a name are shown but not openable.
pub fn log_panel(references: &[LogReference]) -> Panel {
    let items = references
        .iter()
        .map(|reference| PanelItem {
            label: reference.display_name().to_string(),
            details: vec![
                ("Size".to_string(), reference.size_label()),
                ("Time".to_string(), reference.timestamp_label()),
            ],
            action: reference.openable_name().map(|name| PanelAction::OpenLog {
                name: name.to_string(),
            }),
        })
        .collect();

    Panel {
        title: PANEL_TITLE.to_string(),
        items,
    }
}

/// Fetch one log's content into a document.
///
/// Only credentials are checked, not the environment confirmation, since
/// this usually follows a listing the operator already confirmed. Without
/// a name the operator is asked for one.
pub async fn open_log(ctx: &ActionContext<'_>, name: Option<String>) -> ToolsResult<ActionOutcome> {
    let credentials = ctx.require_credentials().await?;

    let name = match name.filter(|name| !name.trim().is_empty()) {
        Some(name) => name,
        None => {
            let prompt = TextPrompt::new("Enter the log file name")
                .with_placeholder("Example: ValidateCryptoKey20250824231306.log");
            match ctx.operator.prompt(&prompt)? {
                Some(name) if !name.trim().is_empty() => name.trim().to_string(),
                _ => return Ok(ActionOutcome::aborted()),
            }
        }
    };

    let request = ApiRequest::get(TOOLS_LOG_PATH).with_query(LOG_FILE_PARAM, name.as_str());
    let response = ctx.call(&credentials, &request).await?;

    if response.is_empty() {
        return Ok(ActionOutcome::new().info(format!("No content returned for log: {name}")));
    }

    info!(log = %name, "tool log retrieved");
    Ok(ActionOutcome::new().with_document(Document {
        title: name,
        language: "log".to_string(),
        content: response.display_text(),
    }))
}
