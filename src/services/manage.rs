//! Manage-side actions: log upload, log streaming, pod stop and start.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::errors::ToolsResult;
use crate::domain::models::{ActionOutcome, ActionValue, ApiRequest, ApiResponse};
use crate::services::action_context::{ActionContext, Preflight};
use crate::services::payload;

pub const LOGGING_PATH: &str = "/maximo/api/service/logging";
pub const MANAGE_STOP_PATH: &str = "/toolsapi/toolservice/managestop";
pub const MANAGE_START_PATH: &str = "/toolsapi/toolservice/managestart";

pub const UPLOAD_ACTION: &str = "wsmethod:submitUploadLogRequest";
pub const STREAM_ACTION: &str = "wsmethod:streamLog";

/// Ask the manage server to upload its logs.
///
/// A `{"return": "<code>"}` response (as JSON, or as text holding that
/// JSON) yields the completion code as the action's value. Anything else
/// is shown raw and the value is a generated fallback file name.
pub async fn upload_logs(ctx: &ActionContext<'_>) -> ToolsResult<ActionOutcome> {
    let credentials = match ctx.begin().await? {
        Preflight::Proceed(credentials) => credentials,
        Preflight::Aborted(outcome) => return Ok(outcome),
    };

    let request = ApiRequest::post(LOGGING_PATH).with_query("action", UPLOAD_ACTION);
    let response = ctx.call(&credentials, &request).await?;

    if let Some(code) = completion_code(&response) {
        info!(code = %code, "log upload submitted");
        return Ok(ActionOutcome::new()
            .success(format!("Upload complete. Log file code: {code}"))
            .with_value(ActionValue::Text(code)));
    }

    let fallback = fallback_upload_name(Utc::now());
    warn!(fallback = %fallback, "log upload returned no completion code");
    Ok(payload::unexpected(
        "Upload Response",
        &response,
        format!("Upload completed but response was unexpected. Saved fallback name: {fallback}"),
    )
    .with_value(ActionValue::Text(fallback)))
}

/// Completion code from an upload response, if the payload carries one.
pub fn completion_code(response: &ApiResponse) -> Option<String> {
    let parsed;
    let value = match response {
        ApiResponse::Json(Value::String(text)) | ApiResponse::Text(text) => {
            parsed = serde_json::from_str::<Value>(text).ok()?;
            &parsed
        }
        ApiResponse::Json(value) => value,
    };

    match value.get("return")? {
        Value::String(code) if !code.is_empty() => Some(code.clone()),
        Value::Number(code) => Some(code.to_string()),
        _ => None,
    }
}

/// `upload_<ISO-8601 timestamp>.log` with `:` and `.` replaced by `-`.
pub fn fallback_upload_name(now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("upload_{stamp}.log")
}

/// Stop the manage pods.
pub async fn stop_pods(ctx: &ActionContext<'_>) -> ToolsResult<ActionOutcome> {
    pod_request(ctx, MANAGE_STOP_PATH, "stop").await
}

/// Start the manage pods.
pub async fn start_pods(ctx: &ActionContext<'_>) -> ToolsResult<ActionOutcome> {
    pod_request(ctx, MANAGE_START_PATH, "start").await
}

async fn pod_request(ctx: &ActionContext<'_>, path: &str, verb: &str) -> ToolsResult<ActionOutcome> {
    let credentials = match ctx.begin().await? {
        Preflight::Proceed(credentials) => credentials,
        Preflight::Aborted(outcome) => return Ok(outcome),
    };

    // Any successful response counts as accepted
    ctx.call(&credentials, &ApiRequest::post(path)).await?;

    info!(verb, "manage pod request submitted");
    Ok(ActionOutcome::new()
        .success(format!("MAS Manage {verb} request submitted successfully."))
        .with_value(ActionValue::Flag(true)))
}

/// Fetch the current manage log stream into a document.
pub async fn stream_logs(ctx: &ActionContext<'_>) -> ToolsResult<ActionOutcome> {
    let credentials = match ctx.begin().await? {
        Preflight::Proceed(credentials) => credentials,
        Preflight::Aborted(outcome) => return Ok(outcome),
    };

    let request = ApiRequest::get(LOGGING_PATH).with_query("action", STREAM_ACTION);
    let response = ctx.call(&credentials, &request).await?;

    if response.is_empty() {
        return Ok(ActionOutcome::new()
            .info("No log content returned.")
            .with_value(ActionValue::Flag(false)));
    }

    Ok(ActionOutcome::new()
        .with_document(payload::document("MAS Manage Logs", "log", &response))
        .info("MAS Manage logs retrieved successfully.")
        .with_value(ActionValue::Flag(true)))
}
