//! Integrity-checker report generation.
//!
//! The report endpoint answers with `{"lisfile": ..., "logfile": ...}`.
//! Any object opens the report panel, with one item per present file that
//! opens it through the tool log endpoint. Anything else is a failed report.

use tracing::{info, warn};

use crate::domain::errors::ToolsResult;
use crate::domain::models::{
    ActionOutcome, ApiRequest, IntegrityReport, Panel, PanelAction, PanelItem,
};
use crate::services::action_context::{ActionContext, Preflight};

pub const INTEGRITY_REPORT_PATH: &str = "/toolsapi/toolservice/icheckerreport";
const PANEL_TITLE: &str = "Integrity Checker Report";
pub const REPORT_FAILED_MESSAGE: &str = "Failed to generate Integrity Checker Report.";

pub async fn integrity_report(ctx: &ActionContext<'_>) -> ToolsResult<ActionOutcome> {
    let credentials = match ctx.begin().await? {
        Preflight::Proceed(credentials) => credentials,
        Preflight::Aborted(outcome) => return Ok(outcome),
    };

    let response = ctx
        .call(&credentials, &ApiRequest::post(INTEGRITY_REPORT_PATH))
        .await?;

    match response.as_json().and_then(IntegrityReport::from_value) {
        Some(report) => {
            info!(files = ?report.files(), "integrity checker report generated");
            Ok(ActionOutcome::new().with_panel(report_panel(&report)))
        }
        None => {
            warn!(?response, "integrity checker report is not an object");
            Ok(ActionOutcome::new().warning(REPORT_FAILED_MESSAGE))
        }
    }
}

/// One openable item per report file.
pub fn report_panel(report: &IntegrityReport) -> Panel {
    Panel {
        title: PANEL_TITLE.to_string(),
        items: report
            .files()
            .into_iter()
            .map(|file| PanelItem {
                label: file.to_string(),
                details: Vec::new(),
                action: Some(PanelAction::OpenLog {
                    name: file.to_string(),
                }),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_panel() {
        let report = IntegrityReport {
            lisfile: Some("IntegrityChecker.lis".to_string()),
            logfile: Some("IntegrityChecker.log".to_string()),
        };
        let panel = report_panel(&report);
        assert_eq!(panel.title, "Integrity Checker Report");
        let labels: Vec<_> = panel.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["IntegrityChecker.lis", "IntegrityChecker.log"]);
        assert!(panel.items.iter().all(|item| item.action.is_some()));
    }

    #[test]
    fn test_report_panel_without_files() {
        let panel = report_panel(&IntegrityReport::default());
        assert_eq!(panel.title, "Integrity Checker Report");
        assert!(panel.items.is_empty());
    }
}
