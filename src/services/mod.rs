pub mod action_context;
pub mod integrity;
pub mod manage;
pub mod payload;
pub mod setup;
pub mod tool_logs;

pub use action_context::{ActionContext, Preflight};

use crate::domain::errors::ToolsResult;
use crate::domain::models::{ActionOutcome, PanelAction};

/// Every remote action an operator can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListLogs,
    OpenLog(Option<String>),
    UploadLogs,
    StopPods,
    StartPods,
    StreamLogs,
    IntegrityReport,
}

impl Action {
    pub async fn run(self, ctx: &ActionContext<'_>) -> ToolsResult<ActionOutcome> {
        match self {
            Self::ListLogs => tool_logs::list_logs(ctx).await,
            Self::OpenLog(name) => tool_logs::open_log(ctx, name).await,
            Self::UploadLogs => manage::upload_logs(ctx).await,
            Self::StopPods => manage::stop_pods(ctx).await,
            Self::StartPods => manage::start_pods(ctx).await,
            Self::StreamLogs => manage::stream_logs(ctx).await,
            Self::IntegrityReport => integrity::integrity_report(ctx).await,
        }
    }

    /// Progress label shown while the request is in flight.
    pub const fn progress_message(&self) -> &'static str {
        match self {
            Self::ListLogs => "Fetching tool logs...",
            Self::OpenLog(_) => "Fetching log...",
            Self::UploadLogs => "Uploading logs...",
            Self::StopPods => "Stopping MAS Manage pods...",
            Self::StartPods => "Starting MAS Manage pods...",
            Self::StreamLogs => "Streaming MAS Manage logs...",
            Self::IntegrityReport => "Generating Integrity Checker report...",
        }
    }
}

impl From<PanelAction> for Action {
    fn from(action: PanelAction) -> Self {
        match action {
            PanelAction::OpenLog { name } => Self::OpenLog(Some(name)),
        }
    }
}
