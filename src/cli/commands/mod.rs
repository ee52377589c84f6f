//! CLI command implementations.

pub mod action;
pub mod credentials;

use crate::adapters::http::RequestDispatcher;
use crate::cli::terminal::TerminalOperator;
use crate::cli::types::Commands;
use crate::infrastructure::credentials::CredentialStore;
use crate::services::{Action, ActionContext};

/// Long-lived dependencies for one CLI invocation.
pub struct CommandContext {
    pub credentials: CredentialStore,
    pub dispatcher: RequestDispatcher,
    pub operator: TerminalOperator,
    pub confirm_environment: bool,
}

impl CommandContext {
    pub fn action_context(&self) -> ActionContext<'_> {
        ActionContext::new(&self.credentials, &self.dispatcher, &self.operator)
            .with_confirmation(self.confirm_environment)
    }
}

pub async fn execute(command: Commands, ctx: &CommandContext, json_mode: bool) -> anyhow::Result<()> {
    match command {
        Commands::Setup => credentials::setup(ctx, json_mode).await,
        Commands::Show => credentials::show(ctx, json_mode).await,
        Commands::Reset => credentials::reset(ctx, json_mode).await,
        Commands::ListLogs => action::execute(Action::ListLogs, ctx, json_mode).await,
        Commands::OpenLog { name } => action::execute(Action::OpenLog(name), ctx, json_mode).await,
        Commands::UploadLogs => action::execute(Action::UploadLogs, ctx, json_mode).await,
        Commands::StopPods => action::execute(Action::StopPods, ctx, json_mode).await,
        Commands::StartPods => action::execute(Action::StartPods, ctx, json_mode).await,
        Commands::StreamLogs => action::execute(Action::StreamLogs, ctx, json_mode).await,
        Commands::IntegrityReport => {
            action::execute(Action::IntegrityReport, ctx, json_mode).await
        }
    }
}
