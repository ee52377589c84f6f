//! Running a remote action, with a spinner while the request is in flight.
//!
//! In human mode a panel result stays interactive: the operator can open
//! its items one after another until they press Enter. A failed open is
//! reported for that item only.

use anyhow::Result;
use tracing::{debug, warn};

use super::CommandContext;
use crate::cli::display::action_failure;
use crate::cli::output::{create_spinner_with_message, hidden_spinner, output, CommandOutput};
use crate::domain::errors::ToolsResult;
use crate::domain::models::ActionOutcome;
use crate::services::Action;

pub async fn execute(action: Action, ctx: &CommandContext, json_mode: bool) -> Result<()> {
    let outcome = run_with_progress(action, ctx, json_mode).await?;
    output(&outcome, json_mode);

    if json_mode {
        return Ok(());
    }
    if let Some(panel) = outcome.panel() {
        while let Some(index) = ctx.operator.pick_item(panel)? {
            let Some(selected) = panel.action_at(index).cloned() else {
                continue;
            };
            debug!(?selected, "panel item activated");
            let opened = run_with_progress(Action::from(selected.clone()), ctx, json_mode).await;
            match activation_report(&opened) {
                Ok(text) => println!("{text}"),
                Err(text) => {
                    warn!(?selected, "panel item failed to open");
                    eprintln!("{text}");
                }
            }
            ctx.operator.show_panel(panel)?;
        }
    }
    Ok(())
}

/// Rendered result of one panel activation, `Err` holding the failure line.
fn activation_report(result: &ToolsResult<ActionOutcome>) -> std::result::Result<String, String> {
    match result {
        Ok(outcome) => Ok(outcome.to_human()),
        Err(err) => Err(action_failure(&err.to_string())),
    }
}

async fn run_with_progress(
    action: Action,
    ctx: &CommandContext,
    json_mode: bool,
) -> ToolsResult<ActionOutcome> {
    let spinner = if json_mode {
        hidden_spinner()
    } else {
        create_spinner_with_message(action.progress_message())
    };
    ctx.operator.attach_progress(spinner.clone());

    let result = action.run(&ctx.action_context()).await;

    ctx.operator.detach_progress();
    spinner.finish_and_clear();
    result
}
