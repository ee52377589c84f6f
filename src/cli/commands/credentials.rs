//! Implementation of the `setup`, `show`, and `reset` commands.

use anyhow::Result;

use super::CommandContext;
use crate::cli::output::output;
use crate::services::setup;

pub async fn setup(ctx: &CommandContext, json_mode: bool) -> Result<()> {
    let outcome = setup::run_wizard(&ctx.credentials, &ctx.operator).await?;
    output(&outcome, json_mode);
    Ok(())
}

pub async fn show(ctx: &CommandContext, json_mode: bool) -> Result<()> {
    let outcome = setup::describe(&ctx.credentials).await?;
    output(&outcome, json_mode);
    Ok(())
}

pub async fn reset(ctx: &CommandContext, json_mode: bool) -> Result<()> {
    let outcome = setup::reset(&ctx.credentials).await?;
    output(&outcome, json_mode);
    Ok(())
}
