//! mastools CLI entry point.

use std::sync::Arc;

use clap::Parser;

use mastools::cli::commands::{self, CommandContext};
use mastools::cli::{Cli, TerminalOperator};
use mastools::infrastructure::logging::LoggerImpl;
use mastools::{ConfigLoader, CredentialStore, KeyringSecretStore, RequestDispatcher};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        mastools::cli::handle_error(err, json_mode);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&config.logging)?;

    let secrets = Arc::new(KeyringSecretStore::new(config.keyring_service.clone()));
    let ctx = CommandContext {
        credentials: CredentialStore::new(secrets),
        dispatcher: RequestDispatcher::new()?,
        operator: TerminalOperator::new(),
        confirm_environment: config.confirm_environment && !cli.yes,
    };

    commands::execute(cli.command, &ctx, cli.json).await
}
