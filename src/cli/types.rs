//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mastools")]
#[command(about = "MAS Tools API - administrative actions for MAS Manage environments", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Skip the environment confirmation before remote actions
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Configuration file (defaults to mastools.yaml and mastools.local.yaml)
    #[arg(short, long, global = true, env = "MASTOOLS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Store the Maxinst URL, Manage URL, and API key in the system keychain
    Setup,

    /// Show the configured environment (the API key is never printed)
    Show,

    /// Delete the stored credentials
    Reset,

    /// List available tool logs
    ListLogs,

    /// Open a single tool log
    OpenLog {
        /// Log file name (prompted for when omitted)
        name: Option<String>,
    },

    /// Ask MAS Manage to upload its logs
    UploadLogs,

    /// Stop the MAS Manage pods
    StopPods,

    /// Start the MAS Manage pods
    StartPods,

    /// Fetch the current MAS Manage log stream
    StreamLogs,

    /// Generate an Integrity Checker report
    IntegrityReport,
}
