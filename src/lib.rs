//! mastools - operator CLI for the MAS tools and manage APIs
//!
//! Lists and opens tool logs, uploads and streams MAS Manage logs, stops
//! and starts the manage pods, and generates integrity-checker reports.
//! Credentials live in the system keychain.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors, and port traits
//! - **Adapters** (`adapters`): HTTP dispatch and secret stores
//! - **Infrastructure Layer** (`infrastructure`): configuration, logging, credentials
//! - **Service Layer** (`services`): one handler per action, plus setup
//! - **CLI Layer** (`cli`): command-line interface and terminal operator
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mastools::{Action, ActionContext, CredentialStore, KeyringSecretStore, RequestDispatcher};
//!
//! async fn list(operator: &dyn mastools::Operator) -> anyhow::Result<()> {
//!     let store = CredentialStore::new(Arc::new(KeyringSecretStore::new("mastools")));
//!     let dispatcher = RequestDispatcher::new()?;
//!     let outcome = Action::ListLogs
//!         .run(&ActionContext::new(&store, &dispatcher, operator))
//!         .await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::http::RequestDispatcher;
pub use adapters::secrets::{InMemorySecretStore, KeyringSecretStore};
pub use domain::models::{
    ActionOutcome, ActionValue, ApiRequest, ApiResponse, Config, CredentialField, CredentialSet,
    CredentialStatus, LoggingConfig,
};
pub use domain::ports::{EnvironmentChoice, Operator, SecretStore, TextPrompt};
pub use domain::{ToolsError, ToolsResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::credentials::CredentialStore;
pub use services::{Action, ActionContext};
