//! Port trait definitions (Hexagonal Architecture)
//!
//! - SecretStore: where the credential set lives
//! - Operator: prompts and confirmations during an action

pub mod operator;
pub mod secret_store;

pub use operator::{EnvironmentChoice, Operator, TextPrompt};
pub use secret_store::SecretStore;
