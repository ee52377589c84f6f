//! Domain layer for the MAS tools client
//!
//! Credential, request, and view-model types plus the ports that
//! infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ToolsError, ToolsResult};
