//! Infrastructure layer module
//!
//! - Configuration management
//! - Logging infrastructure
//! - Credentials management

pub mod config;
pub mod credentials;
pub mod logging;
