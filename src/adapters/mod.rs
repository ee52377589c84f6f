//! Adapters implementing domain ports and outbound I/O
//!
//! - http: request dispatch to the tools and manage services
//! - secrets: keyring and in-memory secret stores

pub mod http;
pub mod secrets;
