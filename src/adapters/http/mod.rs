//! HTTP adapter for the remote services

pub mod dispatcher;

pub use dispatcher::{RequestDispatcher, API_KEY_HEADER};
