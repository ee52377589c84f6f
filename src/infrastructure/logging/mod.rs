//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Compact, pretty, or JSON stderr output
//! - Optional rolling JSON log files
//! - Secret scrubbing for request and response lines

pub mod logger;
pub mod secret_scrubbing;

pub use logger::LoggerImpl;
pub use secret_scrubbing::SecretScrubber;
