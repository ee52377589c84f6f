use regex::{Captures, Regex};
use std::fmt;

/// Redacts credentials from text before it reaches a log line.
///
/// Covers `apikey`-style fields in JSON, headers, and query strings, plus
/// bearer tokens and passwords.
#[derive(Clone)]
pub struct SecretScrubber {
    field_pattern: Regex,
    bearer_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new scrubber
    pub fn new() -> Self {
        Self {
            // apikey: x / "api_key": "x" / apikey=x / password=x / token=x
            field_pattern: Regex::new(
                r#"(?i)(["']?(?:apikey|api[_-]key|token|secret|password)["']?\s*[:=]\s*["']?)([^"'\s,}&]+)"#,
            )
            .expect("field pattern compiles"),
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+")
                .expect("bearer pattern compiles"),
        }
    }

    /// Scrub a message of sensitive data
    pub fn scrub(&self, message: &str) -> String {
        let scrubbed = self
            .bearer_pattern
            .replace_all(message, "Bearer [TOKEN_REDACTED]");
        self.field_pattern
            .replace_all(&scrubbed, |caps: &Captures| format!("{}[REDACTED]", &caps[1]))
            .into_owned()
    }

    /// Replace every occurrence of a known secret value.
    pub fn scrub_value(&self, message: &str, secret: &str) -> String {
        let scrubbed = self.scrub(message);
        if secret.is_empty() {
            scrubbed
        } else {
            scrubbed.replace(secret, "[REDACTED]")
        }
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
