//! Credential set and the fixed secret keys it is stored under.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three values that must be configured before any action runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialField {
    /// Base URL of the tools service (`/toolsapi/` endpoints).
    ToolsUrl,
    /// Base URL of the manage service (`/maximo/` endpoints).
    ManageUrl,
    /// API key sent in the `apikey` header.
    ApiKey,
}

impl CredentialField {
    /// All fields, in setup order.
    pub const ALL: [Self; 3] = [Self::ToolsUrl, Self::ManageUrl, Self::ApiKey];

    /// Key the value is stored under in the secret store.
    pub const fn secret_key(self) -> &'static str {
        match self {
            Self::ToolsUrl => "maxinst_url",
            Self::ManageUrl => "manage_url",
            Self::ApiKey => "mas_api_key",
        }
    }

    /// Operator-facing label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToolsUrl => "Maxinst URL",
            Self::ManageUrl => "Manage URL",
            Self::ApiKey => "API Key",
        }
    }

    pub const fn is_url(self) -> bool {
        matches!(self, Self::ToolsUrl | Self::ManageUrl)
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three stored values that authorize every remote call.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialSet {
    pub tools_url: String,
    pub manage_url: String,
    pub api_key: String,
}

impl CredentialSet {
    pub fn new(
        tools_url: impl Into<String>,
        manage_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            tools_url: tools_url.into(),
            manage_url: manage_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Value for a single field.
    pub fn value(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::ToolsUrl => &self.tools_url,
            CredentialField::ManageUrl => &self.manage_url,
            CredentialField::ApiKey => &self.api_key,
        }
    }

    /// The URLs only, safe to show to the operator.
    pub fn environment(&self) -> EnvironmentSummary {
        EnvironmentSummary {
            tools_url: self.tools_url.clone(),
            manage_url: self.manage_url.clone(),
        }
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSet")
            .field("tools_url", &self.tools_url)
            .field("manage_url", &self.manage_url)
            .field("api_key", &"***")
            .finish()
    }
}

/// Result of reading the credential store. Missing is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    Complete(CredentialSet),
    Missing(Vec<CredentialField>),
}

/// Currently configured endpoints, shown before an action proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSummary {
    pub tools_url: String,
    pub manage_url: String,
}
