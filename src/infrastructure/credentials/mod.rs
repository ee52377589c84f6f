//! Credentials management infrastructure
//!
//! The credential set lives in a [`SecretStore`] under three fixed keys.
//! This wrapper reads and writes the set as a unit and reports which
//! fields are missing instead of failing.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::errors::{ToolsError, ToolsResult};
use crate::domain::models::{CredentialField, CredentialSet, CredentialStatus};
use crate::domain::ports::SecretStore;

/// Reads and writes the [`CredentialSet`].
#[derive(Clone)]
pub struct CredentialStore {
    secrets: Arc<dyn SecretStore>,
}

impl CredentialStore {
    pub fn new(secrets: Arc<dyn SecretStore>) -> Self {
        Self { secrets }
    }

    /// Current credential set, or the fields that are absent or empty.
    pub async fn get(&self) -> ToolsResult<CredentialStatus> {
        let tools_url = self.read(CredentialField::ToolsUrl).await?;
        let manage_url = self.read(CredentialField::ManageUrl).await?;
        let api_key = self.read(CredentialField::ApiKey).await?;

        match (tools_url, manage_url, api_key) {
            (Some(tools_url), Some(manage_url), Some(api_key)) => Ok(CredentialStatus::Complete(
                CredentialSet::new(tools_url, manage_url, api_key),
            )),
            (tools_url, manage_url, api_key) => {
                let missing: Vec<_> = [
                    (CredentialField::ToolsUrl, tools_url.is_none()),
                    (CredentialField::ManageUrl, manage_url.is_none()),
                    (CredentialField::ApiKey, api_key.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                debug!(?missing, backend = self.secrets.name(), "credential set incomplete");
                Ok(CredentialStatus::Missing(missing))
            }
        }
    }

    async fn read(&self, field: CredentialField) -> ToolsResult<Option<String>> {
        let value = self.secrets.get(field.secret_key()).await?;
        Ok(value.filter(|value| !value.is_empty()))
    }

    /// Credential set, or [`ToolsError::ConfigurationMissing`].
    pub async fn require(&self) -> ToolsResult<CredentialSet> {
        match self.get().await? {
            CredentialStatus::Complete(credentials) => Ok(credentials),
            CredentialStatus::Missing(missing) => Err(ToolsError::ConfigurationMissing { missing }),
        }
    }

    /// Write all three values.
    pub async fn set(&self, credentials: &CredentialSet) -> ToolsResult<()> {
        for field in CredentialField::ALL {
            self.secrets
                .set(field.secret_key(), credentials.value(field))
                .await?;
        }
        info!(backend = self.secrets.name(), "credential set stored");
        Ok(())
    }

    /// Delete all three values. Absent entries are not an error.
    pub async fn clear(&self) -> ToolsResult<()> {
        for field in CredentialField::ALL {
            self.secrets.delete(field.secret_key()).await?;
        }
        info!(backend = self.secrets.name(), "credential set cleared");
        Ok(())
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("backend", &self.secrets.name())
            .finish()
    }
}
