//! System keychain secret storage.
//!
//! - macOS: Keychain
//! - Linux: Secret Service (GNOME Keyring, KWallet)
//! - Windows: Credential Manager

use async_trait::async_trait;
use keyring::Entry;
use tracing::instrument;

use crate::domain::errors::{ToolsError, ToolsResult};
use crate::domain::ports::SecretStore;

/// Keyring-backed [`SecretStore`]. Each secret key is a separate entry
/// under one service name.
#[derive(Debug, Clone)]
pub struct KeyringSecretStore {
    service: String,
}

impl KeyringSecretStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, key: &str) -> ToolsResult<Entry> {
        Entry::new(&self.service, key)
            .map_err(|e| ToolsError::SecretStore(format!("Failed to open keyring entry {key}: {e}")))
    }
}

fn task_failed(err: tokio::task::JoinError) -> ToolsError {
    ToolsError::SecretStore(format!("Keyring task failed: {err}"))
}

#[async_trait]
impl SecretStore for KeyringSecretStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> ToolsResult<Option<String>> {
        let entry = self.entry(key)?;

        // keyring calls block on the platform backend
        let result = tokio::task::spawn_blocking(move || entry.get_password())
            .await
            .map_err(task_failed)?;

        match result {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(ToolsError::SecretStore(format!("Failed to read {key}: {e}"))),
        }
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> ToolsResult<()> {
        let entry = self.entry(key)?;
        let value = value.to_string();

        tokio::task::spawn_blocking(move || entry.set_password(&value))
            .await
            .map_err(task_failed)?
            .map_err(|e| ToolsError::SecretStore(format!("Failed to store {key}: {e}")))
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> ToolsResult<()> {
        let entry = self.entry(key)?;

        let result = tokio::task::spawn_blocking(move || entry.delete_password())
            .await
            .map_err(task_failed)?;

        match result {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(ToolsError::SecretStore(format!("Failed to delete {key}: {e}"))),
        }
    }

    fn name(&self) -> &str {
        "keyring"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reading and writing need a keyring backend, which CI hosts rarely have.

    #[test]
    fn test_service_name() {
        let store = KeyringSecretStore::new("mastools-test");
        assert_eq!(store.service(), "mastools-test");
        assert_eq!(store.name(), "keyring");
    }
}
