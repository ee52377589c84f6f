use async_trait::async_trait;

use crate::domain::errors::ToolsResult;

/// Named-secret storage delegated to the host platform.
///
/// Implementations never encrypt anything themselves; they hand values to
/// a facility that does (system keychain) or keep them in memory for tests.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Read a secret. `Ok(None)` when nothing is stored under `key`.
    async fn get(&self, key: &str) -> ToolsResult<Option<String>>;

    /// Store or overwrite a secret.
    async fn set(&self, key: &str, value: &str) -> ToolsResult<()>;

    /// Remove a secret. Removing an absent key succeeds.
    async fn delete(&self, key: &str) -> ToolsResult<()>;

    /// Backend name for diagnostics
    fn name(&self) -> &str;
}
