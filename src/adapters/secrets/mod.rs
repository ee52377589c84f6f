//! Secret storage adapters

pub mod keyring_store;
pub mod memory_store;

pub use keyring_store::KeyringSecretStore;
pub use memory_store::InMemorySecretStore;
