//! The persisted credential slot.
//!
//! There is deliberately no `unset`: once a key has been captured it stays
//! until the capture form overwrites it. Callers treat a missing or empty
//! slot as an ordinary, checked state.

use anyhow::Result;
use parking_lot::Mutex;
use tracing::debug;

use crate::{CREDENTIAL_KEY, CREDENTIAL_PREFIX, ConfigManager};

/// Key-value slot holding the user's API key.
pub trait CredentialStore: Send + Sync {
    /// Reads the raw stored value.
    fn get(&self) -> Result<Option<String>>;

    /// Overwrites the stored value.
    fn set(&self, credential: &str) -> Result<()>;

    /// Reads the stored value, treating an empty string as absent.
    fn get_non_empty(&self) -> Result<Option<String>> {
        Ok(self.get()?.filter(|credential| !credential.is_empty()))
    }
}

/// Shape check for a candidate API key. This does not verify the key works.
pub fn looks_like_credential(candidate: &str) -> bool {
    candidate.trim().starts_with(CREDENTIAL_PREFIX)
}

/// Credential slot backed by the TOML config file.
#[derive(Debug, Clone)]
pub struct ConfigCredentialStore {
    manager: ConfigManager,
}

impl ConfigCredentialStore {
    pub fn new(manager: ConfigManager) -> Self {
        Self { manager }
    }
}

impl CredentialStore for ConfigCredentialStore {
    fn get(&self) -> Result<Option<String>> {
        let config = self.manager.load()?;
        Ok(config.api_key().map(str::to_owned))
    }

    fn set(&self, credential: &str) -> Result<()> {
        let mut config = self.manager.load()?;
        config.set_api_key(credential);
        self.manager.save(&config)?;
        debug!(
            slot = CREDENTIAL_KEY,
            path = ?self.manager.config_path(),
            "credential persisted"
        );
        Ok(())
    }
}

/// In-memory credential slot, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<String>>,
    writes: Mutex<usize>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a value.
    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(credential.into())),
            writes: Mutex::new(0),
        }
    }

    /// Number of times `set` has been called.
    pub fn writes(&self) -> usize {
        *self.writes.lock()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.slot.lock().clone())
    }

    fn set(&self, credential: &str) -> Result<()> {
        *self.slot.lock() = Some(credential.to_owned());
        *self.writes.lock() += 1;
        Ok(())
    }
}
