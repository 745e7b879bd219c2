//! Local key-value persistence.
//!
//! Small values the storefront needs even when the server write fails
//! (the shipping address, mainly) are stored as JSON files in the
//! configured directory. The local copy is written first and is the one
//! read back; the server write is best-effort.

use std::fs;
use std::path::PathBuf;

use boreal_shared::{AppError, AppResult, StorageConfig};

/// Storage key for the saved shipping address.
pub const SHIPPING_ADDRESS_KEY: &str = "shipping_address";

/// Local key-value store.
pub trait LocalStore: Send + Sync {
    /// Stores a value under a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` on I/O failure.
    fn put(&self, key: &str, value: &serde_json::Value) -> AppResult<()>;

    /// Loads the value stored under a key, if any.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` on I/O failure or a corrupt entry.
    fn get(&self, key: &str) -> AppResult<Option<serde_json::Value>>;
}

/// Filesystem-backed store writing one `{key}.json` file per entry.
#[derive(Debug, Clone)]
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    /// Creates a store rooted at the configured directory.
    #[must_use]
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl LocalStore for FsStore {
    fn put(&self, key: &str, value: &serde_json::Value) -> AppResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| AppError::Storage(e.to_string()))?;
        let encoded =
            serde_json::to_vec_pretty(value).map_err(|e| AppError::Storage(e.to_string()))?;
        fs::write(self.path_for(key), encoded).map_err(|e| AppError::Storage(e.to_string()))
    }

    fn get(&self, key: &str) -> AppResult<Option<serde_json::Value>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path).map_err(|e| AppError::Storage(e.to_string()))?;
        let value =
            serde_json::from_slice(&bytes).map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(Some(value))
    }
}
