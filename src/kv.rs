//! Key-value storage backends
//!
//! The list is persisted into a single named slot of a key-value store. The
//! [`KeyValueStore`] trait is the seam between the list logic and the medium:
//!
//! - [`FileStore`] keeps one JSON document per key inside a data directory
//! - [`MemoryStore`] keeps values in a map, for tests and `--memory` sessions
//!
//! Values are opaque bytes; encoding is the caller's concern.

use crate::error::{Result, ShopListError};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Synchronous byte-oriented key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Map-backed store. Contents live as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

// ============================================================================
// File backend
// ============================================================================

/// Directory-backed store: slot `key` lives in `<dir>/<key>.json`.
///
/// Writes go to a hidden temporary file first and are renamed into place, so
/// a slot is either the previous document or the new one, never a partial
/// write. The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.json.tmp"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.slot_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => {
                debug!("Read {} bytes from {}", bytes.len(), path.display());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp = self.temp_path(key);
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// Keys become file names, so they must be a single plain path component.
pub fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(ShopListError::config("storage key must not be empty"));
    }
    if key.contains(['/', '\\']) || key == "." || key == ".." {
        return Err(ShopListError::config(format!(
            "storage key '{key}' must not contain path separators"
        )));
    }
    Ok(())
}
