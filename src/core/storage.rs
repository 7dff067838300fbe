//! Device-local key-value storage
//!
//! The session lives under two string keys. [`FileStore`] keeps every key in
//! a single JSON object file that is rewritten as a whole on each change, so a
//! batch of writes either lands completely or not at all.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use crate::{debug, warn};

/// Errors raised by a key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Stored bytes are not the expected JSON shape
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The in-memory map lock was poisoned by a panicking writer
    #[error("storage lock poisoned")]
    Poisoned,
}

/// String key-value store surviving process restarts
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write several keys in one operation
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written; in that case
    /// none of the entries are visible afterwards
    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError>;

    /// Remove several keys in one operation; absent keys are ignored
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written
    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError>;

    /// Write a single key
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written
    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.set_many(&[(key, value)])
    }

    /// Remove a single key
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_many(&[key])
    }
}

type Entries = BTreeMap<String, String>;

/// Store backed by one JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at `path`; the file is created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(entries)?;

        // Write beside the target and rename so readers never see half a file
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|e| self.io_error(e))?;
        fs::rename(&staging, &self.path).map_err(|e| self.io_error(e))?;
        debug!("Wrote {} key(s) to {}", entries.len(), self.path.display());
        Ok(())
    }

    /// Entries to start a write from; an unreadable file is replaced rather than kept
    fn entries_for_update(&self) -> Result<Entries, StorageError> {
        match self.read_entries() {
            Ok(entries) => Ok(entries),
            Err(StorageError::Serialization(e)) => {
                warn!(
                    "Discarding unreadable storage file {}: {e}",
                    self.path.display()
                );
                Ok(Entries::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        let mut current = self.entries_for_update()?;
        for (key, value) in entries {
            current.insert((*key).to_string(), value.clone());
        }
        self.write_entries(&current)
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut current = self.entries_for_update()?;
        let before = current.len();
        for key in keys {
            current.remove(*key);
        }
        if current.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path).map_err(|e| self.io_error(e))?;
            }
            return Ok(());
        }
        if current.len() == before {
            return Ok(());
        }
        self.write_entries(&current)
    }
}

/// Volatile store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Entries>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the store holds no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set_many(&self, new_entries: &[(&str, String)]) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        for (key, value) in new_entries {
            entries.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}
