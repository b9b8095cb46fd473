//! High-level store operations used by CLI commands.
//!
//! `SecretStore` wraps the file format layer so that the rest of the
//! application can work with simple method calls like
//! `store.update("github", "n3w-p4ss", &timestamp)`.
//!
//! A store is opened at the start of every user operation, mutated in
//! memory, and written back whole with [`SecretStore::save`].

use std::path::{Path, PathBuf};

use crate::errors::{PwdManagerError, Result};

use super::entry::{validate_key, SecretEntry, Selector};
use super::format;

/// What `SecretStore::open` found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    /// An existing database was read.
    Loaded,
    /// No database existed; an empty one was written.
    Initialized,
    /// The database was corrupt and has been reset to empty.
    Recovered,
}

/// The store handle.  Holds every entry in insertion order.
pub struct SecretStore {
    /// Path to the database file on disk.
    path: PathBuf,

    /// Entries in insertion order.  Keywords are unique.
    entries: Vec<SecretEntry>,
}

impl SecretStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// An empty store bound to `path`.  Nothing is written until `save`.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            entries: Vec::new(),
        }
    }

    /// Open the database at `path`.
    ///
    /// A missing file is initialized to an empty database.  A corrupt
    /// file is discarded entirely and replaced with an empty one; both
    /// attribute columns are reset together.  Any other I/O failure is
    /// returned as `StorageUnavailable`.
    pub fn open(path: &Path) -> Result<(Self, OpenStatus)> {
        let mut store = Self::new(path);

        let status = match format::read_store(path) {
            Ok(Some(entries)) => {
                store.entries = entries;
                OpenStatus::Loaded
            }
            Ok(None) => {
                tracing::info!(path = %path.display(), "initializing new password database");
                store.save()?;
                OpenStatus::Initialized
            }
            Err(PwdManagerError::Corrupt(detail)) => {
                tracing::warn!(path = %path.display(), %detail, "password database is corrupt, resetting");
                store.save()?;
                OpenStatus::Recovered
            }
            Err(e) => return Err(e),
        };

        Ok((store, status))
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Look up a single entry.
    pub fn get(&self, key: &str) -> Result<&SecretEntry> {
        self.position(key)
            .map(|i| &self.entries[i])
            .ok_or_else(|| PwdManagerError::NotFound(key.to_string()))
    }

    /// Returns `true` if an entry with this keyword exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert a new entry or overwrite an existing one in place.
    pub fn put(&mut self, key: &str, secret: &str, timestamp: &str) -> Result<()> {
        validate_key(key)?;

        match self.position(key) {
            Some(i) => {
                let entry = &mut self.entries[i];
                entry.secret = secret.to_string();
                entry.last_modified = timestamp.to_string();
            }
            None => self.entries.push(SecretEntry::new(key, secret, timestamp)),
        }
        Ok(())
    }

    /// Check that `key` can be used for a brand-new entry.
    ///
    /// Fails with `InvalidKey` for reserved or empty keywords and for
    /// keywords that are already taken.
    pub fn check_new_key(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        if self.contains_key(key) {
            return Err(PwdManagerError::invalid_key(
                key,
                "a password has already been saved with this keyword",
            ));
        }
        Ok(())
    }

    /// Save a new password.  Never overwrites an existing keyword.
    pub fn insert_new(&mut self, key: &str, secret: &str, timestamp: &str) -> Result<()> {
        self.check_new_key(key)?;
        self.entries.push(SecretEntry::new(key, secret, timestamp));
        Ok(())
    }

    /// Replace the password of an existing keyword and refresh its
    /// timestamp.  Other entries are left untouched.
    pub fn update(&mut self, key: &str, secret: &str, timestamp: &str) -> Result<()> {
        if !self.contains_key(key) {
            return Err(PwdManagerError::NotFound(key.to_string()));
        }
        self.put(key, secret, timestamp)
    }

    /// Remove one entry and return it.
    pub fn delete(&mut self, key: &str) -> Result<SecretEntry> {
        let i = self
            .position(key)
            .ok_or_else(|| PwdManagerError::NotFound(key.to_string()))?;
        Ok(self.entries.remove(i))
    }

    /// Remove every entry.
    pub fn delete_all(&mut self) {
        self.entries.clear();
    }

    /// Delete whatever `selector` addresses and return how many entries went.
    pub fn remove(&mut self, selector: &Selector) -> Result<usize> {
        match selector {
            Selector::Specific(key) => self.delete(key).map(|_| 1),
            Selector::Everything => {
                let count = self.entries.len();
                self.delete_all();
                Ok(count)
            }
        }
    }

    /// Snapshot the entries addressed by `selector`.
    pub fn select(&self, selector: &Selector) -> Result<Vec<SecretEntry>> {
        match selector {
            Selector::Specific(key) => self.get(key).map(|e| vec![e.clone()]),
            Selector::Everything => Ok(self.entries.clone()),
        }
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[SecretEntry] {
        &self.entries
    }

    /// All keywords in insertion order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    /// The `keyword -> password` column, as written to the first block.
    pub fn secrets(&self) -> Vec<(&str, &str)> {
        format::secrets_column(&self.entries)
    }

    /// The `keyword -> last modified` column, as written to the second block.
    pub fn timestamps(&self) -> Vec<(&str, &str)> {
        format::timestamps_column(&self.entries)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Write the whole store to disk.
    ///
    /// On failure the in-memory entries are unchanged and the error is
    /// returned to the caller.
    pub fn save(&self) -> Result<()> {
        format::write_store(&self.path, &self.entries)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }
}
