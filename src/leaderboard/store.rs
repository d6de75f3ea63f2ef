//! Leaderboard Storage
//!
//! Load/save contract for ranked entries, keyed by a namespaced string.
//! The ranker never talks to a concrete backend; it takes any
//! `LeaderboardStore` as a capability.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::leaderboard::entry::LeaderboardEntry;

/// Default key for the leaderboard instance.
pub const LEADERBOARD_KEY: &str = "swimswap-leaderboard";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// Key cannot be used with this backend.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// Stored bytes are not a valid leaderboard.
    #[error("corrupt leaderboard data: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// Filesystem error.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Durable key-value storage for leaderboards.
pub trait LeaderboardStore {
    /// Read the entries stored under `key`. `Ok(None)` when nothing is stored.
    fn load(&self, key: &str) -> Result<Option<Vec<LeaderboardEntry>>, StoreError>;

    /// Replace the entries stored under `key`.
    fn save(&self, key: &str, entries: &[LeaderboardEntry]) -> Result<(), StoreError>;
}

impl<S: LeaderboardStore + ?Sized> LeaderboardStore for &S {
    fn load(&self, key: &str) -> Result<Option<Vec<LeaderboardEntry>>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, entries: &[LeaderboardEntry]) -> Result<(), StoreError> {
        (**self).save(key, entries)
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-process store holding serialised JSON per key, like browser local
/// storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored under a key.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Overwrite the raw JSON under a key.
    pub fn set_raw(&self, key: &str, json: impl Into<String>) {
        self.slots.borrow_mut().insert(key.to_string(), json.into());
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<LeaderboardEntry>>, StoreError> {
        match self.slots.borrow().get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, entries: &[LeaderboardEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string(entries)?;
        self.set_raw(key, json);
        Ok(())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// One JSON file per key under a directory: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

/// Keys become file names: ASCII alphanumerics, `-`, `_` and `.` only,
/// and never a bare dot sequence.
fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid_chars = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');

    if key.is_empty() || !valid_chars || key.chars().all(|c| c == '.') {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl LeaderboardStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<LeaderboardEntry>>, StoreError> {
        let path = self.path_for(key)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, key: &str, entries: &[LeaderboardEntry]) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write then rename so readers never see a half-written file.
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        let json = serde_json::to_string_pretty(entries)?;
        let written = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
