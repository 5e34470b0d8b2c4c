//! Storage collaborator - get/set of a single serialized blob per key.
//!
//! The leaderboard is the only persisted structure; it travels as one JSON
//! string under a fixed key. Storage failures are non-fatal by contract: the
//! callers log and fall back to defaults.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub trait Storage {
    /// Fetch the blob stored under a key, or None when absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a blob under a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage for tests and the demo's no-persistence mode.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: one JSON object mapping keys to blobs.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", self.path.display()))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_entries() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                log::warn!("storage read failed: {:#}", e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, raw).with_context(|| format!("writing {}", self.path.display()))
    }
}
