//! JSON-file key-value store (lightweight for CLI usage).

use crate::errors::AppResult;
use crate::store::kv::KvStore;
use crate::utils::path::expand_tilde;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// All slots live in one JSON object, rewritten whole on every set.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store file at `path`.
    /// A missing or empty file reads as an empty store.
    pub fn open(path: &str) -> AppResult<Self> {
        let path = expand_tilde(path);

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn flush(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, body)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
