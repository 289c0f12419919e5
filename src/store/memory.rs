//! In-memory key-value store used by tests.

use crate::errors::{AppError, AppResult};
use crate::store::kv::KvStore;
use std::collections::HashMap;

/// HashMap-backed store. Flip `fail_writes` to make every `set` fail, which
/// exercises the swallow-and-log persistence path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Other(format!("write rejected for {key}")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
