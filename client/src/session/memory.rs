//! In-process session store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::SessionStore;
use crate::core::error::Result;

/// Session store kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.write().clear();
        Ok(())
    }
}
