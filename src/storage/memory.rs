//! In-Memory Storage

use super::StoragePort;
use crate::Result;
use std::collections::HashMap;
use std::sync::Mutex;

/// Ephemeral storage backend for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.slots.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots.lock().unwrap().remove(key);
        Ok(())
    }
}
