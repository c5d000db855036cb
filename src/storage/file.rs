//! File-Backed Storage

use super::StoragePort;
use crate::Result;
use anyhow::Context;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// JSON-file-backed storage, the demo analog of browser local storage
///
/// The whole slot map lives in one file. A missing, unreadable, or
/// malformed file opens as an empty map; write failures do propagate.
pub struct FileStorage {
    path: PathBuf,
    slots: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open a storage file, starting empty when it cannot be loaded
    pub fn open(path: &Path) -> Self {
        let slots = if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<HashMap<String, String>>(&content) {
                    Ok(map) => {
                        debug!("Loaded {} storage slots from {}", map.len(), path.display());
                        map
                    }
                    Err(e) => {
                        warn!(
                            "State file {} is malformed ({}), starting empty",
                            path.display(),
                            e
                        );
                        HashMap::new()
                    }
                },
                Err(e) => {
                    warn!(
                        "State file {} is unreadable ({}), starting empty",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            }
        } else {
            debug!("State file {} not found, starting empty", path.display());
            HashMap::new()
        };

        Self {
            path: path.to_path_buf(),
            slots: Mutex::new(slots),
        }
    }

    /// Write the current slot map back to disk
    fn persist(&self, slots: &HashMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(slots)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write state file: {}", self.path.display()))
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let mut slots = self.slots.lock().unwrap();
        slots.insert(key.to_string(), value);
        self.persist(&slots)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.lock().unwrap();
        if slots.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&slots)
    }
}
