//! Storage Port

use crate::Result;

/// Key-value abstraction over the client-local persistence slots
///
/// Implementations use interior mutability so a single port can be shared
/// between the credential store and the session manager.
pub trait StoragePort: Send + Sync {
    /// Read the raw value stored under a key
    fn get(&self, key: &str) -> Option<String>;

    /// Store a raw value under a key, replacing any previous value
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Remove a key and its value; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}
