//! AuthPortal Library
//!
//! Client-side demo authentication portal core: credential storage,
//! session management, page-access guarding, and the login and
//! registration workflows, all over an injected key-value storage port.
//! There is no server; every slot lives in client-local storage.

pub mod config;
pub mod credentials;
pub mod forms;
pub mod guard;
pub mod hydrate;
pub mod portal;
pub mod session;
pub mod storage;

pub use config::PortalConfig;
pub use portal::{PageLoad, Portal};
pub use storage::{FileStorage, MemoryStorage, StoragePort};

/// Common error type for the portal core
pub type Result<T> = anyhow::Result<T>;
