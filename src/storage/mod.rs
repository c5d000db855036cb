//! Storage Module
//!
//! Key-value storage port backing the credential and session slots.

pub mod file;
pub mod memory;
pub mod port;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use port::StoragePort;
