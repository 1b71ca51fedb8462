//! # Storage Layer
//!
//! This module defines the storage abstraction for fitrack. The [`DataStore`] trait
//! is the `{load, save}` interface every command is written against, so the
//! application can run over different storage backends.
//!
//! ## Collections
//!
//! State is three flat collections (users, plans, logs). A collection is
//! always read whole and written whole:
//!
//! - **Load** returns the full ordered sequence. A collection that has never
//!   been written is initialized to an empty sequence, and that empty
//!   sequence is persisted before returning.
//! - **Save** replaces the full sequence, preserving order.
//!
//! There is no cache across operations and no locking. Fitrack assumes one
//! session at a time; concurrent writers would be last-write-wins per file.
//!
//! ## Failure Modes
//!
//! - Existing data that cannot be read or decoded → `StorageCorrupt`.
//!   Load never substitutes an empty or partial sequence.
//! - Data that cannot be written → `StorageUnavailable`. Writes are atomic,
//!   so the previous content survives a failed save.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store over [`fs_backend::FsBackend`].
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── fitrack.toml   # Configuration
//! ├── users.json     # [User]
//! ├── plans.json     # [Plan]
//! └── logs.json      # [Log]
//! ```

use crate::error::Result;
use crate::model::{Collection, Record};
use std::path::PathBuf;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

/// Abstract interface for collection storage.
pub trait DataStore {
    /// Load a whole collection, initializing it empty if it does not exist yet.
    fn load<R: Record>(&self) -> Result<Vec<R>>;

    /// Replace a whole collection.
    fn save<R: Record>(&mut self, records: &[R]) -> Result<()>;

    /// Whether the collection has been initialized
    fn exists(&self, collection: Collection) -> bool;

    /// Get the storage location of a collection (for file-based stores)
    fn location(&self, collection: Collection) -> PathBuf;
}
