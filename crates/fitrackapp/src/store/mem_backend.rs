use super::backend::StorageBackend;
use crate::error::{FitrackError, Result};
use crate::model::Collection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since fitrack is single-threaded.
pub struct MemBackend {
    collections: RefCell<HashMap<Collection, Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            collections: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to inspect the stored bytes of a collection.
    pub fn raw(&self, collection: Collection) -> Option<Vec<u8>> {
        self.collections.borrow().get(&collection).cloned()
    }

    /// Test helper to plant arbitrary (possibly malformed) content.
    pub fn set_raw(&self, collection: Collection, content: &[u8]) {
        self.collections
            .borrow_mut()
            .insert(collection, content.to_vec());
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, collection: Collection) -> Result<Option<Vec<u8>>> {
        Ok(self.raw(collection))
    }

    fn write(&self, collection: Collection, content: &[u8]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(FitrackError::unavailable(
                collection,
                io::Error::other("Simulated write error"),
            ));
        }
        self.set_raw(collection, content);
        Ok(())
    }

    fn exists(&self, collection: Collection) -> bool {
        self.collections.borrow().contains_key(&collection)
    }

    fn location(&self, collection: Collection) -> PathBuf {
        PathBuf::from(format!("memory://{}", collection.file_name()))
    }
}
