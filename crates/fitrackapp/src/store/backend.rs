use crate::error::Result;
use crate::model::Collection;
use std::path::PathBuf;

/// Abstract interface for raw collection I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (encoding, typed records, initialization).
pub trait StorageBackend {
    /// Read the encoded collection.
    /// Returns Ok(None) if the collection has never been written.
    /// Returns Err only when existing storage cannot be read.
    fn read(&self, collection: Collection) -> Result<Option<Vec<u8>>>;

    /// Replace the encoded collection.
    /// MUST be atomic (e.g. write to tmp then rename): either the whole new
    /// content is visible afterwards or the old content is left untouched.
    fn write(&self, collection: Collection, content: &[u8]) -> Result<()>;

    /// Check whether the collection has been written at least once.
    fn exists(&self, collection: Collection) -> bool;

    /// Get the "file path" of the collection.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self, collection: Collection) -> PathBuf;
}
