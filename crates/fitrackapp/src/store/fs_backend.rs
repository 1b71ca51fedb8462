use super::backend::StorageBackend;
use crate::error::{FitrackError, Result};
use crate::model::Collection;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

/// Stores every collection as `<root>/<collection>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self, collection: Collection) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)
                .map_err(|e| FitrackError::unavailable(collection, e))?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, collection: Collection) -> Result<Option<Vec<u8>>> {
        let path = self.location(collection);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).map_err(|e| FitrackError::corrupt(collection, e))?;
        Ok(Some(bytes))
    }

    fn write(&self, collection: Collection, content: &[u8]) -> Result<()> {
        self.ensure_dir(collection)?;

        let target = self.location(collection);
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", collection.name(), Uuid::new_v4()));

        // Atomic write: the target is only ever replaced by a complete file
        if let Err(e) = fs::write(&tmp, content) {
            let _ = fs::remove_file(&tmp);
            return Err(FitrackError::unavailable(collection, e));
        }
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(FitrackError::unavailable(collection, e));
        }

        debug!(path = %target.display(), bytes = content.len(), "collection written");
        Ok(())
    }

    fn exists(&self, collection: Collection) -> bool {
        self.location(collection).exists()
    }

    fn location(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }
}
