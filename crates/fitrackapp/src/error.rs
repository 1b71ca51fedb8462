use crate::model::Collection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitrackError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: u64 },

    #[error("Storage for {collection} is corrupt: {reason}")]
    StorageCorrupt {
        collection: Collection,
        reason: String,
    },

    #[error("Storage for {collection} is unavailable: {source}")]
    StorageUnavailable {
        collection: Collection,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot compute a mean over no values")]
    EmptyInput,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Api(String),
}

impl FitrackError {
    pub fn user_not_found(id: u64) -> Self {
        FitrackError::NotFound { kind: "User", id }
    }

    pub fn corrupt(collection: Collection, reason: impl ToString) -> Self {
        FitrackError::StorageCorrupt {
            collection,
            reason: reason.to_string(),
        }
    }

    pub fn unavailable(collection: Collection, source: std::io::Error) -> Self {
        FitrackError::StorageUnavailable { collection, source }
    }
}

pub type Result<T> = std::result::Result<T, FitrackError>;
