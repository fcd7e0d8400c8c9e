use std::path::PathBuf;

/// Key under which the review document is stored.
pub const REVIEW_STATE_KEY: &str = "redesign-review-state";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{key}` to {path}: {source}")]
    Write {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Durable named-payload storage.
///
/// `load` never fails: a missing or unreadable entry is reported as `None`.
/// `save` replaces any previous value under the same key.
pub trait StateStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StorageError>;
}

impl<S: StateStorage + ?Sized> StateStorage for Box<S> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StorageError> {
        (**self).save(key, payload)
    }
}
