//! Storage adapters for the review document.
//!
//! `FileStorage` keeps one `<key>.json` file per key inside a directory and
//! replaces it through a sibling temp file so a crash mid-write never leaves a
//! truncated payload behind. `MemoryStorage` backs tests and ephemeral runs.

use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use super::paths::create_dir_if_missing;
use crate::kernel::services::ports::{StateStorage, StorageError};

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl StateStorage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(payload) => Some(payload),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read stored payload");
                None
            }
        }
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let write_err = |source| StorageError::Write {
            key: key.to_string(),
            path: path.clone(),
            source,
        };

        create_dir_if_missing(&self.dir).map_err(write_err)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, payload).map_err(write_err)?;
        if let Err(err) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(write_err(err));
        }
        tracing::debug!(path = %path.display(), bytes = payload.len(), "payload written");
        Ok(())
    }
}

fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` without counting as a write.
    pub fn with_entry(mut self, key: impl Into<String>, payload: impl Into<String>) -> Self {
        self.entries.insert(key.into(), payload.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), payload.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/storage.rs"]
mod tests;
