//! File-backed key-value store
//!
//! Each key is kept in its own `<key>.json` file under a base directory.
//! Writes land in a temporary sibling file first and are renamed into place,
//! so a reader never sees a half-written value.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shared::{Component, tracker_debug};

use crate::error::{TrackerError, TrackerResult};
use crate::traits::KeyValueStore;

/// Real file system implementation of [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Default data directory
    pub const DEFAULT_DIR: &'static str = "./data";

    pub fn new() -> Self {
        Self::with_base_dir(PathBuf::from(Self::DEFAULT_DIR))
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn value_path(&self, key: &str) -> TrackerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(TrackerError::persistence(key, "key must be alphanumeric, '_' or '-'"));
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TrackerError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        let path = self.value_path(key)?;
        fs::create_dir_all(&self.base_dir)?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;

        tracker_debug!(Component::Backend, "Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
