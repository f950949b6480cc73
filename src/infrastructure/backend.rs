//! Key/value persistence backends

use crate::error::{DiaryError, Result};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable key/value storage for serialized state
pub trait PersistenceBackend {
    /// Read the value stored under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory backend for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Backend pre-seeded with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut backend = MemoryBackend::new();
        backend.values.insert(key.to_string(), value.to_string());
        backend
    }
}

impl PersistenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: PathBuf) -> Self {
        FileBackend { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the value for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(DiaryError::Storage(format!("Invalid storage key: '{}'", key)))
        }
    }
}

impl PersistenceBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::validate_key(key)?;
        let path = self.path_for(key);

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!("Read {} bytes from {}", contents.len(), path.display());
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DiaryError::Io(e)),
        }
    }

    /// Best-effort atomic replace: write a sibling temp file, then rename it
    /// over the destination.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::validate_key(key)?;
        let path = self.path_for(key);

        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.dir)?;
            let tmp_path = self
                .dir
                .join(format!("{}.json.tmp-{}", key, std::process::id()));
            fs::write(&tmp_path, value)?;
            if cfg!(windows) && path.exists() {
                fs::remove_file(&path)?;
            }
            fs::rename(&tmp_path, &path)
        };

        write().map_err(|e| {
            DiaryError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
