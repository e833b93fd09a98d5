//! Key-value backends for persisted blueprints.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use super::error::BlueprintError;

/// A string key-value store. Writes replace the whole value.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, BlueprintError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), BlueprintError>;
}

/// Process-local store, lost on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlueprintError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), BlueprintError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Stores each key as `<key>.json` inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlueprintError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BlueprintError::Storage(format!("{}: {}", path.display(), e))),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), BlueprintError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| BlueprintError::Storage(format!("{}: {}", self.dir.display(), e)))?;
        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| BlueprintError::Storage(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Value written");
        Ok(())
    }
}
