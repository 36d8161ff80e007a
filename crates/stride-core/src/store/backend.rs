//! In-memory and JSON file key-value backends.

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use super::KvBackend;
use crate::error::{PlannerError, Result};

/// Key-value backend held entirely in memory.
///
/// Useful for tests and for callers that want the store semantics without
/// touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, Value>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Key-value backend persisted as one pretty-printed JSON object on disk.
///
/// Each `set` reads the whole file, replaces one key and writes the whole
/// file back. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(PlannerError::file_system(&self.path, e)),
        };
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PlannerError::file_system(parent, e))?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents).map_err(|e| PlannerError::file_system(&self.path, e))
    }
}

impl KvBackend for JsonFileBackend {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries)
    }
}
