/// JSON-file backend: one object holding every key

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::store::StateBackend;
use crate::{Error, Result};

/// Persists state as a single JSON object, e.g. `{"selected-period": "2024"}`.
///
/// A missing file reads as empty. Every save rewrites the whole file through
/// a sibling temp file and a rename.
pub struct FileBackend {
    path: PathBuf,
    // serializes read-modify-write cycles from this process
    write_lock: Mutex<()>,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBackend {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(Error::StorageError(format!(
                    "failed to read `{}`: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&data).map_err(|e| {
            Error::StorageError(format!(
                "state file `{}` is not a JSON object of strings: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string_pretty(values)
            .map_err(|e| Error::StorageError(format!("failed to encode state: {}", e)))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StateBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: Option<&str>) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::StorageError("file backend lock poisoned".to_string()))?;
        let mut values = self.read_all()?;
        match value {
            Some(v) => {
                values.insert(key.to_string(), v.to_string());
            }
            None => {
                values.remove(key);
            }
        }
        self.write_all(&values)?;
        log::debug!("wrote state file {}", self.path.display());
        Ok(())
    }
}
