/// In-process backend, for tests and for hosts that persist elsewhere

use std::collections::HashMap;
use std::sync::Mutex;

use crate::store::StateBackend;
use crate::{Error, Result};

/// Backend that keeps values in a mutex-guarded map.
pub struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend {
            values: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StateBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let g = self
            .values
            .lock()
            .map_err(|_| Error::StorageError("memory backend lock poisoned".to_string()))?;
        Ok(g.get(key).cloned())
    }

    fn save(&self, key: &str, value: Option<&str>) -> Result<()> {
        let mut g = self
            .values
            .lock()
            .map_err(|_| Error::StorageError("memory backend lock poisoned".to_string()))?;
        match value {
            Some(v) => {
                g.insert(key.to_string(), v.to_string());
            }
            None => {
                g.remove(key);
            }
        }
        Ok(())
    }
}
