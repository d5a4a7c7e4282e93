use std::collections::HashMap;
use std::sync::RwLock;
use super::SessionStore;
use crate::utils::error::{ApiError, ApiResult};

/// Store em memória, usado em testes e em execuções sem persistência
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| ApiError::storage_error("lock do store em memória envenenado"))?;
        Ok(slots.get(key).cloned())
    }

    fn apply(&self, changes: &[(&str, Option<&str>)]) -> ApiResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| ApiError::storage_error("lock do store em memória envenenado"))?;

        for (key, value) in changes {
            match value {
                Some(v) => {
                    slots.insert(key.to_string(), v.to_string());
                }
                None => {
                    slots.remove(*key);
                }
            }
        }
        Ok(())
    }
}
