use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::recovery::{SlotStore, StoreError};

/// In-memory SlotStore for tests and platforms without local storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        slots.insert(key.to_string(), value);
        Ok(())
    }
}
