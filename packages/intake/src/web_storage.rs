//! # Browser `localStorage` slot store
//!
//! [`WebStorage`] is the [`SlotStore`] used on the web platform. Each slot is
//! one `localStorage` item, which is where the recovery log has always lived,
//! so entries written by earlier versions of the form stay readable.
//!
//! `localStorage` can be missing (private browsing, disabled storage) or full
//! (quota exceeded). Both surface as [`StoreError::Unavailable`]; the caller
//! decides whether that matters.

use crate::recovery::{SlotStore, StoreError};

/// `window.localStorage` backed SlotStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl SlotStore for WebStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, &value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
