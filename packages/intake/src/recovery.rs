//! # Recovery log — local backstop for failed submissions
//!
//! When a submission does not reach the write endpoint, the attempted payload
//! is appended to a JSON array kept in a single local storage slot (key
//! [`RECOVERY_SLOT`], `"formSubmissions"`). Entries are never pruned; the log
//! is an audit trail someone can inspect or replay by hand later.
//!
//! ## [`SlotStore`] trait
//!
//! Reads and writes whole string values under a key. Implementations:
//!
//! | Store | Backing |
//! |-------|---------|
//! | [`crate::MemoryStore`] | a `HashMap`, for tests and as a fallback |
//! | [`crate::FileStore`] | `<base>/<key>.json` on disk (desktop, native) |
//! | `WebStorage` | browser `localStorage` (wasm + `web` feature) |
//!
//! ## Entry format
//!
//! ```json
//! [{ "data": { "lastName": "...", ... }, "familyMembers": [ ... ],
//!    "timestamp": "2024-01-31T22:00:00.000Z", "error": "..." }]
//! ```

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::payload::{iso_timestamp, ApplicantRow, MemberRow, SubmissionRecord};

/// Storage key the log lives under.
pub const RECOVERY_SLOT: &str = "formSubmissions";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),
    #[error("local storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("recovery log is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Async key/value slots holding whole strings.
pub trait SlotStore {
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>>;
    fn write(&self, key: &str, value: String) -> impl Future<Output = Result<(), StoreError>>;
}

/// One failed submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryEntry {
    pub data: ApplicantRow,
    pub family_members: Vec<MemberRow>,
    pub timestamp: String,
    pub error: String,
}

impl RecoveryEntry {
    pub fn new(record: &SubmissionRecord, at: DateTime<Utc>, error: impl Into<String>) -> Self {
        Self {
            data: record.applicant_row(),
            family_members: record.member_rows(),
            timestamp: iso_timestamp(at),
            error: error.into(),
        }
    }
}

/// Append-only log of [`RecoveryEntry`]s over a [`SlotStore`].
pub struct RecoveryLog<S: SlotStore> {
    store: S,
}

impl<S: SlotStore> RecoveryLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every entry, oldest first. An empty slot is an empty log.
    pub async fn entries(&self) -> Result<Vec<RecoveryEntry>, StoreError> {
        match self.store.read(RECOVERY_SLOT).await? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.entries().await?.len())
    }

    /// Read, push, write back. Returns the new entry count.
    pub async fn append(&self, entry: RecoveryEntry) -> Result<usize, StoreError> {
        let mut entries = self.entries().await?;
        entries.push(entry);
        let raw = serde_json::to_string(&entries)?;
        self.store.write(RECOVERY_SLOT, raw).await?;
        Ok(entries.len())
    }
}
