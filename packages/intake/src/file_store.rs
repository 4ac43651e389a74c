//! # Filesystem-backed slot store
//!
//! [`FileStore`] is a [`SlotStore`] that keeps each slot in its own JSON file
//! so the recovery log survives restarts on native targets.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── formSubmissions.json   # one file per slot key
//! ```
//!
//! ## Platform data directories
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/scholarship-intake/` |
//! | Linux | `~/.local/share/scholarship-intake/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\scholarship-intake\` |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::recovery::{SlotStore, StoreError};

/// Filesystem-backed SlotStore.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl SlotStore for FileStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}
