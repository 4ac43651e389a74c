//! Shared submitter constructor for all platforms.
//!
//! [`make_submitter`] wires the HTTP transport to the platform's recovery
//! store and timer:
//! - **Web** (WASM + `web` feature): `localStorage` via [`intake::WebStorage`],
//!   `gloo-timers` for the timeout
//! - **Native**: `<data_dir>/scholarship-intake/` via [`intake::FileStore`],
//!   `tokio::time` for the timeout

use std::time::Duration;

use api::HttpTransport;
use intake::{IntakeConfig, Submitter, Timer, TracingLogger};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = intake::WebStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = intake::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = intake::FileStore;

pub type PlatformSubmitter = Submitter<HttpTransport, PlatformStore, PlatformTimer, TracingLogger>;

/// Sleeps on whatever clock the platform's executor drives.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformTimer;

impl Timer for PlatformTimer {
    async fn sleep(&self, duration: Duration) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}

/// Recovery-log store for this platform.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        intake::WebStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        intake::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("scholarship-intake");
        intake::FileStore::new(base)
    }
}

pub fn make_submitter(config: &IntakeConfig) -> PlatformSubmitter {
    Submitter::new(
        config,
        HttpTransport::new(),
        make_store(),
        PlatformTimer,
        TracingLogger::new(config.logging.level),
    )
}
