//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger installation
//! - Default storage backend

use crate::persistence::KeyValueStore;

/// Install the platform logger. Call once from the entry point.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Storage used when the caller has no preference
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Box<dyn KeyValueStore> {
    Box::new(crate::persistence::LocalStorageStore::new(""))
}

/// Native: `scores.json` in the working directory, falling back to memory
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Box<dyn KeyValueStore> {
    use crate::persistence::{JsonFileStore, MemoryStore};

    match JsonFileStore::open("scores.json") {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Score file unusable ({}), high score will not persist", e);
            Box::new(MemoryStore::new())
        }
    }
}
