//! Browser store backed by LocalStorage

use super::KeyValueStore;

/// Stores integers as decimal strings under `<prefix><key>`
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    prefix: String,
}

impl LocalStorageStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<i64> {
        let storage = Self::storage()?;
        let raw = storage.get_item(&format!("{}{}", self.prefix, key)).ok()??;
        raw.trim().parse().ok()
    }

    fn set(&mut self, key: &str, value: i64) {
        match Self::storage() {
            Some(storage) => {
                if storage
                    .set_item(&format!("{}{}", self.prefix, key), &value.to_string())
                    .is_err()
                {
                    log::warn!("LocalStorage rejected write for {}", key);
                }
            }
            None => log::warn!("LocalStorage unavailable, {} not saved", key),
        }
    }
}
