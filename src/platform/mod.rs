//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web)
//! - Clock-derived RNG seeds

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::persistence::{KeyValueStore, StoreError};

    /// `window.localStorage`
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        /// `None` when storage is disabled (private mode, sandboxed iframe)
        pub fn open() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok()??;
            Some(Self { storage })
        }
    }

    fn rejected(err: wasm_bindgen::JsValue) -> StoreError {
        StoreError::Rejected(format!("{err:?}"))
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.storage.get_item(key).map_err(rejected)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.storage.set_item(key, value).map_err(rejected)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.storage.remove_item(key).map_err(rejected)
        }
    }

    pub fn clock_seed() -> u64 {
        js_sys::Date::now() as u64
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    pub fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{LocalStorage, clock_seed};

#[cfg(not(target_arch = "wasm32"))]
pub use native::clock_seed;
