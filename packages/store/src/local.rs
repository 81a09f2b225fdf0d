//! # localStorage store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through `web-sys`.
//!
//! `LocalStore` is a zero-size struct that looks up the storage handle on every
//! call; `web_sys::Storage` is not `Send` and the lookup is cheap.
//!
//! All methods silently swallow errors. Private browsing modes and quota
//! errors make `localStorage` throw; the client then simply behaves as if no
//! credential were stored and the backend is the judge of the session.

use crate::client::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
