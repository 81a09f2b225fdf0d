//! # ClientStore: typed access to browser persistence
//!
//! [`ClientStore`] wraps any [`KeyValueStore`] and owns the key layout, so the
//! rest of the application never touches raw storage keys. The same code runs
//! against [`crate::MemoryStore`] (native builds and tests) and
//! [`crate::LocalStore`] (`window.localStorage` on the web).
//!
//! Storage is synchronous on every backend we target, so unlike most of the
//! client the trait is not async. Implementations swallow their own errors: an
//! unavailable store behaves like an empty one.

use crate::models::{Credential, Theme};

/// Key under which the bearer token is persisted.
pub const CREDENTIAL_KEY: &str = "token";
/// Key under which the theme preference is persisted.
pub const THEME_KEY: &str = "theme";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Credential and preference storage on top of a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct ClientStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ClientStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The stored bearer token, if any. Blank values are treated as absent.
    pub fn credential(&self) -> Option<Credential> {
        self.backend
            .get(CREDENTIAL_KEY)
            .map(Credential::new)
            .filter(|c| !c.is_blank())
    }

    pub fn set_credential(&self, credential: &Credential) {
        self.backend.set(CREDENTIAL_KEY, credential.as_str());
    }

    pub fn clear_credential(&self) {
        self.backend.remove(CREDENTIAL_KEY);
    }

    pub fn theme(&self) -> Theme {
        self.backend
            .get(THEME_KEY)
            .map(|v| Theme::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.backend.set(THEME_KEY, theme.as_str());
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}
