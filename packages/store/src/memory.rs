use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::client::KeyValueStore;

/// In-memory KeyValueStore for testing and native builds.
///
/// Clones share the same map, so a store handed to the app context and one
/// kept by a test observe each other's writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientStore, CREDENTIAL_KEY};
    use crate::models::{Credential, Theme};

    #[test]
    fn test_credential_lifecycle() {
        let store = ClientStore::new(MemoryStore::new());

        // Initially nothing stored
        assert!(store.credential().is_none());

        store.set_credential(&Credential::new("tok-1"));
        assert_eq!(store.credential(), Some(Credential::new("tok-1")));

        // Overwrite on a later login
        store.set_credential(&Credential::new("tok-2"));
        assert_eq!(store.credential().unwrap().as_str(), "tok-2");

        store.clear_credential();
        assert!(store.credential().is_none());
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_blank_credential_is_absent() {
        let backend = MemoryStore::new();
        backend.set(CREDENTIAL_KEY, "   ");
        let store = ClientStore::new(backend);
        assert!(store.credential().is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let backend = MemoryStore::new();
        let app_side = ClientStore::new(backend.clone());
        let test_side = ClientStore::new(backend);

        app_side.set_credential(&Credential::new("shared"));
        assert_eq!(test_side.credential().unwrap().as_str(), "shared");
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let store = ClientStore::new(MemoryStore::new());
        assert_eq!(store.theme(), Theme::Light);

        store.set_theme(Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        // Theme and credential live under different keys
        assert!(store.credential().is_none());
    }
}
