//! Services every view needs, built once in the composition root and handed
//! down through Dioxus context.

use api::{ApiClient, Credential, HttpTransport};
use dioxus::prelude::*;
use store::ClientStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The backend client and the browser store.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub client: ApiClient<HttpTransport>,
    pub store: ClientStore<PlatformStore>,
}

impl AppContext {
    pub fn new(client: ApiClient<HttpTransport>, store: ClientStore<PlatformStore>) -> Self {
        Self { client, store }
    }

    /// Client for the configured backend over the platform store.
    pub fn from_env() -> Self {
        Self::new(
            ApiClient::from_env(),
            ClientStore::new(PlatformStore::default()),
        )
    }

    /// The credential to attach to the next request.
    pub fn credential(&self) -> Option<Credential> {
        self.store.credential()
    }
}

/// Get the application context provided at the root.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}
