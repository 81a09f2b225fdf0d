pub mod models;
pub mod client;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use client::{ClientStore, KeyValueStore, CREDENTIAL_KEY, THEME_KEY};
pub use models::{Credential, Theme};
