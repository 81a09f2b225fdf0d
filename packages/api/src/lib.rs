//! # API crate: typed HTTP client for the reading-journal backend
//!
//! Every page of the front-end talks to the backend through this crate. It owns
//! the wire schemas, the request plumbing, and the session helpers that tie the
//! persisted credential to the `/auth/*` endpoints.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`config`] | | Backend base path resolution (build-time env, runtime env, `/api` default) |
//! | [`transport`] | | [`Transport`] trait, [`ApiRequest`]/[`ApiResponse`], and the reqwest-backed [`HttpTransport`] |
//! | [`client`] | | [`ApiClient`]: joins the base path, dispatches, maps statuses to [`ApiError`], decodes JSON |
//! | [`auth`], [`books`], [`notes`], [`tags`] | | Endpoint groups, one `impl ApiClient` block per resource |
//! | [`models`] | | `Serialize + Deserialize` schemas validated at the response boundary |
//! | [`session`] | | [`AuthState`] and the login / verify / logout / re-check flows |
//! | [`testing`] | `testing` | [`testing::FakeBackend`], an in-memory backend implementing [`Transport`] |
//!
//! ## Credentials
//!
//! The transport never reads storage. Each endpoint method takes the current
//! [`Credential`] as an argument and the request carries it as a bearer header;
//! callers obtain it from [`store::ClientStore::credential`]. The helpers in
//! [`session`] do that wiring for the auth flows.

pub mod auth;
pub mod books;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod notes;
pub mod session;
pub mod tags;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    Ack, AuthResponse, Book, BookUpdate, CatalogBook, NewBook, Note, NoteInput, Tag, User,
};
pub use session::AuthState;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

pub use store::Credential;
