//! Wire schemas for the backend's resources.
//!
//! Every response is decoded into one of these types at the client boundary;
//! a body that does not fit surfaces as [`crate::ApiError::Decode`] instead of
//! reaching a view half-formed.

mod auth;
mod book;
pub(crate) mod lenient;
mod note;
mod tag;
mod user;

pub use auth::{Ack, AuthResponse};
pub use book::{Book, BookUpdate, CatalogBook, NewBook, DEFAULT_STATUS, STATUS_OPTIONS};
pub use note::{Note, NoteInput};
pub use tag::Tag;
pub use user::User;
