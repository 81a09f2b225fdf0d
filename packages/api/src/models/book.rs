//! # Book schemas
//!
//! | Struct | Used for |
//! |--------|----------|
//! | [`Book`] | A book in the user's library (`GET /books`, `GET /books/:id`, `POST /books` response). |
//! | [`NewBook`] | Body of `POST /books`. |
//! | [`BookUpdate`] | Body of `PUT /books/:id`; only the fields that are set are sent. |
//! | [`CatalogBook`] | A hit from the external catalog search (`GET /books/search?q=`). Uses `coverUrl` on the wire. |

use serde::{Deserialize, Serialize};

use super::lenient;

/// Status shown when a book has none.
pub const DEFAULT_STATUS: &str = "reading";

/// Statuses offered by the book detail page.
pub const STATUS_OPTIONS: [&str; 3] = ["reading", "finished", "want-to-read"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub author: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub google_books_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub note_count: u32,
}

impl Book {
    /// Status label, defaulting to [`DEFAULT_STATUS`].
    pub fn status_label(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_STATUS)
    }

    /// Case-insensitive substring match against title or author.
    /// An empty query matches every book.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.author.to_lowercase().contains(&needle)
    }

    pub fn cover(&self) -> Option<&str> {
        self.cover_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub cover_url: Option<String>,
    pub google_books_id: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl BookUpdate {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogBook {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub author: String,
    #[serde(default, rename = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CatalogBook {
    /// The `POST /books` body that adds this hit to the library.
    pub fn to_new_book(&self) -> NewBook {
        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            cover_url: self.cover_url.clone(),
            google_books_id: Some(self.id.clone()),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}
