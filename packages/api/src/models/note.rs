use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// An annotation attached to a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::id")]
    pub book_id: String,
    pub content: String,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub page_number: Option<u32>,
    #[serde(default, deserialize_with = "lenient::list_or_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Creation date for display, e.g. `Mar 4, 2025`.
    pub fn created_on(&self) -> Option<String> {
        self.created_at
            .map(|at| at.format("%b %-d, %Y").to_string())
    }

    pub fn emotion_label(&self) -> Option<&str> {
        self.emotion.as_deref().filter(|e| !e.trim().is_empty())
    }
}

/// Body of `POST /books/:id/notes` and `PUT /notes/:id`.
///
/// Unset optional fields are sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteInput {
    pub content: String,
    pub emotion: Option<String>,
    pub page_number: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Note> for NoteInput {
    fn from(note: &Note) -> Self {
        Self {
            content: note.content.clone(),
            emotion: note.emotion.clone(),
            page_number: note.page_number,
            tags: note.tags.clone(),
        }
    }
}
