//! Note endpoints: listed and created under a book, edited and deleted by id.

use serde::Deserialize;
use store::Credential;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{lenient, Ack, Note, NoteInput};
use crate::transport::{ApiRequest, Transport};

#[derive(Deserialize)]
struct NoteList {
    #[serde(deserialize_with = "lenient::list_or_empty")]
    notes: Vec<Note>,
}

#[derive(Deserialize)]
struct SingleNote {
    note: Note,
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_notes(
        &self,
        credential: Option<&Credential>,
        book_id: &str,
    ) -> Result<Vec<Note>, ApiError> {
        let request = ApiRequest::get(format!("/books/{book_id}/notes")).bearer(credential);
        Ok(self.fetch::<NoteList>(request).await?.notes)
    }

    pub async fn create_note(
        &self,
        credential: Option<&Credential>,
        book_id: &str,
        note: &NoteInput,
    ) -> Result<Note, ApiError> {
        let request = ApiRequest::post(format!("/books/{book_id}/notes"))
            .json(note)?
            .bearer(credential);
        Ok(self.fetch::<SingleNote>(request).await?.note)
    }

    pub async fn update_note(
        &self,
        credential: Option<&Credential>,
        note_id: &str,
        note: &NoteInput,
    ) -> Result<Note, ApiError> {
        let request = ApiRequest::put(format!("/notes/{note_id}"))
            .json(note)?
            .bearer(credential);
        Ok(self.fetch::<SingleNote>(request).await?.note)
    }

    pub async fn delete_note(
        &self,
        credential: Option<&Credential>,
        note_id: &str,
    ) -> Result<Ack, ApiError> {
        let request = ApiRequest::delete(format!("/notes/{note_id}")).bearer(credential);
        self.acknowledge(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{CannedResponse, FakeBackend};
    use crate::{ApiClient, ApiConfig, Credential, NoteInput};

    #[tokio::test]
    async fn test_notes_with_loose_timestamps_still_list() {
        let body = r#"{"notes": [
            {"id": 1, "content": "first", "created_at": "2025-03-04T10:15:00Z"},
            {"id": 2, "content": "no date"},
            {"id": 3, "content": "naive", "created_at": "2025-03-05 08:00:00"}
        ]}"#;
        let api = ApiClient::new(ApiConfig::default(), CannedResponse::new(200, body));
        let notes = api
            .list_notes(Some(&Credential::new("t")), "4")
            .await
            .unwrap();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[1].created_on(), None);
        assert_eq!(notes[2].created_on().as_deref(), Some("Mar 5, 2025"));
    }

    #[tokio::test]
    async fn test_created_note_without_timestamp_is_accepted() {
        let body = r#"{"note": {"id": 5, "book_id": 4, "content": "saved"}}"#;
        let api = ApiClient::new(ApiConfig::default(), CannedResponse::new(201, body));
        let input = NoteInput {
            content: "saved".into(),
            ..NoteInput::default()
        };
        let note = api.create_note(None, "4", &input).await.unwrap();
        assert_eq!(note.id, "5");
        assert_eq!(note.created_at, None);
    }

    #[tokio::test]
    async fn test_note_lifecycle_updates_book_count() {
        let backend = FakeBackend::new()
            .with_account("ada@example.com", "hunter22")
            .with_book("ada@example.com", "Dune", "Frank Herbert");
        let api = ApiClient::new(ApiConfig::default(), backend.clone());
        let token = api
            .login(None, "ada@example.com", "hunter22")
            .await
            .unwrap()
            .token;
        let token = token.as_ref();
        let book = api.list_books(token).await.unwrap().remove(0);

        let input = NoteInput {
            content: "Fear is the mind-killer.".into(),
            emotion: Some("Inspired".into()),
            page_number: Some(8),
            tags: vec!["fear".into(), "mindset".into()],
        };
        let note = api.create_note(token, &book.id, &input).await.unwrap();
        assert_eq!(note.book_id, book.id);
        assert_eq!(note.tags, vec!["fear", "mindset"]);

        assert_eq!(api.get_book(token, &book.id).await.unwrap().note_count, 1);

        let edited = NoteInput {
            content: "Fear is the little-death.".into(),
            ..NoteInput::from(&note)
        };
        let note = api.update_note(token, &note.id, &edited).await.unwrap();
        assert_eq!(note.content, "Fear is the little-death.");
        assert_eq!(note.page_number, Some(8));

        api.delete_note(token, &note.id).await.unwrap();
        assert!(api.list_notes(token, &book.id).await.unwrap().is_empty());
    }
}
