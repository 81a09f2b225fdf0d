//! Library filtering and the small display rules shared by book pages.

use api::{ApiClient, ApiError, Book, CatalogBook, Note, Transport};
use store::{ClientStore, KeyValueStore};

/// Books whose title or author contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn filter_books(books: &[Book], query: &str) -> Vec<Book> {
    let query = query.trim();
    books.iter().filter(|b| b.matches(query)).cloned().collect()
}

/// Hint under the "No books found" heading.
pub fn empty_library_hint(query: &str) -> &'static str {
    if query.trim().is_empty() {
        "Start by adding your first book"
    } else {
        "Try a different search term"
    }
}

/// `1 note`, `3 notes`.
pub fn notes_label(count: usize) -> String {
    if count == 1 {
        "1 note".to_string()
    } else {
        format!("{count} notes")
    }
}

/// Fetch a book and its notes concurrently.
pub async fn load_book_detail<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    book_id: &str,
) -> Result<(Book, Vec<Note>), ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let credential = store.credential();
    let (book, notes) = futures::join!(
        client.get_book(credential.as_ref(), book_id),
        client.list_notes(credential.as_ref(), book_id),
    );
    Ok((book?, notes?))
}

/// Run a catalog search. `None` for a blank query, which is ignored; a failed
/// search counts as no results.
pub async fn search_catalog<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    query: &str,
) -> Option<Vec<CatalogBook>>
where
    T: Transport,
    S: KeyValueStore,
{
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let credential = store.credential();
    match client.search_catalog(credential.as_ref(), query).await {
        Ok(hits) => Some(hits),
        Err(e) => {
            tracing::error!(%query, "search failed: {e}");
            Some(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::testing::FakeBackend;
    use api::ApiConfig;
    use store::MemoryStore;

    fn book(id: &str, title: &str, author: &str) -> Book {
        Book {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            cover_url: None,
            google_books_id: None,
            status: None,
            note_count: 0,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("1", "Dune", "Frank Herbert"),
            book("2", "Emma", "Jane Austen"),
            book("3", "Persuasion", "Jane Austen"),
        ]
    }

    #[test]
    fn test_filter_matches_title_or_author_ignoring_case() {
        let hits = filter_books(&shelf(), "AUSTEN");
        assert_eq!(hits.len(), 2);

        let hits = filter_books(&shelf(), "dun");
        assert_eq!(hits, vec![book("1", "Dune", "Frank Herbert")]);

        assert!(filter_books(&shelf(), "tolkien").is_empty());
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(filter_books(&shelf(), ""), shelf());
        assert_eq!(filter_books(&shelf(), "   "), shelf());
    }

    #[test]
    fn test_labels() {
        assert_eq!(notes_label(0), "0 notes");
        assert_eq!(notes_label(1), "1 note");
        assert_eq!(notes_label(2), "2 notes");
        assert_eq!(empty_library_hint(""), "Start by adding your first book");
        assert_eq!(empty_library_hint("x"), "Try a different search term");
    }

    async fn signed_in(backend: &FakeBackend) -> (ApiClient<FakeBackend>, ClientStore<MemoryStore>) {
        let client = ApiClient::new(ApiConfig::default(), backend.clone());
        let store = ClientStore::new(MemoryStore::new());
        api::session::sign_in(&client, &store, "ada@example.com", "hunter22")
            .await
            .unwrap();
        (client, store)
    }

    #[tokio::test]
    async fn test_book_detail_fetches_book_and_notes() {
        let backend = FakeBackend::new()
            .with_account("ada@example.com", "hunter22")
            .with_book("ada@example.com", "Dune", "Frank Herbert");
        let (client, store) = signed_in(&backend).await;
        let id = backend.books()[0].id.clone();

        let (book, notes) = load_book_detail(&client, &store, &id).await.unwrap();
        assert_eq!(book.title, "Dune");
        assert!(notes.is_empty());

        let paths: Vec<String> = backend.requests().into_iter().map(|r| r.path).collect();
        assert!(paths.contains(&format!("/books/{id}")));
        assert!(paths.contains(&format!("/books/{id}/notes")));
    }

    #[tokio::test]
    async fn test_missing_book_is_not_found() {
        let backend = FakeBackend::new().with_account("ada@example.com", "hunter22");
        let (client, store) = signed_in(&backend).await;
        let err = load_book_detail(&client, &store, "404").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_blank_search_is_ignored_and_failures_are_empty() {
        let backend = FakeBackend::new().with_account("ada@example.com", "hunter22");
        let (client, store) = signed_in(&backend).await;
        let before = backend.requests().len();

        assert_eq!(search_catalog(&client, &store, "  ").await, None);
        assert_eq!(backend.requests().len(), before);

        backend.set_offline(true);
        assert_eq!(search_catalog(&client, &store, "dune").await, Some(Vec::new()));
    }
}
