//! `/books` endpoints, including the external catalog search.

use serde::Deserialize;
use store::Credential;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{lenient, Ack, Book, BookUpdate, CatalogBook, NewBook};
use crate::transport::{ApiRequest, Transport};

#[derive(Deserialize)]
struct BookList {
    #[serde(deserialize_with = "lenient::list_or_empty")]
    books: Vec<Book>,
}

#[derive(Deserialize)]
struct SingleBook {
    book: Book,
}

#[derive(Deserialize)]
struct CatalogHits {
    #[serde(default, deserialize_with = "lenient::list_or_empty")]
    books: Vec<CatalogBook>,
}

impl<T: Transport> ApiClient<T> {
    /// All books in the caller's library.
    pub async fn list_books(&self, credential: Option<&Credential>) -> Result<Vec<Book>, ApiError> {
        let request = ApiRequest::get("/books").bearer(credential);
        Ok(self.fetch::<BookList>(request).await?.books)
    }

    pub async fn get_book(
        &self,
        credential: Option<&Credential>,
        book_id: &str,
    ) -> Result<Book, ApiError> {
        let request = ApiRequest::get(format!("/books/{book_id}")).bearer(credential);
        Ok(self.fetch::<SingleBook>(request).await?.book)
    }

    pub async fn create_book(
        &self,
        credential: Option<&Credential>,
        book: &NewBook,
    ) -> Result<Book, ApiError> {
        let request = ApiRequest::post("/books").json(book)?.bearer(credential);
        Ok(self.fetch::<SingleBook>(request).await?.book)
    }

    pub async fn update_book(
        &self,
        credential: Option<&Credential>,
        book_id: &str,
        update: &BookUpdate,
    ) -> Result<Book, ApiError> {
        let request = ApiRequest::put(format!("/books/{book_id}"))
            .json(update)?
            .bearer(credential);
        Ok(self.fetch::<SingleBook>(request).await?.book)
    }

    pub async fn delete_book(
        &self,
        credential: Option<&Credential>,
        book_id: &str,
    ) -> Result<Ack, ApiError> {
        let request = ApiRequest::delete(format!("/books/{book_id}")).bearer(credential);
        self.acknowledge(request).await
    }

    /// Search the external catalog. A missing `books` field means no hits.
    pub async fn search_catalog(
        &self,
        credential: Option<&Credential>,
        query: &str,
    ) -> Result<Vec<CatalogBook>, ApiError> {
        let request = ApiRequest::get("/books/search")
            .query("q", query)
            .bearer(credential);
        Ok(self.fetch::<CatalogHits>(request).await?.books)
    }
}
