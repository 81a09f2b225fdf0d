//! # FakeBackend: in-memory stand-in for the REST backend
//!
//! Implements [`Transport`] by routing each [`ApiRequest`] to a handler over
//! shared in-memory state. Every request is recorded, so tests can assert
//! what was sent (path, body, bearer token) or that nothing was sent at all.
//!
//! One-time codes are always [`FAKE_OTP`]. Tokens are opaque
//! `fake-token-N` strings. Cloning shares the state, so a test can keep one
//! handle for inspection while an [`crate::ApiClient`] owns another.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{Book, BookUpdate, CatalogBook, NewBook, Note, NoteInput, Tag, User};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

/// The code every fake signup and password reset accepts.
pub const FAKE_OTP: &str = "123456";

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password: String,
}

#[derive(Debug, Clone)]
struct StoredBook {
    owner: String,
    book: Book,
}

#[derive(Debug, Default)]
struct State {
    accounts: HashMap<String, Account>,
    pending_signups: HashMap<String, String>,
    pending_resets: HashSet<String>,
    sessions: HashMap<String, String>,
    books: Vec<StoredBook>,
    notes: Vec<Note>,
    tags: Vec<(String, Tag)>,
    catalog: Vec<CatalogBook>,
    requests: Vec<ApiRequest>,
    offline: bool,
    next_id: u64,
}

#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a verified account.
    pub fn with_account(self, email: &str, password: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.add_account(email, password);
        }
        self
    }

    /// Results served by `GET /books/search`.
    pub fn with_catalog(self, catalog: Vec<CatalogBook>) -> Self {
        self.state.lock().unwrap().catalog = catalog;
        self
    }

    /// Put a book in `owner`'s library.
    pub fn with_book(self, owner: &str, title: &str, author: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let id = state.next_id();
            state.books.push(StoredBook {
                owner: owner.to_string(),
                book: Book {
                    id,
                    title: title.to_string(),
                    author: author.to_string(),
                    cover_url: None,
                    google_books_id: None,
                    status: None,
                    note_count: 0,
                },
            });
        }
        self
    }

    /// While offline every request fails as a network error.
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// All books across all owners.
    pub fn books(&self) -> Vec<Book> {
        let state = self.state.lock().unwrap();
        state.books.iter().map(|b| state.with_count(&b.book)).collect()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.lock().unwrap().notes.clone()
    }
}

impl Transport for FakeBackend {
    async fn send(&self, _url: &str, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        if state.offline {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(state.route(&request))
    }
}

/// Answers every request with the same status and raw body, for decoding
/// payloads the fake backend would never produce.
#[derive(Debug, Clone)]
pub struct CannedResponse(ApiResponse);

impl CannedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self(ApiResponse::new(status, body))
    }
}

impl Transport for CannedResponse {
    async fn send(&self, _url: &str, _request: ApiRequest) -> Result<ApiResponse, ApiError> {
        Ok(self.0.clone())
    }
}

fn ok(body: Value) -> ApiResponse {
    ApiResponse::new(200, body.to_string())
}

fn created(body: Value) -> ApiResponse {
    ApiResponse::new(201, body.to_string())
}

fn fail(status: u16, message: &str) -> ApiResponse {
    ApiResponse::new(status, json!({ "message": message }).to_string())
}

fn parse<T: DeserializeOwned>(request: &ApiRequest) -> Result<T, ApiResponse> {
    let body = request.body.clone().unwrap_or(Value::Null);
    serde_json::from_value(body).map_err(|e| fail(400, &format!("Invalid request body: {e}")))
}

#[derive(Deserialize)]
struct Credentials {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct OtpCheck {
    email: String,
    otp: String,
}

#[derive(Deserialize)]
struct EmailBody {
    email: String,
}

#[derive(Deserialize)]
struct ResetBody {
    email: String,
    otp: String,
    #[serde(rename = "newPassword")]
    new_password: String,
}

#[derive(Deserialize)]
struct TagBody {
    name: String,
}

impl State {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    fn add_account(&mut self, email: &str, password: &str) -> User {
        let user = User {
            id: self.next_id(),
            email: email.to_string(),
            name: None,
        };
        self.accounts.insert(
            email.to_string(),
            Account {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        user
    }

    fn open_session(&mut self, email: &str) -> String {
        let token = format!("fake-token-{}", self.next_id());
        self.sessions.insert(token.clone(), email.to_string());
        token
    }

    fn caller(&self, request: &ApiRequest) -> Result<String, ApiResponse> {
        request
            .credential
            .as_ref()
            .and_then(|c| self.sessions.get(c.as_str()))
            .cloned()
            .ok_or_else(|| fail(401, "Unauthorized"))
    }

    fn with_count(&self, book: &Book) -> Book {
        let note_count = self.notes.iter().filter(|n| n.book_id == book.id).count();
        Book {
            note_count: u32::try_from(note_count).unwrap_or(u32::MAX),
            ..book.clone()
        }
    }

    fn owned_book(&self, owner: &str, book_id: &str) -> Result<usize, ApiResponse> {
        self.books
            .iter()
            .position(|b| b.owner == owner && b.book.id == book_id)
            .ok_or_else(|| fail(404, "Book not found"))
    }

    fn owned_note(&self, owner: &str, note_id: &str) -> Result<usize, ApiResponse> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == note_id)
            .ok_or_else(|| fail(404, "Note not found"))?;
        self.owned_book(owner, &self.notes[index].book_id)
            .map_err(|_| fail(404, "Note not found"))?;
        Ok(index)
    }

    fn route(&mut self, request: &ApiRequest) -> ApiResponse {
        match self.handle(request) {
            Ok(response) | Err(response) => response,
        }
    }

    fn handle(&mut self, request: &ApiRequest) -> Result<ApiResponse, ApiResponse> {
        let segments: Vec<&str> = request
            .path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match (request.method, segments.as_slice()) {
            (Method::Post, ["auth", "send-signup-otp"]) => {
                let body: Credentials = parse(request)?;
                if self.accounts.contains_key(&body.email) {
                    return Err(fail(409, "User already exists"));
                }
                self.pending_signups.insert(body.email, body.password);
                Ok(ok(json!({ "message": "Verification code sent" })))
            }
            (Method::Post, ["auth", "verify-signup-otp"]) => {
                let body: OtpCheck = parse(request)?;
                if body.otp != FAKE_OTP {
                    return Err(fail(400, "Invalid verification code"));
                }
                let password = self
                    .pending_signups
                    .remove(&body.email)
                    .ok_or_else(|| fail(400, "No pending signup for this email"))?;
                let user = self.add_account(&body.email, &password);
                let token = self.open_session(&body.email);
                Ok(created(json!({ "token": token, "user": user })))
            }
            (Method::Post, ["auth", "login"]) => {
                let body: Credentials = parse(request)?;
                let user = match self.accounts.get(&body.email) {
                    Some(account) if account.password == body.password => account.user.clone(),
                    _ => return Err(fail(401, "Invalid email or password")),
                };
                let token = self.open_session(&body.email);
                Ok(ok(json!({ "token": token, "user": user })))
            }
            (Method::Post, ["auth", "forgot-password"]) => {
                let body: EmailBody = parse(request)?;
                if !self.accounts.contains_key(&body.email) {
                    return Err(fail(404, "User not found"));
                }
                self.pending_resets.insert(body.email);
                Ok(ok(json!({ "message": "Reset code sent" })))
            }
            (Method::Post, ["auth", "reset-password"]) => {
                let body: ResetBody = parse(request)?;
                if body.otp != FAKE_OTP || !self.pending_resets.remove(&body.email) {
                    return Err(fail(400, "Invalid or expired code"));
                }
                if let Some(account) = self.accounts.get_mut(&body.email) {
                    account.password = body.new_password;
                }
                Ok(ok(json!({ "message": "Password reset successful" })))
            }
            (Method::Post, ["auth", "logout"]) => {
                if let Some(credential) = &request.credential {
                    self.sessions.remove(credential.as_str());
                }
                Ok(ok(json!({ "message": "Logged out" })))
            }
            (Method::Get, ["auth", "me"]) => {
                let email = self.caller(request)?;
                let user = self
                    .accounts
                    .get(&email)
                    .map(|a| a.user.clone())
                    .ok_or_else(|| fail(401, "Unauthorized"))?;
                Ok(ok(json!({ "user": user })))
            }

            (Method::Get, ["books", "search"]) => {
                self.caller(request)?;
                let needle = request.query_value("q").unwrap_or_default().to_lowercase();
                let hits: Vec<&CatalogBook> = self
                    .catalog
                    .iter()
                    .filter(|b| {
                        b.title.to_lowercase().contains(&needle)
                            || b.author.to_lowercase().contains(&needle)
                    })
                    .collect();
                if hits.is_empty() {
                    // Mirrors a backend that omits the field on no results
                    return Ok(ok(json!({})));
                }
                Ok(ok(json!({ "books": hits })))
            }
            (Method::Get, ["books"]) => {
                let owner = self.caller(request)?;
                let books: Vec<Book> = self
                    .books
                    .iter()
                    .filter(|b| b.owner == owner)
                    .map(|b| self.with_count(&b.book))
                    .collect();
                Ok(ok(json!({ "books": books })))
            }
            (Method::Post, ["books"]) => {
                let owner = self.caller(request)?;
                let body: NewBook = parse(request)?;
                let book = Book {
                    id: self.next_id(),
                    title: body.title,
                    author: body.author,
                    cover_url: body.cover_url,
                    google_books_id: body.google_books_id,
                    status: Some(body.status),
                    note_count: 0,
                };
                self.books.push(StoredBook {
                    owner,
                    book: book.clone(),
                });
                Ok(created(json!({ "book": book })))
            }
            (Method::Get, ["books", id]) => {
                let owner = self.caller(request)?;
                let index = self.owned_book(&owner, id)?;
                let book = self.with_count(&self.books[index].book);
                Ok(ok(json!({ "book": book })))
            }
            (Method::Put, ["books", id]) => {
                let owner = self.caller(request)?;
                let update: BookUpdate = parse(request)?;
                let index = self.owned_book(&owner, id)?;
                let book = &mut self.books[index].book;
                if let Some(title) = update.title {
                    book.title = title;
                }
                if let Some(author) = update.author {
                    book.author = author;
                }
                if let Some(cover_url) = update.cover_url {
                    book.cover_url = Some(cover_url);
                }
                if let Some(status) = update.status {
                    book.status = Some(status);
                }
                let book = self.with_count(&self.books[index].book);
                Ok(ok(json!({ "book": book })))
            }
            (Method::Delete, ["books", id]) => {
                let owner = self.caller(request)?;
                let index = self.owned_book(&owner, id)?;
                let removed = self.books.remove(index);
                self.notes.retain(|n| n.book_id != removed.book.id);
                Ok(ok(json!({ "message": "Book deleted" })))
            }

            (Method::Get, ["books", id, "notes"]) => {
                let owner = self.caller(request)?;
                self.owned_book(&owner, id)?;
                let notes: Vec<&Note> = self.notes.iter().filter(|n| n.book_id == *id).collect();
                Ok(ok(json!({ "notes": notes })))
            }
            (Method::Post, ["books", id, "notes"]) => {
                let owner = self.caller(request)?;
                let input: NoteInput = parse(request)?;
                self.owned_book(&owner, id)?;
                let note = Note {
                    id: self.next_id(),
                    book_id: id.to_string(),
                    content: input.content,
                    emotion: input.emotion,
                    page_number: input.page_number,
                    tags: input.tags,
                    created_at: Some(Utc::now()),
                };
                self.notes.push(note.clone());
                Ok(created(json!({ "note": note })))
            }
            (Method::Put, ["notes", id]) => {
                let owner = self.caller(request)?;
                let input: NoteInput = parse(request)?;
                let index = self.owned_note(&owner, id)?;
                let note = &mut self.notes[index];
                note.content = input.content;
                note.emotion = input.emotion;
                note.page_number = input.page_number;
                note.tags = input.tags;
                Ok(ok(json!({ "note": note })))
            }
            (Method::Delete, ["notes", id]) => {
                let owner = self.caller(request)?;
                let index = self.owned_note(&owner, id)?;
                self.notes.remove(index);
                Ok(ok(json!({ "message": "Note deleted" })))
            }

            (Method::Get, ["tags"]) => {
                let owner = self.caller(request)?;
                let tags: Vec<&Tag> = self
                    .tags
                    .iter()
                    .filter(|(o, _)| *o == owner)
                    .map(|(_, t)| t)
                    .collect();
                Ok(ok(json!({ "tags": tags })))
            }
            (Method::Post, ["tags"]) => {
                let owner = self.caller(request)?;
                let body: TagBody = parse(request)?;
                let name = body.name.trim().to_string();
                if name.is_empty() {
                    return Err(fail(400, "Tag name is required"));
                }
                if let Some((_, tag)) = self
                    .tags
                    .iter()
                    .find(|(o, t)| *o == owner && t.name.eq_ignore_ascii_case(&name))
                {
                    return Ok(ok(json!({ "tag": tag })));
                }
                let tag = Tag {
                    id: self.next_id(),
                    name,
                };
                self.tags.push((owner, tag.clone()));
                Ok(created(json!({ "tag": tag })))
            }

            _ => Err(fail(404, "Not found")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiClient, ApiConfig};

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let backend = FakeBackend::new();
        let api = ApiClient::new(ApiConfig::default(), backend.clone());
        let err = api.dispatch(ApiRequest::get("/nowhere")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_offline_requests_are_still_recorded() {
        let backend = FakeBackend::new();
        backend.set_offline(true);
        let api = ApiClient::new(ApiConfig::default(), backend.clone());

        assert!(api.list_books(None).await.unwrap_err().is_network());
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_libraries_are_per_account() {
        let backend = FakeBackend::new()
            .with_account("ada@example.com", "hunter22")
            .with_account("bob@example.com", "hunter22")
            .with_book("ada@example.com", "Dune", "Frank Herbert");
        let api = ApiClient::new(ApiConfig::default(), backend.clone());

        let bob = api
            .login(None, "bob@example.com", "hunter22")
            .await
            .unwrap()
            .token;
        assert!(api.list_books(bob.as_ref()).await.unwrap().is_empty());
        assert_eq!(backend.books().len(), 1);
    }
}
