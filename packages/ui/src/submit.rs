//! # Submission flows
//!
//! The async half of every form: validate, call the backend with the stored
//! credential, persist what needs persisting. Views call these through their
//! [`crate::AppContext`]; tests call them with an in-memory backend and store.
//!
//! Flows that change the session return the re-checked [`AuthState`] so the
//! caller can publish it without a second round trip.

use api::session::{resolve_session, sign_in, verify_signup};
use api::{Ack, ApiClient, ApiError, AuthState, Book, CatalogBook, Note, Tag, Transport};
use store::{ClientStore, KeyValueStore};

use crate::forms::{
    validate_otp, ForgotForm, FormError, LoginForm, NoteForm, ResetForm, SignupForm, SubmitError,
};

pub async fn submit_login<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    form: &LoginForm,
) -> Result<AuthState, SubmitError>
where
    T: Transport,
    S: KeyValueStore,
{
    form.validate()?;
    sign_in(client, store, form.email(), &form.password).await?;
    Ok(resolve_session(client, store).await)
}

/// Ask for a signup code. The account does not exist until it is verified.
pub async fn submit_signup<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    form: &SignupForm,
) -> Result<Ack, SubmitError>
where
    T: Transport,
    S: KeyValueStore,
{
    form.validate()?;
    let credential = store.credential();
    Ok(client
        .send_signup_otp(credential.as_ref(), form.email(), &form.password)
        .await?)
}

pub async fn submit_verification<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    email: &str,
    code: &str,
) -> Result<AuthState, SubmitError>
where
    T: Transport,
    S: KeyValueStore,
{
    validate_otp(code)?;
    verify_signup(client, store, email, code).await?;
    Ok(resolve_session(client, store).await)
}

/// Send the signup code again.
pub async fn resend_code<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    email: &str,
    password: &str,
) -> Result<Ack, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let credential = store.credential();
    client
        .send_signup_otp(credential.as_ref(), email, password)
        .await
}

pub async fn submit_forgot<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    form: &ForgotForm,
) -> Result<Ack, SubmitError>
where
    T: Transport,
    S: KeyValueStore,
{
    let email = form.validate()?;
    let credential = store.credential();
    Ok(client.forgot_password(credential.as_ref(), email).await?)
}

pub async fn submit_reset<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    email: &str,
    form: &ResetForm,
) -> Result<Ack, SubmitError>
where
    T: Transport,
    S: KeyValueStore,
{
    form.validate()?;
    let credential = store.credential();
    Ok(client
        .reset_password(credential.as_ref(), email, &form.otp, &form.new_password)
        .await?)
}

pub async fn submit_note<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    book_id: &str,
    form: &NoteForm,
) -> Result<Note, SubmitError>
where
    T: Transport,
    S: KeyValueStore,
{
    let input = form.to_input()?;
    let credential = store.credential();
    Ok(client
        .create_note(credential.as_ref(), book_id, &input)
        .await?)
}

pub async fn submit_tag<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    name: &str,
) -> Result<Tag, SubmitError>
where
    T: Transport,
    S: KeyValueStore,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(FormError::TagNameRequired.into());
    }
    let credential = store.credential();
    Ok(client.create_tag(credential.as_ref(), name).await?)
}

/// Add a catalog hit to the library with the default status.
pub async fn add_to_library<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    hit: &CatalogBook,
) -> Result<Book, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let credential = store.credential();
    client
        .create_book(credential.as_ref(), &hit.to_new_book())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::testing::{FakeBackend, FAKE_OTP};
    use api::ApiConfig;
    use store::MemoryStore;

    struct Harness {
        backend: FakeBackend,
        client: ApiClient<FakeBackend>,
        store: ClientStore<MemoryStore>,
    }

    fn harness() -> Harness {
        let backend = FakeBackend::new()
            .with_account("ada@example.com", "hunter22")
            .with_book("ada@example.com", "Atomic Habits", "James Clear");
        Harness {
            client: ApiClient::new(ApiConfig::default(), backend.clone()),
            backend,
            store: ClientStore::new(MemoryStore::new()),
        }
    }

    async fn signed_in() -> Harness {
        let h = harness();
        let form = LoginForm {
            email: "ada@example.com".into(),
            password: "hunter22".into(),
        };
        submit_login(&h.client, &h.store, &form).await.unwrap();
        h
    }

    #[tokio::test]
    async fn test_login_stores_credential_and_resolves_user() {
        let h = harness();
        let form = LoginForm {
            email: " ada@example.com ".into(),
            password: "hunter22".into(),
        };
        let state = submit_login(&h.client, &h.store, &form).await.unwrap();

        assert!(h.store.credential().is_some());
        assert_eq!(state.user.unwrap().email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_login_failure_shows_server_message() {
        let h = harness();
        let form = LoginForm {
            email: "ada@example.com".into(),
            password: "wrong".into(),
        };
        let err = submit_login(&h.client, &h.store, &form).await.unwrap_err();
        assert_eq!(err.message_or("Login failed"), "Invalid email or password");
        assert!(h.store.credential().is_none());
    }

    #[tokio::test]
    async fn test_reset_mismatch_sends_nothing() {
        let h = harness();
        let form = ResetForm {
            otp: "123456".into(),
            new_password: "abcdef".into(),
            confirm_password: "abcdeg".into(),
        };
        let err = submit_reset(&h.client, &h.store, "ada@example.com", &form)
            .await
            .unwrap_err();

        assert_eq!(err, SubmitError::Invalid(FormError::PasswordMismatch));
        assert_eq!(err.message_or("Failed to reset password"), "Passwords do not match");
        assert!(h.backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_short_code_never_verifies() {
        let h = harness();
        let err = submit_verification(&h.client, &h.store, "ada@example.com", "12345")
            .await
            .unwrap_err();

        assert_eq!(err, SubmitError::Invalid(FormError::OtpLength));
        assert!(h.backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_signup_then_verify_signs_in() {
        let h = harness();
        let form = SignupForm {
            email: "new@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };
        submit_signup(&h.client, &h.store, &form).await.unwrap();
        resend_code(&h.client, &h.store, "new@example.com", "secret1")
            .await
            .unwrap();

        let state = submit_verification(&h.client, &h.store, "new@example.com", FAKE_OTP)
            .await
            .unwrap();
        assert!(state.is_authenticated());
        assert!(h.store.credential().is_some());
    }

    #[tokio::test]
    async fn test_wrong_code_falls_back_to_server_message() {
        let h = harness();
        let form = SignupForm {
            email: "new@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };
        submit_signup(&h.client, &h.store, &form).await.unwrap();

        let err = submit_verification(&h.client, &h.store, "new@example.com", "999999")
            .await
            .unwrap_err();
        assert_eq!(err.message_or("Invalid verification code"), "Invalid verification code");
        assert!(h.store.credential().is_none());
    }

    #[tokio::test]
    async fn test_forgot_then_reset() {
        let h = harness();
        submit_forgot(
            &h.client,
            &h.store,
            &ForgotForm {
                email: "ada@example.com".into(),
            },
        )
        .await
        .unwrap();

        let form = ResetForm {
            otp: FAKE_OTP.into(),
            new_password: "brandnew".into(),
            confirm_password: "brandnew".into(),
        };
        submit_reset(&h.client, &h.store, "ada@example.com", &form)
            .await
            .unwrap();

        let login = LoginForm {
            email: "ada@example.com".into(),
            password: "brandnew".into(),
        };
        assert!(submit_login(&h.client, &h.store, &login).await.is_ok());
    }

    #[tokio::test]
    async fn test_note_is_created_with_parsed_fields() {
        let h = signed_in().await;
        let book = h.backend.books().remove(0);
        let form = NoteForm {
            content: "You do not rise to the level of your goals.".into(),
            emotion: "Motivated".into(),
            page_number: "27".into(),
            tags: "habits, systems".into(),
        };
        let note = submit_note(&h.client, &h.store, &book.id, &form).await.unwrap();
        assert_eq!(note.page_number, Some(27));
        assert_eq!(note.tags, vec!["habits", "systems"]);

        let last = h.backend.requests().pop().unwrap();
        assert_eq!(last.credential, h.store.credential());
    }

    #[tokio::test]
    async fn test_blank_note_sends_nothing() {
        let h = signed_in().await;
        let before = h.backend.requests().len();
        let err = submit_note(&h.client, &h.store, "1", &NoteForm::default())
            .await
            .unwrap_err();
        assert_eq!(err, SubmitError::Invalid(FormError::ContentRequired));
        assert_eq!(h.backend.requests().len(), before);
    }

    #[tokio::test]
    async fn test_blank_tag_sends_nothing() {
        let h = signed_in().await;
        let before = h.backend.requests().len();
        assert!(submit_tag(&h.client, &h.store, "  ").await.is_err());
        assert_eq!(h.backend.requests().len(), before);

        let tag = submit_tag(&h.client, &h.store, " focus ").await.unwrap();
        assert_eq!(tag.name, "focus");
    }

    #[tokio::test]
    async fn test_add_to_library_uses_reading_status() {
        let h = signed_in().await;
        let hit = CatalogBook {
            id: "g-42".into(),
            title: "Deep Work".into(),
            author: "Cal Newport".into(),
            cover_url: Some("https://covers.example.com/deep.jpg".into()),
            description: None,
        };
        let book = add_to_library(&h.client, &h.store, &hit).await.unwrap();
        assert_eq!(book.status.as_deref(), Some("reading"));
        assert_eq!(book.cover(), Some("https://covers.example.com/deep.jpg"));
    }
}
