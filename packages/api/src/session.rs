//! Session flows: the stored credential tied to the `/auth/*` endpoints.
//!
//! [`AuthState`] is what the UI observes. The functions here move it between
//! its three shapes:
//!
//! | State | `user` | `online` | Produced by |
//! |-------|--------|----------|-------------|
//! | signed in | `Some` | `true` | [`resolve_session`] with a valid credential, [`sign_in`], [`verify_signup`] |
//! | signed out | `None` | `true` | any backend answer that is not a user, [`sign_out`] |
//! | unreachable | `None` | `false` | a network failure while checking |
//!
//! A state that is still `loading` has not been checked yet; the route guard
//! waits for it instead of redirecting.

use store::{ClientStore, Credential, KeyValueStore};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, User};
use crate::transport::Transport;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    /// Whether the backend answered the last check.
    pub online: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            online: false,
        }
    }
}

impl AuthState {
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
            online: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
            online: true,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            user: None,
            loading: false,
            online: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Ask the backend who the stored credential belongs to.
///
/// Sends `GET /auth/me` even when nothing is stored, since the backend may
/// still recognise a session cookie. Never fails: every outcome is a state.
pub async fn resolve_session<T, S>(client: &ApiClient<T>, store: &ClientStore<S>) -> AuthState
where
    T: Transport,
    S: KeyValueStore,
{
    let credential = store.credential();
    match client.me(credential.as_ref()).await {
        Ok(user) => {
            tracing::debug!(user = %user.email, "session restored");
            AuthState::authenticated(user)
        }
        Err(e) if e.is_network() => {
            tracing::warn!("session check failed, backend unreachable: {e}");
            AuthState::unreachable()
        }
        Err(e) => {
            tracing::debug!("no active session: {e}");
            AuthState::anonymous()
        }
    }
}

fn remember(store: &ClientStore<impl KeyValueStore>, response: &AuthResponse) {
    if let Some(token) = response.token.as_ref().filter(|t| !t.is_blank()) {
        store.set_credential(token);
    }
}

/// `POST /auth/login`, persisting the returned token.
pub async fn sign_in<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let credential = store.credential();
    let response = client.login(credential.as_ref(), email, password).await?;
    remember(store, &response);
    tracing::info!(%email, "signed in");
    Ok(response)
}

/// `POST /auth/verify-signup-otp`, persisting the returned token.
pub async fn verify_signup<T, S>(
    client: &ApiClient<T>,
    store: &ClientStore<S>,
    email: &str,
    otp: &str,
) -> Result<AuthResponse, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let credential = store.credential();
    let response = client
        .verify_signup_otp(credential.as_ref(), email, otp)
        .await?;
    remember(store, &response);
    tracing::info!(%email, "account verified");
    Ok(response)
}

/// Forget the local credential, then tell the backend.
///
/// The local copy is gone before the request leaves, so a failing logout
/// still signs the browser out. The request carries the old token so the
/// backend can revoke it.
pub async fn sign_out<T, S>(client: &ApiClient<T>, store: &ClientStore<S>) -> Result<(), ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let credential: Option<Credential> = store.credential();
    store.clear_credential();
    client.logout(credential.as_ref()).await?;
    tracing::info!("signed out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CannedResponse, FakeBackend, FAKE_OTP};
    use crate::ApiConfig;
    use store::MemoryStore;

    fn setup() -> (FakeBackend, ApiClient<FakeBackend>, ClientStore<MemoryStore>) {
        let backend = FakeBackend::new().with_account("ada@example.com", "hunter22");
        let client = ApiClient::new(ApiConfig::default(), backend.clone());
        (backend, client, ClientStore::new(MemoryStore::new()))
    }

    #[test]
    fn test_default_state_is_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_resolve_without_credential_is_anonymous() {
        let (backend, client, store) = setup();
        let state = resolve_session(&client, &store).await;
        assert_eq!(state, AuthState::anonymous());
        // Still asked, in case a cookie session exists
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_persists_token_and_restores_session() {
        let (_backend, client, store) = setup();
        sign_in(&client, &store, "ada@example.com", "hunter22")
            .await
            .unwrap();
        assert!(store.credential().is_some());

        let state = resolve_session(&client, &store).await;
        assert!(state.is_authenticated());
        assert!(state.online);
        assert_eq!(state.user.unwrap().email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_failed_sign_in_leaves_store_untouched() {
        let (_backend, client, store) = setup();
        let err = sign_in(&client, &store, "ada@example.com", "nope")
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert!(store.credential().is_none());
    }

    #[tokio::test]
    async fn test_stale_credential_resolves_anonymous() {
        let (_backend, client, store) = setup();
        store.set_credential(&Credential::new("expired"));
        assert_eq!(resolve_session(&client, &store).await, AuthState::anonymous());
    }

    #[tokio::test]
    async fn test_user_without_id_stays_signed_in() {
        let canned = CannedResponse::new(200, r#"{"user": {"email": "ada@example.com"}}"#);
        let client = ApiClient::new(ApiConfig::default(), canned);
        let store = ClientStore::new(MemoryStore::new());
        store.set_credential(&Credential::new("fake-token-1"));

        let state = resolve_session(&client, &store).await;
        assert!(state.is_authenticated());
        assert_eq!(state.user.unwrap().email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let (backend, client, store) = setup();
        backend.set_offline(true);
        let state = resolve_session(&client, &store).await;
        assert_eq!(state, AuthState::unreachable());
    }

    #[tokio::test]
    async fn test_verify_signup_persists_token() {
        let backend = FakeBackend::new();
        let client = ApiClient::new(ApiConfig::default(), backend.clone());
        let store = ClientStore::new(MemoryStore::new());

        client
            .send_signup_otp(None, "new@example.com", "secret1")
            .await
            .unwrap();
        verify_signup(&client, &store, "new@example.com", FAKE_OTP)
            .await
            .unwrap();
        assert!(resolve_session(&client, &store).await.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_out_clears_credential_even_when_offline() {
        let (backend, client, store) = setup();
        sign_in(&client, &store, "ada@example.com", "hunter22")
            .await
            .unwrap();
        let token = store.credential();

        backend.set_offline(true);
        assert!(sign_out(&client, &store).await.is_err());
        assert!(store.credential().is_none());

        // The logout request still carried the old token
        let last = backend.requests().pop().unwrap();
        assert_eq!(last.path, "/auth/logout");
        assert_eq!(last.credential, token);
    }

    #[tokio::test]
    async fn test_sign_out_revokes_backend_session() {
        let (_backend, client, store) = setup();
        sign_in(&client, &store, "ada@example.com", "hunter22")
            .await
            .unwrap();
        let token = store.credential();

        sign_out(&client, &store).await.unwrap();
        assert!(client.me(token.as_ref()).await.unwrap_err().is_unauthorized());
    }
}
