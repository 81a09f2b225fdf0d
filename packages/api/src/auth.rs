//! `/auth/*` endpoints.
//!
//! These only talk to the backend. Persisting the returned token is the
//! caller's job; [`crate::session`] wraps them with the store.

use serde::{Deserialize, Serialize};
use store::Credential;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Ack, AuthResponse, User};
use crate::transport::{ApiRequest, Transport};

#[derive(Serialize)]
struct EmailPassword<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct EmailOtp<'a> {
    email: &'a str,
    otp: &'a str,
}

#[derive(Serialize)]
struct EmailOnly<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct PasswordReset<'a> {
    email: &'a str,
    otp: &'a str,
    #[serde(rename = "newPassword")]
    new_password: &'a str,
}

/// `GET /auth/me` answers either `{"user": {...}}` or the bare user.
#[derive(Deserialize)]
#[serde(untagged)]
enum MeResponse {
    Wrapped { user: User },
    Bare(User),
}

impl<T: Transport> ApiClient<T> {
    /// Start signup: the backend emails a one-time code.
    pub async fn send_signup_otp(
        &self,
        credential: Option<&Credential>,
        email: &str,
        password: &str,
    ) -> Result<Ack, ApiError> {
        let request = ApiRequest::post("/auth/send-signup-otp")
            .json(&EmailPassword { email, password })?
            .bearer(credential);
        self.acknowledge(request).await
    }

    /// Finish signup with the emailed code.
    pub async fn verify_signup_otp(
        &self,
        credential: Option<&Credential>,
        email: &str,
        otp: &str,
    ) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::post("/auth/verify-signup-otp")
            .json(&EmailOtp { email, otp })?
            .bearer(credential);
        self.fetch(request).await
    }

    pub async fn login(
        &self,
        credential: Option<&Credential>,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::post("/auth/login")
            .json(&EmailPassword { email, password })?
            .bearer(credential);
        self.fetch(request).await
    }

    /// Ask for a password-reset code.
    pub async fn forgot_password(
        &self,
        credential: Option<&Credential>,
        email: &str,
    ) -> Result<Ack, ApiError> {
        let request = ApiRequest::post("/auth/forgot-password")
            .json(&EmailOnly { email })?
            .bearer(credential);
        self.acknowledge(request).await
    }

    pub async fn reset_password(
        &self,
        credential: Option<&Credential>,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<Ack, ApiError> {
        let request = ApiRequest::post("/auth/reset-password")
            .json(&PasswordReset {
                email,
                otp,
                new_password,
            })?
            .bearer(credential);
        self.acknowledge(request).await
    }

    pub async fn logout(&self, credential: Option<&Credential>) -> Result<Ack, ApiError> {
        let request = ApiRequest::post("/auth/logout").bearer(credential);
        self.acknowledge(request).await
    }

    /// Who the backend thinks the caller is.
    pub async fn me(&self, credential: Option<&Credential>) -> Result<User, ApiError> {
        let request = ApiRequest::get("/auth/me").bearer(credential);
        match self.fetch::<MeResponse>(request).await? {
            MeResponse::Wrapped { user } | MeResponse::Bare(user) => Ok(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{FakeBackend, FAKE_OTP};
    use crate::{ApiClient, ApiConfig, Credential, Method};

    fn client(backend: &FakeBackend) -> ApiClient<FakeBackend> {
        ApiClient::new(ApiConfig::default(), backend.clone())
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let backend = FakeBackend::new().with_account("ada@example.com", "hunter22");
        let api = client(&backend);

        let response = api.login(None, "ada@example.com", "hunter22").await.unwrap();
        assert!(response.token.is_some());
        assert_eq!(response.user.unwrap().email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_login_failure_carries_server_message() {
        let backend = FakeBackend::new().with_account("ada@example.com", "hunter22");
        let api = client(&backend);

        let err = api.login(None, "ada@example.com", "wrong").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.server_message(), Some("Invalid email or password"));
    }

    #[tokio::test]
    async fn test_reset_password_sends_camel_case_field() {
        let backend = FakeBackend::new().with_account("ada@example.com", "hunter22");
        let api = client(&backend);

        api.forgot_password(None, "ada@example.com").await.unwrap();
        api.reset_password(None, "ada@example.com", FAKE_OTP, "newpass1")
            .await
            .unwrap();

        let last = backend.requests().pop().unwrap();
        assert_eq!(last.method, Method::Post);
        assert_eq!(last.path, "/auth/reset-password");
        assert_eq!(last.body.unwrap()["newPassword"], "newpass1");

        // Old password no longer works
        assert!(api.login(None, "ada@example.com", "hunter22").await.is_err());
        assert!(api.login(None, "ada@example.com", "newpass1").await.is_ok());
    }

    #[tokio::test]
    async fn test_signup_flow() {
        let backend = FakeBackend::new();
        let api = client(&backend);

        api.send_signup_otp(None, "new@example.com", "secret1")
            .await
            .unwrap();
        let bad = api.verify_signup_otp(None, "new@example.com", "000000").await;
        assert!(bad.is_err());

        let ok = api
            .verify_signup_otp(None, "new@example.com", FAKE_OTP)
            .await
            .unwrap();
        let token = ok.token.unwrap();
        let user = api.me(Some(&token)).await.unwrap();
        assert_eq!(user.email, "new@example.com");
    }

    #[tokio::test]
    async fn test_me_without_credential_is_unauthorized() {
        let backend = FakeBackend::new();
        let api = client(&backend);

        let err = api.me(None).await.unwrap_err();
        assert!(err.is_unauthorized());

        let err = api.me(Some(&Credential::new("forged"))).await.unwrap_err();
        assert!(err.is_unauthorized());
    }
}
