use serde::{Deserialize, Serialize};
use store::Credential;

use super::User;

/// Body of `POST /auth/login` and `POST /auth/verify-signup-otp`.
///
/// The token is optional: a backend relying on cookies alone may omit it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<Credential>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic acknowledgement returned by endpoints with no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
