use serde::{Deserialize, Serialize};

use super::lenient;

/// The signed-in account as reported by `GET /auth/me`.
///
/// Only its presence matters for routing, so every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient::id_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}
