//! # Persisted client-side values
//!
//! The two things the browser keeps between visits:
//!
//! | Type | Stored under | Meaning |
//! |------|--------------|---------|
//! | [`Credential`] | [`crate::CREDENTIAL_KEY`] | Opaque bearer token issued by the backend on login or signup verification. |
//! | [`Theme`] | [`crate::THEME_KEY`] | Light/dark preference chosen in the shell header. |
//!
//! `Credential` is `#[serde(transparent)]` so the backend's `{"token": "..."}`
//! response field deserializes straight into it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bearer token identifying the signed-in user to the backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank token is never worth sending.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

// Tokens end up in logs via `?request`; never print them.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Colour scheme of the application shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values fall back to the default.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("secret-token");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
        assert_eq!(credential.as_str(), "secret-token");
    }

    #[test]
    fn test_credential_deserializes_from_bare_string() {
        let credential: Credential = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(credential.as_str(), "abc");
        assert!(!credential.is_blank());
        assert!(Credential::new("  ").is_blank());
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}
