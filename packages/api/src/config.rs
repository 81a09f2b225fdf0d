//! Backend location.

/// Base path used when nothing is configured; the backend is expected to be
/// reverse-proxied under the same origin.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Environment variable naming the backend base URL.
pub const BASE_URL_VAR: &str = "READING_JOURNAL_API_URL";

/// Where the REST backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL.
    ///
    /// The value captured at build time wins (a WASM bundle has no process
    /// environment), then the runtime variable on native builds, then
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        if let Some(url) = option_env!("READING_JOURNAL_API_URL").filter(|u| !u.trim().is_empty()) {
            return Self::new(url);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(BASE_URL_VAR) {
                if !url.trim().is_empty() {
                    return Self::new(url);
                }
            }
        }

        Self::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_relative(&self) -> bool {
        self.base_url.starts_with('/') || self.base_url.is_empty()
    }

    /// Make a relative base absolute against the page origin.
    ///
    /// `reqwest` only accepts absolute URLs, so `/api` becomes
    /// `https://host/api` in the browser. On native builds the config is
    /// returned unchanged.
    pub fn resolved(self) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            if self.is_relative() {
                if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
                    return Self::new(format!("{origin}{}", self.base_url));
                }
            }
        }
        self
    }

    /// Join an endpoint path onto the base.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_is_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "/api");
        assert!(config.is_relative());
        assert_eq!(config.url_for("/books"), "/api/books");
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://journal.example.com/api/ ");
        assert_eq!(config.base_url(), "https://journal.example.com/api");
        assert!(!config.is_relative());
        assert_eq!(
            config.url_for("books/7/notes"),
            "https://journal.example.com/api/books/7/notes"
        );
    }

    #[test]
    fn test_resolved_keeps_absolute_base() {
        let config = ApiConfig::new("http://localhost:5000/api").resolved();
        assert_eq!(config.base_url(), "http://localhost:5000/api");
    }
}
