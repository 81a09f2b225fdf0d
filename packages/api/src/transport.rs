//! # Transport: the seam between typed endpoints and the network
//!
//! Endpoint methods build an [`ApiRequest`] (method, relative path, query,
//! JSON body, credential) and hand it to a [`Transport`] together with the
//! absolute URL. [`HttpTransport`] performs the call with `reqwest`, which
//! compiles to `fetch` on WASM; tests substitute
//! [`crate::testing::FakeBackend`].
//!
//! A transport reports only whether a response arrived. Status mapping and
//! decoding happen in [`crate::ApiClient`].

use std::future::Future;

use serde::Serialize;
use store::Credential;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request before it is bound to a base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, e.g. `/books/7/notes`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub credential: Option<Credential>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            credential: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Attach the caller's credential. Blank tokens are dropped.
    pub fn bearer(mut self, credential: Option<&Credential>) -> Self {
        self.credential = credential.filter(|c| !c.is_blank()).cloned();
        self
    }

    /// Look up a query parameter.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a request against an absolute URL.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// one thread and `fetch` futures are `!Send`.
pub trait Transport {
    fn send(
        &self,
        url: &str,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// reqwest-backed transport used by the application.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, url: &str, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let parsed = if request.query.is_empty() {
            reqwest::Url::parse(url)
        } else {
            reqwest::Url::parse_with_params(url, &request.query)
        }
        .map_err(|e| ApiError::Network(format!("invalid url {url}: {e}")))?;

        let mut builder = self.client.request(request.method.into(), parsed);

        // Session cookies ride along with the bearer header.
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        if let Some(credential) = &request.credential {
            builder = builder.bearer_auth(credential.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_drops_blank_tokens() {
        let blank = Credential::new("");
        let request = ApiRequest::get("/books").bearer(Some(&blank));
        assert!(request.credential.is_none());

        let token = Credential::new("abc");
        let request = ApiRequest::get("/books").bearer(Some(&token));
        assert_eq!(request.credential, Some(token));
    }

    #[test]
    fn test_json_body_and_query() {
        let request = ApiRequest::post("/tags")
            .json(&serde_json::json!({ "name": "habits" }))
            .unwrap()
            .query("q", "dune");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body.unwrap()["name"], "habits");
        assert_eq!(request.query, vec![("q".to_string(), "dune".to_string())]);
    }

    #[tokio::test]
    async fn test_http_transport_rejects_relative_url() {
        let transport = HttpTransport::new();
        let err = transport
            .send("/api/books", ApiRequest::get("/books"))
            .await
            .unwrap_err();
        assert!(err.is_network());
    }
}
