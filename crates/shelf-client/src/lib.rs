use async_trait::async_trait;
use shelf_api_types::{Book, BookId, NewBook};
use thiserror::Error;

mod http;

pub use http::HttpBookStore;

pub const DEFAULT_BASE_URL: &str = "https://w38xh3waka.execute-api.us-east-1.amazonaws.com/Deployment";
pub const BASE_URL_ENV: &str = "BOOKSHELF_API_URL";

/// The one failure kind of the remote client. Variants only record the cause.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} returned HTTP {status}: {body}")]
    Status { url: String, status: u16, body: String },
    #[error("unexpected response body from {url}: {message}")]
    Decode { url: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ClientConfig {
    /// Explicit base URL, else `BOOKSHELF_API_URL`, else the production deployment.
    /// Blank values count as unset.
    pub fn new(base_url: Option<String>) -> Self {
        Self::resolve(base_url, std::env::var(BASE_URL_ENV).ok())
    }

    fn resolve(explicit: Option<String>, env: Option<String>) -> Self {
        let base_url = explicit
            .filter(|value| !value.trim().is_empty())
            .or_else(|| env.filter(|value| !value.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Remote collection of books.
///
/// Futures are not `Send`: the browser runs everything on one event loop.
#[async_trait(?Send)]
pub trait BookStore {
    async fn list(&self) -> Result<Vec<Book>, FetchFailure>;
    async fn create(&self, book: &NewBook) -> Result<(), FetchFailure>;
    async fn update(&self, book: &Book) -> Result<(), FetchFailure>;
    async fn delete(&self, id: &BookId) -> Result<(), FetchFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_url_is_normalised() {
        let config = ClientConfig::new(Some("http://localhost:8080/Deployment/ ".to_owned()));
        assert_eq!(config.base_url(), "http://localhost:8080/Deployment");
        assert_eq!(
            config.endpoint(shelf_api_types::routes::UPDATE),
            "http://localhost:8080/Deployment/Books/PUT/"
        );
    }

    #[test]
    fn blank_env_base_url_falls_back_to_default() {
        let config = ClientConfig::resolve(None, Some("   ".to_owned()));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        let config = ClientConfig::resolve(Some(String::new()), Some(String::new()));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn env_base_url_used_when_no_explicit_value() {
        let config = ClientConfig::resolve(None, Some(" http://127.0.0.1:8080/ ".to_owned()));
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");

        let config = ClientConfig::resolve(
            Some("http://books.test".to_owned()),
            Some("http://127.0.0.1:8080".to_owned()),
        );
        assert_eq!(config.base_url(), "http://books.test");
    }

    #[test]
    fn status_failure_message_names_the_status() {
        let err = FetchFailure::Status {
            url: "http://books.test/Books/GET".to_owned(),
            status: 401,
            body: "Unauthorized".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "http://books.test/Books/GET returned HTTP 401: Unauthorized"
        );
    }
}
