//! # Catalog Client
//!
//! HTTP client for the BookHive catalog API. The base URL is passed in
//! explicitly from resolved configuration — no call site reads the
//! environment.
//!
//! Views depend on the [`CatalogSource`] trait rather than the concrete
//! client, so tests can substitute a stub without a network.

use async_trait::async_trait;
use log::{debug, warn};
use std::fmt;

use super::types::{Book, BookListResponse};

/// Errors that can occur talking to the catalog API.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// API returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Response body didn't match the expected schema. Not retryable.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// A source of catalog data. Implemented by [`CatalogClient`] for the real
/// API and by stubs in tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch a page of books, optionally filtered by a free-text search term.
    async fn list_books(
        &self,
        offset: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<Vec<Book>, ApiError>;

    /// Fetch a single book, including its description.
    async fn book_details(&self, id: &str) -> Result<Book, ApiError>;
}

/// Client for the catalog HTTP API.
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Creates a new client against the given base URL
    /// (e.g. `http://localhost:4500/api`). A trailing slash is stripped so
    /// path joins stay predictable.
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Sends a GET and maps transport and HTTP-status failures into
    /// [`ApiError`]. The caller decodes the body.
    async fn get(&self, url: String) -> Result<reqwest::Response, ApiError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{url} -> {status}");

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("catalog API error: {} - {}", status.as_u16(), message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn list_books(
        &self,
        offset: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<Vec<Book>, ApiError> {
        let mut request = self
            .client
            .get(format!("{}/books", self.base_url))
            .query(&[("offset", offset), ("limit", limit)]);
        if let Some(term) = search {
            request = request.query(&[("search", term)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("catalog API error: {} - {}", status.as_u16(), message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Insist on the documented envelope. A bare array (or anything else)
        // is a schema mismatch, not an empty result.
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: BookListResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("list response did not match the {{\"data\": [...]}} envelope: {e}");
            ApiError::Parse(e.to_string())
        })?;

        debug!(
            "listed {} books (offset={}, limit={}, total={})",
            envelope.data.len(),
            envelope.offset,
            envelope.limit,
            envelope.total_count
        );
        Ok(envelope.data)
    }

    async fn book_details(&self, id: &str) -> Result<Book, ApiError> {
        let response = self.get(format!("{}/books/{}", self.base_url, id)).await?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let book: Book = serde_json::from_str(&body).map_err(|e| {
            warn!("detail response did not match the Book schema: {e}");
            ApiError::Parse(e.to_string())
        })?;

        Ok(book)
    }
}
