//! # API Types
//!
//! Wire types for the BookHive catalog API. These mirror the server's JSON
//! exactly; anything the UI derives from them lives elsewhere.
//!
//! The list endpoint always wraps results in an envelope:
//!
//! ```json
//! { "data": [...], "offset": 0, "limit": 10, "totalCount": 2 }
//! ```
//!
//! The detail endpoint returns a bare `Book` object. A body that doesn't
//! match these shapes is a parse error, never silently treated as empty.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Read-only from the client's perspective. `description` is only populated
/// by the detail endpoint; list responses omit it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Book {
    /// Stable unique identifier, used to derive the detail route.
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
    /// Reference to an external cover image resource.
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Book {
    /// Display label for list cards: `Title (Year)`.
    pub fn card_label(&self) -> String {
        format!("{} ({})", self.title, self.publication_year)
    }
}

/// Envelope returned by `GET /books`. The pagination fields echo the request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookListResponse {
    pub data: Vec<Book>,
    pub offset: i64,
    pub limit: i64,
    #[serde(rename = "totalCount")]
    pub total_count: i64,
}
