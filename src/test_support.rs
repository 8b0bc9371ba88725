//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, Book, CatalogSource};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// A catalog source that serves a fixed set of books without a network.
pub struct StubCatalog {
    pub books: Vec<Book>,
}

#[async_trait]
impl CatalogSource for StubCatalog {
    async fn list_books(
        &self,
        offset: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<Vec<Book>, ApiError> {
        let filtered: Vec<Book> = self
            .books
            .iter()
            .filter(|b| match search {
                Some(term) => b.title.to_lowercase().contains(&term.to_lowercase()),
                None => true,
            })
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();
        Ok(filtered)
    }

    async fn book_details(&self, id: &str) -> Result<Book, ApiError> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(ApiError::Api {
                status: 404,
                message: "Book not found".to_string(),
            })
    }
}

/// A book with the given id and otherwise fixed fields.
pub fn sample_book(id: &str) -> Book {
    Book {
        id: id.to_string(),
        isbn: "978-0-452-28423-4".to_string(),
        title: format!("Book {id}"),
        author: "Test Author".to_string(),
        publication_year: 1999,
        genre: "Fiction".to_string(),
        image_url: format!("https://covers.example.com/{id}.jpg"),
        description: None,
    }
}

fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        api_base_url: "http://localhost:0/api".to_string(),
        page_limit: 10,
        popular_limit: 12,
    }
}

/// Creates a test App with an empty stub catalog.
pub fn test_app() -> App {
    App::new(Arc::new(StubCatalog { books: Vec::new() }), &test_config())
}
