//! # Application State
//!
//! Core business state for BookHive. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn CatalogSource>   // catalog API (or test stub)
//! ├── route: Route                      // current page
//! ├── popular: FetchState<Vec<Book>>    // home view slot
//! ├── results: FetchState<Vec<Book>>    // search view slot
//! ├── detail: FetchState<Book>          // detail view slot
//! ├── *_seq: RequestSeq                 // per-slot stale-response guards
//! ├── status_message: String            // status bar text
//! └── page/popular limits               // from resolved config
//! ```
//!
//! Each fetch slot is owned exclusively by its view; a failure in one never
//! touches the others. State changes only happen through
//! `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::{Book, CatalogSource};
use crate::core::config::ResolvedConfig;
use crate::core::fetch::{FetchState, RequestSeq};
use crate::core::route::Route;

pub struct App {
    pub catalog: Arc<dyn CatalogSource>,
    pub route: Route,
    pub status_message: String,
    /// Home view: the Popular Books grid.
    pub popular: FetchState<Vec<Book>>,
    pub popular_seq: RequestSeq,
    /// Search view: the results grid for the current query.
    pub results: FetchState<Vec<Book>>,
    pub results_seq: RequestSeq,
    /// Detail view: one book with its description.
    pub detail: FetchState<Book>,
    pub detail_seq: RequestSeq,
    pub page_limit: i64,
    pub popular_limit: i64,
}

impl App {
    pub fn new(catalog: Arc<dyn CatalogSource>, config: &ResolvedConfig) -> Self {
        Self {
            catalog,
            route: Route::Home,
            status_message: String::from("Welcome to BookHive!"),
            popular: FetchState::Pending,
            popular_seq: RequestSeq::new(),
            results: FetchState::Pending,
            results_seq: RequestSeq::new(),
            detail: FetchState::Pending,
            detail_seq: RequestSeq::new(),
            page_limit: config.page_limit,
            popular_limit: config.popular_limit,
        }
    }

    /// The query shown in the search view, if the app is on it.
    pub fn current_query(&self) -> Option<&str> {
        match &self.route {
            Route::Search { query } => Some(query),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::route::Route;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to BookHive!");
        assert_eq!(app.route, Route::Home);
        assert!(app.popular.is_pending());
        assert!(app.detail.is_pending());
    }
}
