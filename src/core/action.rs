//! # Actions
//!
//! Everything that can happen in BookHive becomes an `Action`.
//! User submits a search? That's `Action::SubmitSearch`.
//! A fetch resolves? That's `Action::SearchLoaded { seq, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetch effects carry a sequence token stamped by the slot's `RequestSeq`.
//! When the fetch resolves, the corresponding `*Loaded` action carries the
//! token back; a token that is no longer current means the user has since
//! changed the identifying parameter, and the payload is dropped instead of
//! overwriting newer state.

use log::{debug, info, warn};

use crate::api::{ApiError, Book};
use crate::core::fetch::FetchState;
use crate::core::route::{NavTarget, Route};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Switch to a route (nav bar, deep link, back).
    Navigate(Route),
    /// The search input was submitted.
    SubmitSearch(String),
    /// A book card was activated.
    OpenBook(String),
    /// A link component was activated.
    LinkActivated(NavTarget),
    /// The popular-books fetch resolved.
    PopularLoaded {
        seq: u64,
        result: Result<Vec<Book>, ApiError>,
    },
    /// The search fetch resolved.
    SearchLoaded {
        seq: u64,
        result: Result<Vec<Book>, ApiError>,
    },
    /// The detail fetch resolved.
    DetailLoaded {
        seq: u64,
        result: Result<Book, ApiError>,
    },
    Quit,
}

/// I/O the event loop must perform after an `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPopular { seq: u64, offset: i64, limit: i64 },
    FetchSearch { seq: u64, query: String, limit: i64 },
    FetchDetail { seq: u64, id: String },
    Quit,
    None,
}

/// The reducer. All state transitions funnel through here.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(route) => enter_route(app, route),
        Action::SubmitSearch(query) => enter_route(app, Route::Search { query }),
        Action::OpenBook(id) => enter_route(app, Route::Detail { id }),
        Action::LinkActivated(NavTarget::Internal(path)) => {
            enter_route(app, Route::parse(&path))
        }
        Action::LinkActivated(NavTarget::External(url)) => {
            // No browsing context to open; surface the URL instead.
            info!("external link activated: {url}");
            app.status_message = format!("Opens in browser: {url}");
            Effect::None
        }
        Action::PopularLoaded { seq, result } => {
            if !app.popular_seq.is_current(seq) {
                debug!("dropping stale popular response (seq {seq})");
                return Effect::None;
            }
            app.popular = settle("popular books", result);
            Effect::None
        }
        Action::SearchLoaded { seq, result } => {
            if !app.results_seq.is_current(seq) {
                debug!("dropping stale search response (seq {seq})");
                return Effect::None;
            }
            app.results = settle("search results", result);
            Effect::None
        }
        Action::DetailLoaded { seq, result } => {
            if !app.detail_seq.is_current(seq) {
                debug!("dropping stale detail response (seq {seq})");
                return Effect::None;
            }
            app.detail = settle("book details", result);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Enters a route, resetting the relevant fetch slot to pending and stamping
/// a fresh sequence token. Exactly one fetch effect per entry.
fn enter_route(app: &mut App, route: Route) -> Effect {
    app.route = route;
    match app.route.clone() {
        Route::Home => {
            app.popular = FetchState::Pending;
            Effect::FetchPopular {
                seq: app.popular_seq.begin(),
                offset: 0,
                limit: app.popular_limit,
            }
        }
        Route::Search { query } if query.is_empty() => {
            // Nothing to search for. An empty succeeded slot renders the
            // "no results" branch, distinct from a failure.
            app.results_seq.begin();
            app.results = FetchState::Succeeded(Vec::new());
            Effect::None
        }
        Route::Search { query } => {
            app.results = FetchState::Pending;
            Effect::FetchSearch {
                seq: app.results_seq.begin(),
                query,
                limit: app.page_limit,
            }
        }
        Route::Detail { id } => {
            app.detail = FetchState::Pending;
            Effect::FetchDetail {
                seq: app.detail_seq.begin(),
                id,
            }
        }
        Route::About => Effect::None,
    }
}

/// Collapses a fetch result into the slot state. All error kinds degrade to
/// `Failed`; the distinction only reaches the log.
fn settle<T>(what: &str, result: Result<T, ApiError>) -> FetchState<T> {
    match result {
        Ok(payload) => FetchState::Succeeded(payload),
        Err(e) => {
            warn!("failed to fetch {what}: {e}");
            FetchState::Failed
        }
    }
}
