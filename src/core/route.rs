//! # Routes
//!
//! The set of pages the app can show, plus a path representation so routes
//! can round-trip through query strings (`/book?id=<id>`,
//! `/search?query=<q>`). Paths are what the nav bar declares, what book
//! cards derive from ids, and what `--open` accepts for deep links.

use std::fmt;

/// One page of the app. Parameterised routes carry their identifying
/// parameter; changing it re-enters the pending fetch state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search { query: String },
    Detail { id: String },
    About,
}

impl Route {
    /// The bare path, without query parameters. Nav-bar highlighting compares
    /// these, so `/search?query=foo` still lights up the Search entry.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Search { .. } => "/search",
            Route::Detail { .. } => "/book",
            Route::About => "/about",
        }
    }

    /// Parse a path-with-query into a route. Unknown paths fall back to
    /// Home; a detail path without an `id` is meaningless and also falls
    /// back (there is nothing to fetch).
    pub fn parse(input: &str) -> Route {
        let (path, query) = match input.split_once('?') {
            Some((p, q)) => (p, q),
            None => (input, ""),
        };

        match path.trim_end_matches('/') {
            "/search" => Route::Search {
                query: query_param(query, "query").unwrap_or_default(),
            },
            "/book" => match query_param(query, "id") {
                Some(id) if !id.is_empty() => Route::Detail { id },
                _ => Route::Home,
            },
            "/about" => Route::About,
            _ => Route::Home,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Search { query } if query.is_empty() => write!(f, "/search"),
            Route::Search { query } => write!(f, "/search?query={}", encode(query)),
            Route::Detail { id } => write!(f, "/book?id={}", encode(id)),
            Route::About => write!(f, "/about"),
        }
    }
}

/// Where a link points. External targets never change the in-app route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// A route inside the app, as a path string (e.g. `/book?id=42`).
    Internal(String),
    /// An outbound URL. Shown with a marker; activation only surfaces the
    /// URL, since a terminal has no browsing context to open.
    External(String),
}

/// Extracts one query parameter from a raw query string.
fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| decode(value))
    })
}

/// Percent-encode the characters that would break the query-string syntax.
/// Everything else passes through; these paths are in-app identifiers, not
/// wire data (reqwest does its own encoding for HTTP requests).
fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ' ' => out.push_str("%20"),
            '&' => out.push_str("%26"),
            '?' => out.push_str("%3F"),
            '=' => out.push_str("%3D"),
            '%' => out.push_str("%25"),
            _ => out.push(c),
        }
    }
    out
}

fn decode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut bytes = value.bytes().peekable();
    let mut buf = Vec::new();
    while let Some(b) = bytes.next() {
        match b {
            b'+' => buf.push(b' '),
            b'%' => {
                let hi = bytes.next();
                let lo = bytes.next();
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        let hex = [hi, lo];
                        match u8::from_str_radix(std::str::from_utf8(&hex).unwrap_or(""), 16) {
                            Ok(byte) => buf.push(byte),
                            Err(_) => {
                                buf.push(b'%');
                                buf.extend_from_slice(&hex);
                            }
                        }
                    }
                    _ => buf.push(b'%'),
                }
            }
            other => buf.push(other),
        }
    }
    out.push_str(&String::from_utf8_lossy(&buf));
    out
}
