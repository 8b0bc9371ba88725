//! # BookHive
//!
//! A terminal client for browsing a BookHive catalog server. Shows the
//! popular-books shelf, full-text search, and per-book detail pages.
//!
//! ## Architecture
//!
//! - [`api`]: HTTP catalog client (reqwest + serde).
//! - [`core`]: routes, fetch state, the action reducer, and configuration.
//!   Framework-agnostic; owns every piece of business logic.
//! - [`tui`]: the ratatui adapter. Terminal I/O, components, the event loop.

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
