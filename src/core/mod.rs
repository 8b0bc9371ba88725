//! # Core Application Logic
//!
//! This module contains BookHive's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • FetchState / seq     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  catalog   │      │   tests    │
//!     │  Adapter   │      │  client    │      │  (stubs)   │
//!     │ (ratatui)  │      │ (reqwest)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`fetch`]: The pending/failed/succeeded lifecycle and staleness guard
//! - [`route`]: Pages and their path/query-string representation
//! - [`config`]: Settings resolution (file, env, CLI)

pub mod action;
pub mod config;
pub mod fetch;
pub mod route;
pub mod state;
