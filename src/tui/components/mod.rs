//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields:
//! - `HeaderSection`: home-page welcome banner
//! - `NavBar`: fixed route list with active-entry highlighting
//! - `Link`: the navigation primitive (internal route or external URL)
//! - `BookCard`: one cover-plus-label grid entry
//! - `SkeletonBlock` / `SkeletonLines`: pending-state placeholders
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit high-level events:
//! - `SearchBar`: single-line query input, emits `SearchEvent`
//! - `BookGridState`: grid selection and scrolling, emits `GridEvent`
//!
//! `BookGrid` and `BookDetails` are per-frame prop bundles over a fetch
//! slot; they own the skeleton/empty/failed/populated branching so the rest
//! of the app never special-cases a lifecycle state.
//!
//! Components receive external data as props, not by reaching into global
//! state; dependencies stay explicit and each file co-locates its state,
//! events, rendering, and tests.

pub mod book_card;
pub mod book_details;
pub mod book_grid;
pub mod header;
pub mod link;
pub mod nav_bar;
pub mod search_bar;
pub mod skeleton;

pub use book_card::BookCard;
pub use book_details::BookDetails;
pub use book_grid::{BookGrid, BookGridState, GridEvent};
pub use header::HeaderSection;
pub use link::Link;
pub use nav_bar::NavBar;
pub use search_bar::{SearchBar, SearchEvent};
