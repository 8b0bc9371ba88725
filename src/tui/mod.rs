//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Fetching** (a visible slot is pending): draws every ~120ms so the
//!   skeleton appears promptly when a fetch settles.
//! - **Idle**: sleeps up to 400ms, only redraws on events or resize.
//!
//! ## Fetch plumbing
//!
//! Fetch effects from the reducer are spawned as tokio tasks holding a clone
//! of the catalog source; each task sends its `*Loaded` action back over an
//! mpsc channel that the loop drains between draws. In-flight tasks are
//! never aborted — a task whose sequence token went stale has its payload
//! dropped by the reducer.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::api::{CatalogClient, CatalogSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::{NavTarget, Route};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{BookGridState, GridEvent, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal focus: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keystrokes go to the search input.
    Input,
    /// Keystrokes navigate the page (grid selection, shortcuts).
    Browse,
}

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub search_bar: SearchBar,
    pub grid: BookGridState,
    pub detail_scroll: ScrollViewState,
    pub focus: Focus,
    /// Routes to return to on Esc, most recent last.
    pub history: Vec<Route>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            grid: BookGridState::new(),
            detail_scroll: ScrollViewState::default(),
            focus: Focus::Browse,
            history: Vec::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig, initial_route: Route) -> std::io::Result<()> {
    let catalog: Arc<dyn CatalogSource> =
        Arc::new(CatalogClient::new(config.api_base_url.clone()));
    let mut app = App::new(catalog, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions coming back from fetch tasks
    let (tx, rx) = mpsc::channel();

    // Deep link: enter the requested route (defaults to Home)
    navigate(&mut app, &mut tui, &tx, initial_route, false);

    let mut needs_redraw = true; // Force first frame
    loop {
        // A pending slot on the current page means a skeleton is on screen
        let fetching = match &app.route {
            Route::Home => app.popular.is_pending(),
            Route::Search { .. } => app.results.is_pending(),
            Route::Detail { .. } => app.detail.is_pending(),
            Route::About => false,
        };
        if fetching {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if fetching {
            std::time::Duration::from_millis(120)
        } else {
            std::time::Duration::from_millis(400)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = quit_requested(&mut app);
                continue;
            }

            // Esc: leave the input, then walk back through history,
            // then quit from home
            if matches!(event, TuiEvent::Back) {
                if tui.focus == Focus::Input {
                    tui.focus = Focus::Browse;
                } else if let Some(route) = tui.history.pop() {
                    navigate(&mut app, &mut tui, &tx, route, false);
                } else if app.route != Route::Home {
                    navigate(&mut app, &mut tui, &tx, Route::Home, false);
                } else {
                    should_quit = quit_requested(&mut app);
                }
                continue;
            }

            match tui.focus {
                Focus::Input => {
                    if matches!(event, TuiEvent::ToggleFocus) {
                        tui.focus = Focus::Browse;
                        continue;
                    }
                    if let Some(SearchEvent::Submit(query)) =
                        tui.search_bar.handle_event(&event)
                    {
                        tui.focus = Focus::Browse;
                        tui.grid.reset();
                        dispatch(
                            &mut app,
                            &mut tui,
                            &tx,
                            Action::SubmitSearch(query),
                            true,
                        );
                    }
                }
                Focus::Browse => match event {
                    TuiEvent::InputChar('q') => should_quit = quit_requested(&mut app),
                    TuiEvent::InputChar('/') => {
                        if !matches!(app.route, Route::Search { .. }) {
                            navigate(
                                &mut app,
                                &mut tui,
                                &tx,
                                Route::Search {
                                    query: String::new(),
                                },
                                true,
                            );
                        }
                        tui.focus = Focus::Input;
                    }
                    TuiEvent::ToggleFocus if matches!(app.route, Route::Search { .. }) => {
                        tui.focus = Focus::Input;
                    }
                    TuiEvent::InputChar(c @ '1'..='9') => {
                        let index = c as usize - '1' as usize;
                        if let Some((_, path)) = components::nav_bar::NAV_ENTRIES.get(index) {
                            navigate(&mut app, &mut tui, &tx, Route::parse(path), true);
                        }
                    }
                    TuiEvent::InputChar('o') if matches!(app.route, Route::Detail { .. }) => {
                        let cover = app.detail.payload().map(|b| b.image_url.clone());
                        if let Some(url) = cover {
                            dispatch(
                                &mut app,
                                &mut tui,
                                &tx,
                                Action::LinkActivated(NavTarget::External(url)),
                                false,
                            );
                        }
                    }
                    TuiEvent::ScrollUp | TuiEvent::ScrollDown
                        if matches!(app.route, Route::Detail { .. }) =>
                    {
                        if matches!(event, TuiEvent::ScrollUp) {
                            tui.detail_scroll.scroll_up();
                        } else {
                            tui.detail_scroll.scroll_down();
                        }
                    }
                    _ => {
                        if let Some(GridEvent::Open(index)) = tui.grid.handle_event(&event) {
                            if let Some(id) = visible_book_id(&app, index) {
                                tui.detail_scroll.scroll_to_top();
                                dispatch(&mut app, &mut tui, &tx, Action::OpenBook(id), true);
                            }
                        }
                    }
                },
            }
        }

        if should_quit {
            break;
        }

        // Apply actions from completed fetch tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            perform_effect(&app, effect, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Quitting goes through the reducer like every other state transition.
fn quit_requested(app: &mut App) -> bool {
    matches!(update(app, Action::Quit), Effect::Quit)
}

/// The id of the index-th book in whatever grid the current route shows.
fn visible_book_id(app: &App, index: usize) -> Option<String> {
    let books = match &app.route {
        Route::Home => app.popular.payload(),
        Route::Search { .. } => app.results.payload(),
        _ => None,
    }?;
    books.get(index).map(|b| b.id.clone())
}

/// Route change initiated by the user: optionally remembers the current
/// route for Esc, syncs presentation state, and dispatches the navigation.
fn navigate(
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    route: Route,
    remember: bool,
) {
    if let Route::Search { query } = &route {
        tui.search_bar.set_text(query);
        tui.focus = if query.is_empty() {
            Focus::Input
        } else {
            Focus::Browse
        };
    } else {
        tui.focus = Focus::Browse;
    }
    tui.grid.reset();
    tui.detail_scroll.scroll_to_top();
    dispatch(app, tui, tx, Action::Navigate(route), remember);
}

fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    action: Action,
    remember: bool,
) {
    if remember {
        tui.history.push(app.route.clone());
    }
    let effect = update(app, action);
    perform_effect(app, effect, tx);
}

/// Spawns the I/O an effect asks for. Each fetch task owns a clone of the
/// catalog source and reports back through the action channel.
fn perform_effect(app: &App, effect: Effect, tx: &mpsc::Sender<Action>) {
    match effect {
        Effect::FetchPopular { seq, offset, limit } => {
            info!("fetching popular books (seq={seq}, offset={offset}, limit={limit})");
            let catalog = app.catalog.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = catalog.list_books(offset, limit, None).await;
                if tx.send(Action::PopularLoaded { seq, result }).is_err() {
                    warn!("failed to deliver popular books: receiver dropped");
                }
            });
        }
        Effect::FetchSearch { seq, query, limit } => {
            info!("searching books (seq={seq}, query={query:?})");
            let catalog = app.catalog.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = catalog.list_books(0, limit, Some(&query)).await;
                if tx.send(Action::SearchLoaded { seq, result }).is_err() {
                    warn!("failed to deliver search results: receiver dropped");
                }
            });
        }
        Effect::FetchDetail { seq, id } => {
            info!("fetching book details (seq={seq}, id={id})");
            let catalog = app.catalog.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = catalog.book_details(&id).await;
                if tx.send(Action::DetailLoaded { seq, result }).is_err() {
                    warn!("failed to deliver book details: receiver dropped");
                }
            });
        }
        Effect::Quit | Effect::None => {}
    }
}
