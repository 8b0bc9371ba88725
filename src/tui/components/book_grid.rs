//! # BookGrid Component
//!
//! A scrollable grid of book cards driven by a fetch slot. The grid owns the
//! three placeholder branches of the fetch lifecycle:
//!
//! - pending: a skeleton grid structurally matching the populated layout
//! - failed: an explicit failure message (distinct from "no results")
//! - succeeded but empty: the "No results found" branch
//! - succeeded: one card per book, arrow-key selection, Enter opens
//!
//! Layout facts (column count, card count) are cached on the state during
//! render so event handling can move the selection without re-measuring.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Book;
use crate::core::fetch::FetchState;
use crate::tui::component::EventHandler;
use crate::tui::components::book_card::{BookCard, CARD_HEIGHT, CARD_WIDTH};
use crate::tui::event::TuiEvent;

const FAILED_MESSAGE: &str = "Couldn't load books (see bookhive.log)";
const EMPTY_MESSAGE: &str = "No results found";
const SKELETON_CARDS: usize = 8;

/// High-level events emitted by the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// Open the card at this index (Enter on a selection).
    Open(usize),
}

/// Selection and scroll state, persistent across renders.
pub struct BookGridState {
    pub selected: usize,
    pub scroll: ScrollViewState,
    // Cached layout facts from the last render.
    columns: usize,
    count: usize,
}

impl BookGridState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll: ScrollViewState::default(),
            columns: 1,
            count: 0,
        }
    }

    /// Reset selection and scroll, e.g. when the underlying query changes.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll.scroll_to_top();
    }

    fn move_selection(&mut self, delta: isize) -> bool {
        if self.count == 0 {
            return false;
        }
        let target = self.selected as isize + delta;
        if target < 0 || target >= self.count as isize {
            return false;
        }
        self.selected = target as usize;
        true
    }
}

impl Default for BookGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for BookGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        let columns = self.columns.max(1) as isize;
        match event {
            TuiEvent::CursorLeft => {
                self.move_selection(-1);
                None
            }
            TuiEvent::CursorRight => {
                self.move_selection(1);
                None
            }
            TuiEvent::CursorUp => {
                self.move_selection(-columns);
                None
            }
            TuiEvent::CursorDown => {
                self.move_selection(columns);
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll.scroll_down();
                None
            }
            TuiEvent::Submit if self.count > 0 => Some(GridEvent::Open(self.selected)),
            _ => None,
        }
    }
}

/// Props for one render pass. The books are borrowed from the app's fetch
/// slot; the grid never owns catalog data.
pub struct BookGrid<'a> {
    pub title: &'a str,
    pub books: &'a FetchState<Vec<Book>>,
}

impl BookGrid<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut BookGridState) {
        let title = Line::styled(self.title, Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, Rect { height: 1.min(area.height), ..area });

        let body = Rect {
            y: area.y + 2,
            height: area.height.saturating_sub(2),
            ..area
        };
        if body.height == 0 {
            return;
        }

        match self.books {
            FetchState::Pending => {
                state.count = 0;
                self.render_skeleton(frame, body);
            }
            FetchState::Failed => {
                state.count = 0;
                let message =
                    Paragraph::new(FAILED_MESSAGE).style(Style::default().fg(Color::Red));
                frame.render_widget(message, body);
            }
            FetchState::Succeeded(books) if books.is_empty() => {
                state.count = 0;
                let message =
                    Paragraph::new(EMPTY_MESSAGE).style(Style::default().fg(Color::Gray));
                frame.render_widget(message, body);
            }
            FetchState::Succeeded(books) => self.render_cards(frame, body, books, state),
        }
    }

    fn render_skeleton(&self, frame: &mut Frame, area: Rect) {
        let columns = grid_columns(area.width);
        for index in 0..SKELETON_CARDS {
            let cell = grid_cell(area, index, columns);
            if cell.bottom() > area.bottom() {
                break;
            }
            frame.render_widget(&BookCard::skeleton(), cell);
        }
    }

    fn render_cards(
        &self,
        frame: &mut Frame,
        area: Rect,
        books: &[Book],
        state: &mut BookGridState,
    ) {
        let columns = grid_columns(area.width);
        state.columns = columns;
        state.count = books.len();
        state.selected = state.selected.min(books.len() - 1);

        let rows = books.len().div_ceil(columns);
        let content_width = area.width.saturating_sub(1);
        let content_height = (rows as u16) * CARD_HEIGHT;

        scroll_to_selected(state, area.height, content_height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, book) in books.iter().enumerate() {
            let card = BookCard::from_book(book, index == state.selected);
            let origin = Rect { x: 0, y: 0, width: content_width, height: content_height };
            scroll_view.render_widget(&card, grid_cell(origin, index, columns));
        }

        frame.render_stateful_widget(scroll_view, area, &mut state.scroll);
    }
}

/// How many cards fit side by side at this width. Always at least one.
fn grid_columns(width: u16) -> usize {
    ((width / CARD_WIDTH) as usize).max(1)
}

/// The cell rect of the index-th card in a grid anchored at `area`.
fn grid_cell(area: Rect, index: usize, columns: usize) -> Rect {
    let col = (index % columns) as u16;
    let row = (index / columns) as u16;
    Rect {
        x: area.x + col * CARD_WIDTH,
        y: area.y + row * CARD_HEIGHT,
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
    }
}

/// Keeps the selected card's row inside the visible window.
fn scroll_to_selected(state: &mut BookGridState, visible_height: u16, content_height: u16) {
    let columns = state.columns.max(1);
    let row_top = ((state.selected / columns) as u16) * CARD_HEIGHT;
    let row_bottom = row_top + CARD_HEIGHT;

    let offset = state.scroll.offset().y;
    if row_top < offset {
        state.scroll.set_offset(Position::new(0, row_top));
    } else if row_bottom > offset + visible_height {
        let new_offset = row_bottom
            .saturating_sub(visible_height)
            .min(content_height.saturating_sub(visible_height));
        state.scroll.set_offset(Position::new(0, new_offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_book;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(grid: &BookGrid<'_>, state: &mut BookGridState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| grid.render(f, f.area(), state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_pending_renders_skeleton_not_messages() {
        let books = FetchState::Pending;
        let grid = BookGrid {
            title: "Popular Books",
            books: &books,
        };
        let text = draw(&grid, &mut BookGridState::new(), 80, 24);
        assert!(text.contains("Popular Books"));
        assert!(text.contains('░'));
        assert!(!text.contains(EMPTY_MESSAGE));
        assert!(!text.contains("Couldn't load"));
    }

    #[test]
    fn test_empty_result_renders_no_results_branch() {
        let books = FetchState::Succeeded(Vec::new());
        let grid = BookGrid {
            title: "Search Results",
            books: &books,
        };
        let text = draw(&grid, &mut BookGridState::new(), 80, 24);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(!text.contains("Couldn't load"));
    }

    #[test]
    fn test_failed_renders_distinct_error_branch() {
        let books: FetchState<Vec<_>> = FetchState::Failed;
        let grid = BookGrid {
            title: "Search Results",
            books: &books,
        };
        let text = draw(&grid, &mut BookGridState::new(), 80, 24);
        assert!(text.contains("Couldn't load books"));
        assert!(!text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_two_books_render_two_cards() {
        let books = FetchState::Succeeded(vec![sample_book("1"), sample_book("2")]);
        let grid = BookGrid {
            title: "Search Results",
            books: &books,
        };
        let text = draw(&grid, &mut BookGridState::new(), 80, 24);
        assert!(text.contains("Book 1 (1999)"));
        assert!(text.contains("Book 2 (1999)"));
        assert!(!text.contains("Book 3"));
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let books = FetchState::Succeeded(vec![
            sample_book("1"),
            sample_book("2"),
            sample_book("3"),
        ]);
        let grid = BookGrid {
            title: "Popular Books",
            books: &books,
        };
        let mut state = BookGridState::new();
        draw(&grid, &mut state, 80, 24); // caches layout

        assert!(state.handle_event(&TuiEvent::CursorRight).is_none());
        assert_eq!(state.selected, 1);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.selected, 2);
        // at the last card; moving further is a no-op
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.selected, 2);

        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(GridEvent::Open(2))
        );
    }

    #[test]
    fn test_submit_on_empty_grid_emits_nothing() {
        let books: FetchState<Vec<_>> = FetchState::Succeeded(Vec::new());
        let grid = BookGrid {
            title: "Search Results",
            books: &books,
        };
        let mut state = BookGridState::new();
        draw(&grid, &mut state, 80, 24);
        assert!(state.handle_event(&TuiEvent::Submit).is_none());
    }

    #[test]
    fn test_selection_clamps_when_result_set_shrinks() {
        let mut state = BookGridState::new();
        let many = FetchState::Succeeded(vec![
            sample_book("1"),
            sample_book("2"),
            sample_book("3"),
        ]);
        let grid = BookGrid {
            title: "Search Results",
            books: &many,
        };
        draw(&grid, &mut state, 80, 24);
        state.selected = 2;

        let few = FetchState::Succeeded(vec![sample_book("1")]);
        let grid = BookGrid {
            title: "Search Results",
            books: &few,
        };
        draw(&grid, &mut state, 80, 24);
        assert_eq!(state.selected, 0);
    }
}
