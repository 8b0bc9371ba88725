//! # SearchBar Component
//!
//! Single-line text input for the search view.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state; whether the bar has focus is a
//! prop from the main loop. Submitting emits the trimmed query and leaves
//! the buffer in place so the user can refine it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search books...";

/// High-level events emitted by the SearchBar.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// User submitted the query (Enter pressed).
    Submit(String),
    /// Text content changed.
    ContentChanged,
}

pub struct SearchBar {
    /// Text buffer (internal state).
    pub buffer: String,
    /// Whether keystrokes currently go to this bar (prop).
    pub focused: bool,
    /// Cursor position as a byte offset into `buffer`.
    cursor: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
            cursor: 0,
        }
    }

    /// Replace the buffer, e.g. when a deep link carries a query.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    fn prev_char_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_char_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered().title("Search").border_style(border_style);

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(input.block(block), area);

        if self.focused {
            // Cursor column is the display width of the text left of it.
            let prefix_width = self.buffer[..self.cursor].width() as u16;
            let x = area.x + 1 + prefix_width.min(area.width.saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: flatten pasted newlines.
                let text = text.replace('\n', " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_char_boundary();
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(SearchEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = self.next_char_boundary();
                    self.buffer.drain(self.cursor..next);
                    Some(SearchEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.prev_char_boundary();
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.next_char_boundary();
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => {
                let query = self.buffer.trim();
                if query.is_empty() {
                    None
                } else {
                    Some(SearchEvent::Submit(query.to_string()))
                }
            }
            _ => None,
        }
    }
}
