//! # BookCard Component
//!
//! One entry in a book grid: a cover placeholder above a label. Purely
//! presentational — the grid decides selection and what opening a card does.
//!
//! Implemented as a ratatui `Widget` (on `&BookCard`) so the grid can render
//! cards into a `ScrollView` buffer; the `Component` impl delegates.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::api::Book;
use crate::tui::component::Component;
use crate::tui::components::skeleton::SkeletonBlock;

/// Cell width a card occupies in a grid, including spacing.
pub const CARD_WIDTH: u16 = 22;
/// Cell height: cover panel plus two label lines.
pub const CARD_HEIGHT: u16 = 9;
const COVER_HEIGHT: u16 = 7;

pub struct BookCard {
    /// Label under the cover, e.g. "Dune (1965)".
    pub label: String,
    pub selected: bool,
    /// True while the grid is still loading and this card is a placeholder.
    pub placeholder: bool,
}

impl BookCard {
    pub fn from_book(book: &Book, selected: bool) -> Self {
        Self {
            label: book.card_label(),
            selected,
            placeholder: false,
        }
    }

    /// A skeleton card for the pending state.
    pub fn skeleton() -> Self {
        Self {
            label: String::new(),
            selected: false,
            placeholder: true,
        }
    }
}

impl Widget for &BookCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cover_area = Rect {
            height: COVER_HEIGHT.min(area.height),
            width: area.width.saturating_sub(2),
            ..area
        };

        let border_style = if self.selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cover = Block::bordered().border_style(border_style);
        let inner = cover.inner(cover_area);
        cover.render(cover_area, buf);
        SkeletonBlock.render(inner, buf);

        if self.placeholder {
            return;
        }

        let label_area = Rect {
            x: area.x,
            y: area.y + cover_area.height,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(cover_area.height),
        };
        let label_style = if self.selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::ITALIC)
        };
        Paragraph::new(self.label.as_str())
            .style(label_style)
            .wrap(Wrap { trim: true })
            .render(label_area, buf);
    }
}

impl Component for BookCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_book;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(card: &mut BookCard) -> String {
        let backend = TestBackend::new(CARD_WIDTH, CARD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| card.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_card_derives_label_from_book() {
        let card = BookCard::from_book(&sample_book("67a1"), false);
        assert_eq!(card.label, "Book 67a1 (1999)");
    }

    #[test]
    fn test_card_renders_label() {
        let mut card = BookCard::from_book(&sample_book("1"), false);
        let text = rendered_text(&mut card);
        assert!(text.contains("Book 1 (1999)"));
    }

    #[test]
    fn test_skeleton_card_has_no_label() {
        let mut card = BookCard::skeleton();
        let text = rendered_text(&mut card);
        assert!(!text.contains('('));
        assert!(text.contains('░'));
    }
}
