//! # Header Section
//!
//! The home-page welcome banner. Purely presentational.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

const TAGLINE: &str = "Discover your next favorite book with our curated collection of \
literary treasures. From bestselling novels to hidden gems, BookHive helps you explore, \
track, and share your reading journey with fellow book lovers.";

pub struct HeaderSection;

impl HeaderSection {
    /// Lines needed for the banner plus the wrapped tagline at this width.
    pub fn required_height(width: u16) -> u16 {
        let tagline = Paragraph::new(TAGLINE).wrap(Wrap { trim: true });
        2 + tagline.line_count(width.max(1)) as u16
    }
}

impl Component for HeaderSection {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Welcome to ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    "BookHive",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::raw(""),
        ];
        lines.push(Line::styled(TAGLINE, Style::default().fg(Color::Gray)));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
