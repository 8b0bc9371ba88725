//! # BookDetails Component
//!
//! The detail view for a single book. Driven by the detail fetch slot:
//! skeleton while pending, an explicit failure message on error, and the
//! populated layout on success.
//!
//! The populated layout mirrors the catalog's web ancestry: a cover panel
//! beside the bibliographic fields with a two-line description summary, then
//! a full Description section underneath. The description intentionally
//! appears in both places; every other field appears exactly once.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Book;
use crate::core::fetch::FetchState;
use crate::tui::components::link::Link;
use crate::tui::components::skeleton::{SkeletonBlock, SkeletonLines};

const FAILED_MESSAGE: &str = "Couldn't load this book (see bookhive.log)";
const COVER_WIDTH: u16 = 24;

/// Props for one render pass.
pub struct BookDetails<'a> {
    pub book: &'a FetchState<Book>,
}

impl BookDetails<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect, scroll: &mut ScrollViewState) {
        match self.book {
            FetchState::Pending => render_skeleton(frame, area),
            FetchState::Failed => {
                let message = Paragraph::new(FAILED_MESSAGE)
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center);
                frame.render_widget(message, area);
            }
            FetchState::Succeeded(book) => render_book(frame, area, book, scroll),
        }
    }
}

/// Structural placeholder matching the populated layout: a cover block next
/// to a few text-width lines.
fn render_skeleton(frame: &mut Frame, area: Rect) {
    let [cover_area, info_area] =
        Layout::horizontal([Constraint::Length(COVER_WIDTH), Constraint::Min(0)])
            .spacing(2)
            .areas(area);

    let cover = Rect {
        height: 10.min(cover_area.height),
        ..cover_area
    };
    frame.render_widget(SkeletonBlock, cover);

    let mut lines = SkeletonLines {
        widths: vec![30, 24, 18],
    };
    crate::tui::component::Component::render(&mut lines, frame, info_area);
}

fn render_book(frame: &mut Frame, area: Rect, book: &Book, scroll: &mut ScrollViewState) {
    let description = book.description.as_deref().unwrap_or_default();

    let [top_area, section_area] =
        Layout::vertical([Constraint::Length(12), Constraint::Min(0)])
            .spacing(1)
            .areas(area);

    // Top: cover panel | bibliographic fields + clamped summary.
    let [cover_area, info_area] =
        Layout::horizontal([Constraint::Length(COVER_WIDTH), Constraint::Min(0)])
            .spacing(2)
            .areas(top_area);

    let cover = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    let cover_inner = cover.inner(cover_area);
    frame.render_widget(cover, cover_area);
    frame.render_widget(SkeletonBlock, cover_inner);

    let info_lines = render_info_lines(book);
    let summary_offset = info_lines.len() as u16;
    frame.render_widget(Paragraph::new(info_lines), info_area);

    // Two-line clamped summary under the fields, like the web layout's
    // line-clamp. The full text lives in the section below.
    let summary_area = Rect {
        x: info_area.x,
        y: info_area.y + summary_offset,
        width: info_area.width,
        height: info_area.height.saturating_sub(summary_offset).min(2),
    };
    let summary = Paragraph::new(description)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, summary_area);

    // Full description section, scrollable for long texts.
    if section_area.height < 2 {
        return;
    }
    let header = Line::styled(
        "Description",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(header, Rect { height: 1, ..section_area });

    let body_area = Rect {
        y: section_area.y + 2,
        height: section_area.height.saturating_sub(2),
        ..section_area
    };
    let content_width = body_area.width.saturating_sub(1);
    let body = Paragraph::new(description).wrap(Wrap { trim: true });
    let content_height = body.line_count(content_width.max(1)) as u16;

    let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
    scroll_view.render_widget(
        body,
        Rect {
            x: 0,
            y: 0,
            width: content_width,
            height: content_height,
        },
    );
    frame.render_stateful_widget(scroll_view, body_area, scroll);
}

fn render_info_lines(book: &Book) -> Vec<Line<'_>> {
    vec![
        Line::styled(
            book.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("by ", Style::default().fg(Color::DarkGray)),
            Span::raw(book.author.as_str()),
        ]),
        Line::styled(
            format!("{} · {}", book.publication_year, book.genre),
            Style::default().fg(Color::Gray),
        ),
        Line::styled(format!("ISBN {}", book.isbn), Style::default().fg(Color::DarkGray)),
        Line::from(vec![
            Link::external("Cover", book.image_url.clone()).to_span(),
            Span::styled(
                format!("  {}", book.image_url),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::raw(""),
    ]
}
