//! # Link Component
//!
//! The navigation primitive: a label pointing at either an in-app route path
//! or an external URL. Internal links render with active-route styling when
//! their path matches the current page; external links render with a `↗`
//! marker, since activating them can only surface the URL (a terminal has no
//! browsing context to open).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::route::NavTarget;
use crate::tui::component::Component;

pub struct Link {
    pub label: String,
    pub target: NavTarget,
    /// Whether this link points at the current route.
    pub active: bool,
}

impl Link {
    pub fn new(label: impl Into<String>, target: NavTarget) -> Self {
        Self {
            label: label.into(),
            target,
            active: false,
        }
    }

    pub fn internal(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(label, NavTarget::Internal(path.into()))
    }

    pub fn external(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(label, NavTarget::External(url.into()))
    }

    /// The link as a styled span, for embedding in larger lines (nav bar,
    /// cover panel).
    pub fn to_span(&self) -> Span<'static> {
        let text = match self.target {
            NavTarget::External(_) => format!("{} ↗", self.label),
            NavTarget::Internal(_) => self.label.clone(),
        };
        let style = if self.active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(text, style)
    }
}

impl Component for Link {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.to_span(), area);
    }
}
