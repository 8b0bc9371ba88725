//! # NavBar Component
//!
//! A fixed, statically-declared list of {label, path} entries, centered on
//! one line. The entry whose path matches the caller-supplied current route
//! path renders highlighted. No dynamic route discovery.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};

use crate::core::route::NavTarget;
use crate::tui::component::Component;
use crate::tui::components::link::Link;

/// The pages the nav bar offers. Order is display order.
pub const NAV_ENTRIES: &[(&str, &str)] = &[("Home", "/"), ("Search", "/search"), ("About", "/about")];

pub struct NavBar {
    /// Bare path of the current route (e.g. `/search`), used for
    /// active-entry highlighting.
    pub current_path: String,
}

impl NavBar {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
        }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::with_capacity(NAV_ENTRIES.len() * 2);
        for (i, (label, path)) in NAV_ENTRIES.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("    "));
            }
            let mut link = Link::new(*label, NavTarget::Internal((*path).to_string()));
            link.active = *path == self.current_path;
            spans.push(link.to_span());
        }

        let line = Line::from(spans).alignment(Alignment::Center);
        frame.render_widget(line, area);
    }
}
