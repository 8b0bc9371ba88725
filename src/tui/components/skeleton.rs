//! # Skeleton Placeholders
//!
//! Structural loading placeholders shown while a fetch is pending. Each
//! skeleton approximates the populated layout it stands in for, so the page
//! doesn't jump when the data arrives.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::tui::component::Component;

const FILL: &str = "░";

/// A shaded rectangle standing in for content of the same size.
pub struct SkeletonBlock;

impl Widget for SkeletonBlock {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(Color::DarkGray);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_symbol(FILL).set_style(style);
            }
        }
    }
}

/// A stack of shaded lines standing in for text. Each entry is a line width;
/// rows between entries stay blank, mimicking text leading.
pub struct SkeletonLines {
    pub widths: Vec<u16>,
}

impl Component for SkeletonLines {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (i, width) in self.widths.iter().enumerate() {
            let y = area.y + (i as u16) * 2;
            if y >= area.bottom() {
                break;
            }
            let line = Rect {
                x: area.x,
                y,
                width: (*width).min(area.width),
                height: 1,
            };
            frame.render_widget(SkeletonBlock, line);
        }
    }
}
