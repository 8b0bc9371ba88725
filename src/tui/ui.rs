//! Top-level frame layout: title line, nav bar, the current page, and a key
//! hint footer. Page bodies delegate to the components.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{BookDetails, BookGrid, HeaderSection, NavBar};
use crate::tui::{Focus, TuiState};

const ABOUT_COPY: &str = "BookHive is a terminal browser for a book catalog. It talks to a \
BookHive API server, which owns the data; this client only browses it. Configuration lives \
in ~/.bookhive/config.toml and diagnostics go to bookhive.log in the working directory.";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, nav_area, _gap, main_area, footer_area] = layout.areas(frame.area());

    // Title line: app name plus the transient status message.
    let title = if app.status_message.is_empty() {
        Line::from(Span::styled(
            "BookHive",
            Style::default().add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled("BookHive", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" | {}", app.status_message),
                Style::default().fg(Color::Gray),
            ),
        ])
    };
    frame.render_widget(title, title_area);

    NavBar::new(app.route.path()).render(frame, nav_area);

    match &app.route {
        Route::Home => draw_home(frame, main_area, app, tui),
        Route::Search { .. } => draw_search(frame, main_area, app, tui),
        Route::Detail { .. } => {
            BookDetails { book: &app.detail }.render(frame, main_area, &mut tui.detail_scroll);
        }
        Route::About => draw_about(frame, main_area),
    }

    let hints = match tui.focus {
        Focus::Input => "Enter search · Tab grid · Esc back",
        Focus::Browse => "arrows select · Enter open · / search · Esc back · q quit",
    };
    frame.render_widget(
        Line::styled(hints, Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let header_height = HeaderSection::required_height(area.width);
    let [header_area, _gap, grid_area] =
        Layout::vertical([Length(header_height), Length(1), Min(0)]).areas(area);

    HeaderSection.render(frame, header_area);
    BookGrid {
        title: "Popular Books",
        books: &app.popular,
    }
    .render(frame, grid_area, &mut tui.grid);
}

fn draw_search(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [input_area, _gap, grid_area] =
        Layout::vertical([Length(3), Length(1), Min(0)]).areas(area);

    tui.search_bar.focused = tui.focus == Focus::Input;
    tui.search_bar.render(frame, input_area);

    let title = match app.current_query() {
        Some(query) if !query.is_empty() => format!("Search Results for \"{query}\""),
        _ => "Search Results".to_string(),
    };
    BookGrid {
        title: &title,
        books: &app.results,
    }
    .render(frame, grid_area, &mut tui.grid);
}

fn draw_about(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(ABOUT_COPY)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::FetchState;
    use crate::test_support::{sample_book, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_home_page_draws_header_and_grid() {
        let mut app = test_app();
        app.popular = FetchState::Succeeded(vec![sample_book("1")]);
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("BookHive"));
        assert!(text.contains("Popular Books"));
        assert!(text.contains("Book 1 (1999)"));
    }

    #[test]
    fn test_search_page_draws_input_and_results() {
        let mut app = test_app();
        app.route = Route::Search {
            query: "orwell".to_string(),
        };
        app.results = FetchState::Succeeded(Vec::new());
        let mut tui = TuiState::new();
        tui.search_bar.set_text("orwell");
        let text = draw(&app, &mut tui);
        assert!(text.contains("Search Results for \"orwell\""));
        assert!(text.contains("No results found"));
    }

    #[test]
    fn test_search_title_omits_empty_query() {
        let mut app = test_app();
        app.route = Route::Search {
            query: String::new(),
        };
        app.results = FetchState::Succeeded(Vec::new());
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Search Results"));
        assert!(!text.contains("Search Results for"));
    }

    #[test]
    fn test_detail_page_draws_book() {
        let mut app = test_app();
        app.route = Route::Detail {
            id: "67a1".to_string(),
        };
        let mut book = sample_book("67a1");
        book.description = Some("A fine book.".to_string());
        app.detail = FetchState::Succeeded(book);
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Book 67a1"));
        assert!(text.contains("Description"));
    }

    #[test]
    fn test_failed_sibling_does_not_break_the_page() {
        let mut app = test_app();
        app.popular = FetchState::Failed;
        let text = draw(&app, &mut TuiState::new());
        // Header still renders; the failure is contained to the grid branch.
        assert!(text.contains("Welcome to"));
        assert!(text.contains("Couldn't load books"));
    }

    #[test]
    fn test_about_page() {
        let mut app = test_app();
        app.route = Route::About;
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("terminal browser for a book catalog"));
    }
}
