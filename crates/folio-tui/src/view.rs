//! Screen composition: progress bar, navbar, page body, status bar, overlays.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Mode, FOOTER_HEIGHT};
use crate::widgets::{NavbarWidget, PageWidget, PopupWidget, ProgressBarWidget, StatusBarWidget};

/// Draw one frame
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress bar
            Constraint::Length(1), // Navbar
            Constraint::Min(1),    // Page
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    ProgressBarWidget::render(frame, chunks[0], app);
    NavbarWidget::render(frame, chunks[1], app);
    PageWidget::render(frame, chunks[2], app);
    StatusBarWidget::render(frame, chunks[3], app);

    if app.menu_open {
        PopupWidget::render_menu(frame, chunks[2], app);
    }
    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, app);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use folio_core::config::ScrollConfig;
    use folio_core::{AppConfig, Portfolio};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::theme::Theme;

    fn app(width: u16, height: u16) -> App {
        let mut config = AppConfig::default();
        config.ui.scroll = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut app = App::new(
            Arc::new(config),
            Portfolio::sample().unwrap(),
            Theme::default(),
        )
        .unwrap();
        app.resize(width, height);
        app
    }

    fn render(app: &App) -> Buffer {
        let area = app.layout.width();
        let mut terminal =
            Terminal::new(TestBackend::new(area, app.viewport_height() + 3)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_navbar_lists_sections() {
        let app = app(120, 30);
        let buffer = render(&app);
        let navbar = row_text(&buffer, 1);
        assert!(navbar.starts_with(&format!(" {} ", app.logo())));
        assert!(navbar.contains("About"));
        assert!(navbar.contains("Contact"));
        assert!(!navbar.contains("Hero"));
    }

    #[test]
    fn test_compact_navbar_shows_menu_hint() {
        let mut app = app(60, 30);
        let navbar = row_text(&render(&app), 1);
        assert!(navbar.contains("[m]"));
        assert!(!navbar.contains("Skills"));

        app.toggle_menu();
        let buffer = render(&app);
        let body: String = (2..12).map(|y| row_text(&buffer, y)).collect();
        assert!(body.contains("Menu"));
        assert!(body.contains("Skills"));
    }

    #[test]
    fn test_navbar_never_truncates_entries() {
        for width in [80, 84, 88, 96, 120] {
            let app = app(width, 30);
            let navbar = row_text(&render(&app), 1);
            if navbar.contains("[m]") {
                assert!(app.is_compact(), "width {}", width);
                continue;
            }
            for id in app.nav_entries() {
                assert!(navbar.contains(&id.label()), "width {} lost {}", width, id);
            }
            assert!(navbar.contains("CV [c]"), "width {} lost the CV hint", width);
        }
        assert!(app(80, 30).is_compact());
        assert!(!app(120, 30).is_compact());
    }

    #[test]
    fn test_progress_bar_fills_at_bottom() {
        let mut app = app(80, 24);
        app.jump_to_bottom();
        app.on_frame();
        app.progress.snap();
        let bar = row_text(&render(&app), 0);
        assert_eq!(bar, "█".repeat(80));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app(100, 30);
        app.mode = Mode::Help;
        let buffer = render(&app);
        let screen: String = (0..buffer.area.height).map(|y| row_text(&buffer, y)).collect();
        assert!(screen.contains("Help"));
        assert!(screen.contains("View my work"));
    }
}
