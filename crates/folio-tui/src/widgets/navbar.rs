use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const CV_HINT: &str = " CV [c] ";

pub struct NavbarWidget;

impl NavbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let bar_style = if app.is_scrolled() {
            Style::default().bg(theme.bg1)
        } else {
            Style::default().bg(theme.bg0)
        };

        let (mut left, right) = if app.is_compact() {
            let marker = if app.menu_open { "✕" } else { "☰" };
            let hint = format!(" {} {} [m] ", marker, app.active_section().label());
            (vec![logo_span(app)], hint)
        } else {
            (full_spans(app), cv_hint(app).to_string())
        };

        let used: usize = left.iter().map(|s| s.content.width()).sum();
        let pad = (area.width as usize).saturating_sub(used + right.width());
        left.push(Span::raw(" ".repeat(pad)));
        left.push(Span::styled(right, Style::default().fg(theme.secondary)));

        frame.render_widget(Paragraph::new(Line::from(left)).style(bar_style), area);
    }

    /// Columns the expanded row needs: logo, every entry and the CV hint
    pub fn full_width(app: &App) -> usize {
        let spans: usize = full_spans(app).iter().map(|s| s.content.width()).sum();
        spans + cv_hint(app).width()
    }
}

fn logo_span(app: &App) -> Span<'static> {
    Span::styled(
        format!(" {} ", app.logo()),
        Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
    )
}

/// Logo followed by numbered entries, the active one underlined
fn full_spans(app: &App) -> Vec<Span<'static>> {
    let theme = &app.theme;
    let active = app.active_section();
    let mut spans = vec![logo_span(app)];
    for (i, id) in app.nav_entries().iter().enumerate() {
        let style = if *id == active {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.fg1)
        };
        spans.push(Span::styled(format!(" {}", i + 1), Style::default().fg(theme.grey0)));
        spans.push(Span::styled(format!(" {} ", id.label()), style));
    }
    spans
}

fn cv_hint(app: &App) -> &'static str {
    if app.portfolio.profile.cv.is_some() {
        CV_HINT
    } else {
        ""
    }
}
