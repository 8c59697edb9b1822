use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Navigation overlay for the compact navbar, anchored below it
    pub fn render_menu(frame: &mut Frame, body: Rect, app: &App) {
        let theme = &app.theme;
        let entries = app.nav_entries();
        let active = app.active_section();

        let popup_width = 28u16.min(body.width);
        let popup_height = (entries.len() as u16 + 2).min(body.height);
        let popup_area = Rect::new(
            body.x + body.width.saturating_sub(popup_width),
            body.y,
            popup_width,
            popup_height,
        );

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Menu ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.bg1));

        let lines: Vec<Line> = entries
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let mut style = Style::default().fg(theme.fg1);
                if *id == active {
                    style = style.fg(theme.primary).add_modifier(Modifier::BOLD);
                }
                if i == app.menu_cursor {
                    style = style.bg(theme.bg2).add_modifier(Modifier::REVERSED);
                }
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), Style::default().fg(theme.grey0)),
                    Span::styled(format!("{:<20}", id.label()), style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }

    /// Key reference
    pub fn render_help(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let keys = &app.config.keymap;
        let rows = [
            (format!("{} / {}", keys.scroll_down, keys.scroll_up), "Scroll line"),
            (
                format!("{} / {}", keys.scroll_half_down, keys.scroll_half_up),
                "Scroll half page",
            ),
            (
                format!("{} / {}", keys.scroll_page_down, keys.scroll_page_up),
                "Scroll page",
            ),
            (format!("{} / {}", keys.jump_to_top, keys.jump_to_bottom), "Top / bottom"),
            (format!("{} / {}", keys.next_section, keys.prev_section), "Next / previous section"),
            ("1-9".to_string(), "Jump to section"),
            (keys.view_work.clone(), "View my work"),
            (keys.toggle_menu.clone(), "Menu"),
            (keys.open_cv.clone(), "Download CV"),
            (format!("{} / {}", keys.next_link, keys.open_link), "Select / open link"),
            (keys.quit.clone(), "Quit"),
        ];

        let area = frame.area();
        let popup_width = 48u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.secondary))
            .style(Style::default().bg(theme.bg1));

        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(key, what)| key_line(key, what, theme))
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.grey0),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

fn key_line<'a>(key: &str, what: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!(" {:<18}", key),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(what, Style::default().fg(theme.fg1)),
    ])
}

/// Helper function to create a centered rect
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
