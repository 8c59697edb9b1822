use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::app::App;

/// Scrolling body of the page
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let offset = app.scroll_offset();
        let layout = &app.layout;
        let theme = &app.theme;

        let focused_row = app
            .focused_link
            .and_then(|i| layout.links().get(i))
            .map(|anchor| anchor.row);

        let lines: Vec<Line> = layout
            .visible(offset, area.height)
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let row = offset + i as u32;
                if Some(row) == layout.typing_row() {
                    typed_line(app)
                } else if Some(row) == focused_row {
                    line.clone().patch_style(
                        Style::default()
                            .bg(theme.bg2)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    line.clone()
                }
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme.bg0).fg(theme.fg1)),
            area,
        );

        // Scrollbar when content exceeds viewport
        let max = layout.max_scroll();
        if max > 0 {
            let mut state = ScrollbarState::new(max as usize).position(offset as usize);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None)
                    .thumb_style(Style::default().fg(theme.grey0)),
                area,
                &mut state,
            );
        }
    }
}

/// Hero headline: the typed text followed by the blinking caret
fn typed_line(app: &App) -> Line<'static> {
    let theme = &app.theme;
    let caret = if app.caret_visible() { "▌" } else { " " };
    Line::from(vec![
        Span::styled(
            app.typed_text(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(caret, Style::default().fg(theme.primary)),
    ])
    .alignment(Alignment::Center)
}
