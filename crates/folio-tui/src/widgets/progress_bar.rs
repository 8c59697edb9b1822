use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Eighth-block glyphs for sub-cell precision
const PARTIALS: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

pub struct ProgressBarWidget;

impl ProgressBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let line = bar_line(app.progress.value(), area.width, &app.theme);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Horizontal bar filled to `ratio` of `width` cells, left to right
fn bar_line(ratio: f64, width: u16, theme: &crate::theme::Theme) -> Line<'static> {
    let (full, partial) = fill_cells(ratio, width);
    let mut bar = "█".repeat(full);
    bar.push_str(PARTIALS[partial]);
    let used = full + usize::from(partial > 0);
    Line::from(vec![
        Span::styled(bar, Style::default().fg(theme.primary).bg(theme.bg0)),
        Span::styled(
            " ".repeat((width as usize).saturating_sub(used)),
            Style::default().bg(theme.bg0),
        ),
    ])
}

/// Whole cells and eighths covered by `ratio`
fn fill_cells(ratio: f64, width: u16) -> (usize, usize) {
    let eighths = (ratio.clamp(0.0, 1.0) * width as f64 * 8.0).round() as usize;
    (eighths / 8, eighths % 8)
}
