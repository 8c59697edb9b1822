use anyhow::Result;
use serde_json::json;

use folio_core::{AppConfig, Portfolio};
use folio_tui::{app::App, load_theme};

/// Lay the page out off-screen and report each section's rows
pub fn run(config: &AppConfig, width: u16, height: u16, as_json: bool) -> Result<()> {
    let portfolio = Portfolio::load(config.content_path().as_deref())?;
    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(std::sync::Arc::new(config.clone()), portfolio, theme)?;
    app.resize(width, height);

    let layout = &app.layout;
    if as_json {
        let output = json!({
            "width": width,
            "viewport_height": layout.viewport_height(),
            "total_height": layout.total_height(),
            "max_scroll": layout.max_scroll(),
            "lookahead_offset": app.spy.lookahead_offset(),
            "sections": layout.sections(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "Page at {}x{}: {} rows, max scroll {}\n",
        width,
        height,
        layout.total_height(),
        layout.max_scroll()
    );
    println!("  {:<14} {:>6} {:>6} {:>6}", "SECTION", "TOP", "HEIGHT", "BOTTOM");
    for bounds in layout.sections() {
        println!(
            "  {:<14} {:>6} {:>6} {:>6}",
            bounds.id.as_str(),
            bounds.top_offset,
            bounds.height,
            bounds.bottom()
        );
    }

    let missing: Vec<&str> = app
        .spy
        .order()
        .iter()
        .filter(|id| !layout.contains(id))
        .map(|id| id.as_str())
        .collect();
    if !missing.is_empty() {
        println!("\nNot rendered (no content): {}", missing.join(", "));
    }

    Ok(())
}
