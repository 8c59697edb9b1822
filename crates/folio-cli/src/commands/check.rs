use anyhow::Result;

use folio_core::{AppConfig, Portfolio};
use folio_tui::themes::available_themes;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("Config: {}", AppConfig::config_path().display());

    let content_path = config.content_path();
    match &content_path {
        Some(path) => println!("Content: {}", path.display()),
        None => println!("Content: bundled sample"),
    }

    let portfolio = Portfolio::load(content_path.as_deref())?;
    portfolio.validate()?;

    let profile = &portfolio.profile;
    println!("\nName: {} ({})", profile.name, profile.logo());
    println!("Typing phrases: {}", profile.roles.len());
    if profile.roles.is_empty() {
        println!("  (none: the static headline is shown instead)");
    }
    println!("Experience entries: {}", portfolio.experience.len());
    println!("Projects: {}", portfolio.projects.len());
    println!("Achievements: {}", portfolio.achievements.len());
    println!("Education entries: {}", portfolio.education.len());
    println!("Contact links: {}", portfolio.contact.links.len());
    println!(
        "CV: {}",
        profile.cv.as_deref().unwrap_or("(not configured)")
    );

    let theme = config.ui.theme.name.to_lowercase();
    if available_themes().contains(&theme.as_str()) || theme == "onedark" {
        println!("\nTheme: {}", theme);
    } else {
        println!(
            "\nTheme: {} (unknown, midnight is used; available: {})",
            theme,
            available_themes().join(", ")
        );
    }

    println!(
        "Section order: {}",
        config.ui.spy.sections.join(" → ")
    );
    println!("OK");
    Ok(())
}
