use anyhow::{anyhow, Result};

use folio_core::{AppConfig, Portfolio};

pub fn run(config: &AppConfig) -> Result<()> {
    let content_path = config.content_path();
    let portfolio = Portfolio::load(content_path.as_deref())?;
    let base_dir = content_path.as_deref().and_then(|p| p.parent());

    let target = portfolio
        .profile
        .cv_target(base_dir)
        .ok_or_else(|| anyhow!("No CV configured. Set `profile.cv` in the content file."))?;

    println!("Opening {}", target);
    open::that(&target).map_err(|e| anyhow!("Failed to open {}: {}", target, e))?;
    Ok(())
}
