use std::path::Path;

use anyhow::Result;

use folio_core::{content::SAMPLE_CONTENT, AppConfig};

/// Write the default config and the sample content, keeping existing files
/// unless `force` is set
pub fn run(config: &AppConfig, force: bool) -> Result<()> {
    let config_path = AppConfig::config_path();
    let content_path = config
        .content_path()
        .unwrap_or_else(|| config.data_dir().join("portfolio.toml"));

    let mut new_config = config.clone();
    new_config.general.content_path = Some(content_path.clone());

    if force || !config_path.exists() {
        new_config.save()?;
        println!("Wrote config: {}", config_path.display());
    } else {
        println!("Config exists, kept: {}", config_path.display());
    }

    if write_if_absent(&content_path, SAMPLE_CONTENT, force)? {
        println!("Wrote sample content: {}", content_path.display());
    } else {
        println!("Content exists, kept: {}", content_path.display());
    }

    println!("\nEdit the content file, then run `folio`.");
    Ok(())
}

fn write_if_absent(path: &Path, content: &str, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(true)
}
