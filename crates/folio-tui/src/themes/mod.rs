//! Built-in palettes and `[ui.theme]` color overrides

mod dracula;
mod monokai;
mod nord;
mod one_dark;

use folio_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// `#RRGGBB` or `#RGB`, with or without the hash
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    let [r, g, b] = match digits.len() {
        3 => [(value >> 8) & 0xf, (value >> 4) & 0xf, value & 0xf].map(|n| n * 0x11),
        6 => [(value >> 16) & 0xff, (value >> 8) & 0xff, value & 0xff],
        _ => return None,
    };
    Some(Color::Rgb(r as u8, g as u8, b as u8))
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "midnight" => Theme::default(),
        "dracula" => dracula::default(),
        "nord" => nord::default(),
        "one-dark" | "onedark" => one_dark::default(),
        "monokai" => monokai::default(),
        other => {
            warn!("Unknown theme '{}', falling back to midnight", other);
            Theme::default()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 8] = [
        (&overrides.bg0, &mut theme.bg0),
        (&overrides.bg1, &mut theme.bg1),
        (&overrides.bg2, &mut theme.bg2),
        (&overrides.fg0, &mut theme.fg0),
        (&overrides.fg1, &mut theme.fg1),
        (&overrides.primary, &mut theme.primary),
        (&overrides.secondary, &mut theme.secondary),
        (&overrides.link, &mut theme.link),
    ];

    for (hex, slot) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Ignoring invalid color override '{}'", hex),
            }
        }
    }

    theme
}

/// Names accepted by `[ui] theme`
pub fn available_themes() -> Vec<&'static str> {
    vec!["midnight", "dracula", "nord", "one-dark", "monokai"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
    }

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert!(matches!(theme.primary, Color::Rgb(0x00, 0xd9, 0xff)));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "does-not-exist".to_string(),
            colors: ThemeColorOverrides::default(),
        };
        assert!(matches!(load_theme(&config).bg0, Color::Rgb(0x0a, 0x0e, 0x27)));
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                primary: Some("#ff0000".to_string()),
                bg1: Some("nope".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.primary, Color::Rgb(255, 0, 0)));
        assert!(matches!(theme.bg1, Color::Rgb(0x3b, 0x42, 0x52)));
    }

    #[test]
    fn test_every_listed_theme_resolves() {
        let fallback = Theme::default().bg0;
        for name in available_themes().into_iter().filter(|n| *n != "midnight") {
            let config = ThemeConfig {
                name: name.to_string(),
                colors: ThemeColorOverrides::default(),
            };
            assert_ne!(load_theme(&config).bg0, fallback, "{} fell back", name);
        }
    }
}
