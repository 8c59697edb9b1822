use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Portfolio content file; the bundled sample is used when unset
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            content_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub spy: SpyConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub navbar: NavbarConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
            spy: SpyConfig::default(),
            typing: TypingConfig::default(),
            progress: ProgressConfig::default(),
            navbar: NavbarConfig::default(),
        }
    }
}

/// Easing curve used by smooth scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    #[serde(rename = "ease-out", alias = "easeout")]
    EaseOut,
}

/// Smooth scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scroll position changes
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one scroll animation
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Lines per j/k press when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Active-section tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpyConfig {
    /// Ordered section ids; order decides scan precedence
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
    /// Distance added to the scroll offset before probing, covers the fixed navbar
    #[serde(default = "default_lookahead")]
    pub lookahead_offset: u32,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            lookahead_offset: default_lookahead(),
        }
    }
}

/// Typing effect timing for the hero headline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingConfig {
    #[serde(default = "default_typing_interval")]
    pub typing_interval_ms: u64,
    #[serde(default = "default_deleting_interval")]
    pub deleting_interval_ms: u64,
    /// Pause once a phrase is fully typed
    #[serde(default = "default_pause_duration")]
    pub pause_duration_ms: u64,
    #[serde(default = "default_caret_blink")]
    pub caret_blink_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            typing_interval_ms: default_typing_interval(),
            deleting_interval_ms: default_deleting_interval(),
            pause_duration_ms: default_pause_duration(),
            caret_blink_ms: default_caret_blink(),
        }
    }
}

/// Spring smoothing for the scroll progress bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    /// Defaults to critical damping (2 * sqrt(stiffness))
    #[serde(default)]
    pub damping: Option<f64>,
    /// Snap to the target once closer than this
    #[serde(default = "default_rest_delta")]
    pub rest_delta: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            damping: None,
            rest_delta: default_rest_delta(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarConfig {
    /// Scroll offset after which the navbar switches to its solid style
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold: u32,
    /// Below this terminal width the entries collapse into a menu
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: default_scrolled_threshold(),
            compact_width: default_compact_width(),
        }
    }
}

/// Theme selection: `theme = "nord"` or a table with `name` and `colors`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ThemeSetting")]
pub struct ThemeConfig {
    /// Theme name (e.g., "midnight", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeSetting {
    Name(String),
    Table {
        #[serde(default = "default_theme_name")]
        name: String,
        #[serde(default)]
        colors: ThemeColorOverrides,
    },
}

impl From<ThemeSetting> for ThemeConfig {
    fn from(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Name(name) => Self {
                name,
                colors: ThemeColorOverrides::default(),
            },
            ThemeSetting::Table { name, colors } => Self { name, colors },
        }
    }
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

/// Optional color overrides, each a hex string (e.g., "#00d9ff" or "00d9ff")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg0: Option<String>,
    /// Card background
    pub bg1: Option<String>,
    /// Solid navbar background
    pub bg2: Option<String>,
    /// Body text
    pub fg0: Option<String>,
    /// Muted text
    pub fg1: Option<String>,
    /// Headings, active nav entry, progress bar
    pub primary: Option<String>,
    /// Second accent (purple in the default theme)
    pub secondary: Option<String>,
    /// Links
    pub link: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Line scrolling
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,

    // Page scrolling
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Section navigation
    /// Smooth-scroll to the section after the active one
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Smooth-scroll to the section before the active one
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// "View My Work" call to action
    #[serde(default = "default_key_view_work")]
    pub view_work: String,

    // Actions
    /// Open/close the navigation menu (compact layout)
    #[serde(default = "default_key_toggle_menu")]
    pub toggle_menu: String,
    /// Choose the highlighted menu entry
    #[serde(default = "default_key_select")]
    pub select: String,
    /// Open the CV with the system viewer
    #[serde(default = "default_key_open_cv")]
    pub open_cv: String,
    /// Cycle through contact links
    #[serde(default = "default_key_next_link")]
    pub next_link: String,
    /// Open the focused contact link
    #[serde(default = "default_key_open_link")]
    pub open_link: String,
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            view_work: default_key_view_work(),
            toggle_menu: default_key_toggle_menu(),
            select: default_key_select(),
            open_cv: default_key_open_cv(),
            next_link: default_key_next_link(),
            open_link: default_key_open_link(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_section() -> String { "n".to_string() }
fn default_key_prev_section() -> String { "N".to_string() }
fn default_key_view_work() -> String { "w".to_string() }
fn default_key_toggle_menu() -> String { "m".to_string() }
fn default_key_select() -> String { "<CR>".to_string() }
fn default_key_open_cv() -> String { "c".to_string() }
fn default_key_next_link() -> String { "<Tab>".to_string() }
fn default_key_open_link() -> String { "o".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

pub fn default_sections() -> Vec<String> {
    [
        "hero",
        "about",
        "skills",
        "experience",
        "projects",
        "achievements",
        "education",
        "contact",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_lookahead() -> u32 {
    4 // rows hidden behind the navbar plus a little lead
}

fn default_typing_interval() -> u64 {
    80
}

fn default_deleting_interval() -> u64 {
    30
}

fn default_pause_duration() -> u64 {
    2000
}

fn default_caret_blink() -> u64 {
    530
}

fn default_stiffness() -> f64 {
    100.0
}

fn default_rest_delta() -> f64 {
    0.001
}

fn default_scrolled_threshold() -> u32 {
    1
}

fn default_compact_width() -> u16 {
    80
}

/// Expand tilde (~) in path to user's home directory
pub fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults if absent
    pub fn load_from(config_path: &std::path::Path) -> crate::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Configured content file (with tilde expansion), if any
    pub fn content_path(&self) -> Option<PathBuf> {
        self.general.content_path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.ui.spy.sections, default_sections());
        assert_eq!(config.ui.spy.lookahead_offset, 4);
        assert_eq!(config.ui.typing.typing_interval_ms, 80);
        assert_eq!(config.ui.typing.deleting_interval_ms, 30);
        assert_eq!(config.ui.typing.pause_duration_ms, 2000);
        assert!(config.ui.progress.damping.is_none());
        assert_eq!(config.keymap.toggle_menu, "m");
    }

    #[test]
    fn test_partial_tables() {
        let config = AppConfig::from_toml(
            r#"
            [ui.spy]
            lookahead_offset = 150

            [ui.scroll]
            easing = "ease-out"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.spy.lookahead_offset, 150);
        assert_eq!(config.ui.spy.sections.len(), 8);
        assert_eq!(config.ui.scroll.easing, EasingType::EaseOut);
        assert!(config.ui.scroll.smooth_enabled);
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");

        let config = AppConfig::from_toml(
            "[ui.theme]\nname = \"midnight\"\n[ui.theme.colors]\nprimary = \"#ff0000\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "midnight");
        assert_eq!(config.ui.theme.colors.primary.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[ui\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
