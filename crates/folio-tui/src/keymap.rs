use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Key code plus modifiers, normalized so config and events compare equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Normalize a terminal key event.
    ///
    /// Terminals disagree on whether `G` or `?` carry SHIFT; uppercase letters
    /// always do here, every other character never does.
    pub fn from_event(key: &KeyEvent) -> Self {
        let mut modifiers = key.modifiers;
        match key.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => modifiers.insert(KeyModifiers::SHIFT),
            KeyCode::Char(_) => modifiers.remove(KeyModifiers::SHIFT),
            KeyCode::BackTab => modifiers.insert(KeyModifiers::SHIFT),
            _ => {}
        }
        Self::new(key.code, modifiers)
    }
}

/// Parsed config entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyNotation {
    Single(KeyBinding),
    /// Same plain character twice ("gg")
    Double(char),
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// First key of a doubled sequence -> action on the second press
    doubles: HashMap<char, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Build from configuration. Conflicts keep the first binding.
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut keymap = Self {
            bindings: HashMap::new(),
            doubles: HashMap::new(),
        };

        let configured = [
            (&config.quit, Action::Quit),
            (&config.scroll_down, Action::ScrollDown),
            (&config.scroll_up, Action::ScrollUp),
            (&config.scroll_half_down, Action::ScrollHalfPageDown),
            (&config.scroll_half_up, Action::ScrollHalfPageUp),
            (&config.scroll_page_down, Action::ScrollPageDown),
            (&config.scroll_page_up, Action::ScrollPageUp),
            (&config.jump_to_top, Action::JumpToTop),
            (&config.jump_to_bottom, Action::JumpToBottom),
            (&config.next_section, Action::NextSection),
            (&config.prev_section, Action::PrevSection),
            (&config.view_work, Action::ViewWork),
            (&config.toggle_menu, Action::ToggleMenu),
            (&config.select, Action::Select),
            (&config.open_cv, Action::OpenCv),
            (&config.next_link, Action::NextLink),
            (&config.open_link, Action::OpenLink),
            (&config.help, Action::Help),
        ];
        for (notation, action) in configured {
            keymap.bind(notation, action);
        }

        // Fixed alternatives; configured keys take precedence
        for (binding, action) in [
            (KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit),
            (KeyBinding::simple(KeyCode::Esc), Action::ExitMode),
            (KeyBinding::simple(KeyCode::Down), Action::ScrollDown),
            (KeyBinding::simple(KeyCode::Up), Action::ScrollUp),
            (KeyBinding::simple(KeyCode::PageDown), Action::ScrollPageDown),
            (KeyBinding::simple(KeyCode::PageUp), Action::ScrollPageUp),
            (KeyBinding::simple(KeyCode::Home), Action::JumpToTop),
            (KeyBinding::simple(KeyCode::End), Action::JumpToBottom),
            (KeyBinding::shift(KeyCode::BackTab), Action::PrevLink),
        ] {
            keymap.bindings.entry(binding).or_insert(action);
        }

        keymap
    }

    fn bind(&mut self, notation: &str, action: Action) {
        match parse_notation(notation) {
            Some(KeyNotation::Double(c)) => {
                self.doubles.entry(c).or_insert(action);
            }
            Some(KeyNotation::Single(binding)) => {
                if let Some(existing) = self.bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring {:?}",
                        notation, existing, action
                    );
                } else {
                    self.bindings.insert(binding, action);
                }
            }
            None => warn!("Invalid key binding '{}' for {:?}, left unbound", notation, action),
        }
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Whether "gg" is configured
    pub fn has_pending_g(&self) -> bool {
        self.doubles.contains_key(&'g')
    }

    /// Action fired by the second `g`
    pub fn get_pending_g_action(&self) -> Option<&Action> {
        self.doubles.get(&'g')
    }

    /// A plain `g` starts a sequence when "gg" is configured
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        *binding == KeyBinding::simple(KeyCode::Char('g')) && self.has_pending_g()
    }
}

/// Parse Vim-style key notation.
///
/// `j`, `G` (shift), `?`, `<C-d>`, `<S-Tab>`, `<CR>`, `<Esc>`, `<Space>`,
/// `<PageDown>`, `<F5>` and doubled characters such as `gg`.
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    match parse_notation(s)? {
        KeyNotation::Single(binding) => Some(binding),
        KeyNotation::Double(c) => Some(KeyBinding::simple(KeyCode::Char(c))),
    }
}

fn parse_notation(s: &str) -> Option<KeyNotation> {
    let s = s.trim();

    if let Some(inner) = s.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
        let (modifiers, name) = match inner.split_once('-') {
            Some(("C" | "c", rest)) if !rest.is_empty() => (KeyModifiers::CONTROL, rest),
            Some(("S" | "s", rest)) if !rest.is_empty() => (KeyModifiers::SHIFT, rest),
            Some(("A" | "a" | "M" | "m", rest)) if !rest.is_empty() => (KeyModifiers::ALT, rest),
            _ => (KeyModifiers::NONE, inner),
        };
        return Some(KeyNotation::Single(KeyBinding::new(key_name(name)?, modifiers)));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, _) if c.is_ascii_uppercase() => {
            Some(KeyNotation::Single(KeyBinding::shift(KeyCode::Char(c))))
        }
        (Some(c), None, _) => Some(KeyNotation::Single(KeyBinding::simple(KeyCode::Char(c)))),
        (Some(a), Some(b), None) if a == b && a.is_ascii_lowercase() => Some(KeyNotation::Double(a)),
        _ => None,
    }
}

/// Key name inside `<...>`, case-insensitive
fn key_name(name: &str) -> Option<KeyCode> {
    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "cr" | "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" | "spc" => KeyCode::Char(' '),
        "bs" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_shifted() {
        assert_eq!(parse_key_binding("j"), Some(KeyBinding::simple(KeyCode::Char('j'))));
        assert_eq!(parse_key_binding("?"), Some(KeyBinding::simple(KeyCode::Char('?'))));
        assert_eq!(parse_key_binding("N"), Some(KeyBinding::shift(KeyCode::Char('N'))));
    }

    #[test]
    fn test_parse_bracketed() {
        assert_eq!(parse_key_binding("<C-d>"), Some(KeyBinding::ctrl(KeyCode::Char('d'))));
        assert_eq!(parse_key_binding("<C-D>"), Some(KeyBinding::ctrl(KeyCode::Char('d'))));
        assert_eq!(parse_key_binding("<CR>"), Some(KeyBinding::simple(KeyCode::Enter)));
        assert_eq!(parse_key_binding("<space>"), Some(KeyBinding::simple(KeyCode::Char(' '))));
        assert_eq!(parse_key_binding("<S-Tab>"), Some(KeyBinding::shift(KeyCode::Tab)));
        assert_eq!(parse_key_binding("<F5>"), Some(KeyBinding::simple(KeyCode::F(5))));
        assert_eq!(parse_key_binding("<PageDown>"), Some(KeyBinding::simple(KeyCode::PageDown)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_key_binding(""), None);
        assert_eq!(parse_key_binding("abc"), None);
        assert_eq!(parse_key_binding("<F13>"), None);
        assert_eq!(parse_key_binding("<Nope>"), None);
        assert_eq!(parse_notation("gg"), Some(KeyNotation::Double('g')));
        assert_eq!(parse_notation("ab"), None);
    }

    #[test]
    fn test_keymap_from_config() {
        let keymap = Keymap::default();

        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('q'))), Some(&Action::Quit));
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('j'))),
            Some(&Action::ScrollDown)
        );
        assert_eq!(
            keymap.get(&KeyBinding::shift(KeyCode::Char('N'))),
            Some(&Action::PrevSection)
        );
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Tab)), Some(&Action::NextLink));
        assert_eq!(
            keymap.get(&KeyBinding::ctrl(KeyCode::Char('d'))),
            Some(&Action::ScrollHalfPageDown)
        );
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::End)), Some(&Action::JumpToBottom));

        assert!(keymap.has_pending_g());
        assert_eq!(keymap.get_pending_g_action(), Some(&Action::JumpToTop));
        assert!(keymap.is_g_prefix(&KeyBinding::simple(KeyCode::Char('g'))));
    }

    #[test]
    fn test_event_normalization() {
        let shifted_g = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE);
        assert_eq!(
            KeyBinding::from_event(&shifted_g),
            KeyBinding::shift(KeyCode::Char('G'))
        );
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            KeyBinding::from_event(&question),
            KeyBinding::simple(KeyCode::Char('?'))
        );
        let keymap = Keymap::default();
        assert_eq!(keymap.get(&KeyBinding::from_event(&question)), Some(&Action::Help));
    }

    #[test]
    fn test_configured_key_beats_fallback() {
        let config = KeymapConfig {
            help: "<C-c>".to_string(),
            open_link: "<Esc>".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(keymap.get(&KeyBinding::ctrl(KeyCode::Char('c'))), Some(&Action::Help));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Esc)), Some(&Action::OpenLink));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('q'))), Some(&Action::Quit));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Down)), Some(&Action::ScrollDown));
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            view_work: "j".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('j'))),
            Some(&Action::ScrollDown)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('w'))),
            None
        );
    }
}
