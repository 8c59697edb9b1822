use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    // Section navigation
    NextSection,
    PrevSection,
    JumpToSection(usize), // 1-9: nth navbar entry
    ViewWork,
    // Menu overlay
    ToggleMenu,
    MenuDown,
    MenuUp,
    Select,
    // Links
    OpenCv,
    NextLink,
    PrevLink,
    OpenLink,
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key exits help
        return Action::ExitMode;
    }

    if app.menu_open {
        if let Some(action) = handle_menu_mode(key) {
            return action;
        }
    }

    let binding = KeyBinding::from_event(&key);

    // Multi-key "gg" sequence
    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().copied().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpToSection(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

/// Keys with a different meaning while the navigation menu is open.
/// Anything else falls through to the normal bindings.
fn handle_menu_mode(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Some(Action::MenuDown),
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Some(Action::MenuUp),
        (KeyCode::Enter, _) => Some(Action::Select),
        (KeyCode::Esc, _) => Some(Action::ToggleMenu),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{AppConfig, Portfolio};

    fn app() -> App {
        App::new(
            std::sync::Arc::new(AppConfig::default()),
            Portfolio::sample().unwrap(),
            crate::theme::Theme::default(),
        )
        .unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_bindings() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app, &keymap), Action::ScrollDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('n')), &app, &keymap), Action::NextSection);
        assert_eq!(handle_key_event(key(KeyCode::Char('w')), &app, &keymap), Action::ViewWork);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app, &keymap),
            Action::JumpToSection(2)
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('z')), &app, &keymap), Action::None);
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        let keymap = Keymap::default();
        let g = key(KeyCode::Char('g'));
        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_menu_keys_override_scrolling() {
        let mut app = app();
        let keymap = Keymap::default();
        app.menu_open = true;
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app, &keymap), Action::MenuDown);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app, &keymap), Action::Select);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app, &keymap), Action::ToggleMenu);
        // unrelated keys still work
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app, &keymap), Action::Quit);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app, &keymap), Action::ExitMode);
    }
}
