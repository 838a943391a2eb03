//! Keyboard event routing
//!
//! A visible notification swallows every key until dismissed; otherwise
//! the key goes to the handler of the current screen.

mod main_screen;
mod modal_screens;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, CurrentScreen};

/// Handle one key press. Returns `true` when the application should exit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if app.notification.is_some() {
        modal_screens::handle_notification(app);
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.current_screen = CurrentScreen::Exiting;
        return false;
    }

    match app.current_screen {
        CurrentScreen::Main => main_screen::handle_main_screen(app, key),
        CurrentScreen::Help => modal_screens::handle_help_screen(app, key.code),
        CurrentScreen::Exiting => modal_screens::handle_exiting_screen(app, key.code),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::clipboard::DisabledClipboard;
    use crate::interfaces::tui::app::{FocusField, Notification};
    use crate::mediator::Mediator;
    use crate::provider::{ProviderError, ShortenProvider};

    struct NeverCalled;

    impl ShortenProvider for NeverCalled {
        fn shorten(&self, _long_url: &str) -> Result<String, ProviderError> {
            Err(ProviderError::Other("not expected in key tests".to_string()))
        }

        fn name(&self) -> &'static str {
            "never"
        }
    }

    fn app() -> App {
        App::with_mediator(Mediator::new(
            Arc::new(NeverCalled),
            Box::new(DisabledClipboard),
        ))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut app = app();
        for c in "abc".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.form.long_url, "ab");
    }

    #[test]
    fn test_typing_ignored_when_button_focused() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.form.focus, FocusField::Generate);
        handle_key_event(&mut app, press(KeyCode::Char('x')));
        assert!(app.form.long_url.is_empty());
    }

    #[test]
    fn test_back_tab_moves_focus_backwards() {
        let mut app = app();
        handle_key_event(&mut app, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.form.focus, FocusField::Copy);
    }

    #[test]
    fn test_escape_clears_input() {
        let mut app = app();
        app.form.long_url = "https://example.com".to_string();
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(app.form.long_url.is_empty());
    }

    #[test]
    fn test_notification_swallows_keys() {
        let mut app = app();
        app.notify(Notification::warning("Warning", "Please enter a URL to shorten."));

        handle_key_event(&mut app, press(KeyCode::Char('a')));
        assert!(app.form.long_url.is_empty());
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_exit_confirmation() {
        let mut app = app();
        assert!(!handle_key_event(&mut app, ctrl('c')));
        assert_eq!(app.current_screen, CurrentScreen::Exiting);

        assert!(!handle_key_event(&mut app, press(KeyCode::Char('n'))));
        assert_eq!(app.current_screen, CurrentScreen::Main);

        handle_key_event(&mut app, ctrl('q'));
        assert!(handle_key_event(&mut app, press(KeyCode::Char('y'))));
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::F(1)));
        assert_eq!(app.current_screen, CurrentScreen::Help);
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.current_screen, CurrentScreen::Main);
    }

    #[test]
    fn test_copy_shortcut_without_result() {
        let mut app = app();
        handle_key_event(&mut app, ctrl('y'));
        assert!(app.notification.is_some());
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut app, key);
        assert!(app.form.long_url.is_empty());
    }
}
