//! Text input helpers shared by the key and paste handlers

use super::app::{App, CurrentScreen, FocusField};

/// Type a character into the long URL field
pub fn handle_text_input(app: &mut App, c: char) {
    if app.form.is_editing() {
        app.form.push_char(c);
    }
}

/// Delete the last character of the long URL field
pub fn handle_backspace(app: &mut App) {
    if app.form.is_editing() {
        app.form.pop_char();
    }
}

/// Cycle focus with Tab / Shift+Tab
pub fn handle_tab_navigation(app: &mut App, backwards: bool) {
    if backwards {
        app.form.focus_prev();
    } else {
        app.form.focus_next();
    }
}

/// Bracketed paste lands in the long URL field regardless of focus
pub fn handle_paste(app: &mut App, text: &str) {
    if app.notification.is_some() || app.current_screen != CurrentScreen::Main {
        return;
    }
    app.form.focus = FocusField::LongUrl;
    app.form.push_str(text);
}
