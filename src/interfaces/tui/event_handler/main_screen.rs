use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen, FocusField};
use crate::interfaces::tui::input_handler::{
    handle_backspace, handle_tab_navigation, handle_text_input,
};

pub fn handle_main_screen(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => match app.form.focus {
            FocusField::LongUrl | FocusField::Generate => app.start_shorten(),
            FocusField::Copy => app.copy_short_url(),
        },
        KeyCode::Char('y') if ctrl => app.copy_short_url(),
        KeyCode::F(2) => app.copy_short_url(),
        KeyCode::F(1) => app.current_screen = CurrentScreen::Help,
        KeyCode::Tab => handle_tab_navigation(app, false),
        KeyCode::BackTab => handle_tab_navigation(app, true),
        KeyCode::Esc => {
            app.form.clear_input();
            app.form.focus = FocusField::LongUrl;
        }
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Char(c) if !ctrl => handle_text_input(app, c),
        _ => {}
    }
    false
}
