// UI submodules
mod common;
mod exiting;
mod help;
mod main_screen;
mod notification;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use main_screen::draw_main_screen;
pub use notification::draw_notification;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);
    draw_main_screen(frame, app, main_chunks[1]);
    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);

    // Overlays
    let area = frame.area();
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::Help => draw_help_screen(frame, area),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, area),
    }

    if let Some(notification) = &app.notification {
        draw_notification(frame, notification, area);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::clipboard::DisabledClipboard;
    use crate::interfaces::tui::app::Notification;
    use crate::interfaces::tui::constants::labels;
    use crate::mediator::Mediator;
    use crate::provider::{ProviderError, ShortenProvider};

    struct SlowProvider;

    impl ShortenProvider for SlowProvider {
        fn shorten(&self, _long_url: &str) -> Result<String, ProviderError> {
            std::thread::sleep(std::time::Duration::from_millis(200));
            Ok("https://tinyurl.com/slow".to_string())
        }

        fn name(&self) -> &'static str {
            "slow"
        }
    }

    fn app() -> App {
        App::with_mediator(Mediator::new(
            Arc::new(SlowProvider),
            Box::new(DisabledClipboard),
        ))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_idle_screen_shows_controls() {
        let screen = render(&app());
        assert!(screen.contains(labels::LONG_URL));
        assert!(screen.contains(labels::GENERATE));
        assert!(screen.contains(labels::SHORT_URL));
        assert!(screen.contains(labels::COPY));
        assert!(screen.contains("Ready"));
    }

    #[tokio::test]
    async fn test_in_flight_label() {
        let mut app = app();
        app.form.long_url = "https://example.com".to_string();
        app.start_shorten();

        let screen = render(&app);
        assert!(screen.contains(labels::GENERATING));
        assert!(!screen.contains(labels::GENERATE));
    }

    #[test]
    fn test_notification_overlay() {
        let mut app = app();
        app.notify(Notification::warning("Warning", "Please enter a URL to shorten."));
        let screen = render(&app);
        assert!(screen.contains("Please enter a URL to shorten."));
    }

    #[test]
    fn test_short_url_is_rendered() {
        let mut app = app();
        app.form.short_url = "https://tinyurl.com/xyz123".to_string();
        let screen = render(&app);
        assert!(screen.contains("https://tinyurl.com/xyz123"));
    }
}
