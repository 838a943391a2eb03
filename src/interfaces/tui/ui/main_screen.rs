use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{Button, InputField};
use crate::interfaces::tui::app::{App, CurrentScreen, FocusField};
use crate::interfaces::tui::constants::{colors, labels};

pub fn draw_main_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Long URL
            Constraint::Length(3), // Generate
            Constraint::Length(3), // Short URL
            Constraint::Length(3), // Copy
            Constraint::Min(1),    // Request state
        ])
        .split(area);

    let focus = app.form.focus;

    let cursor = InputField::new(labels::LONG_URL, &app.form.long_url)
        .active(focus == FocusField::LongUrl)
        .required()
        .placeholder(labels::LONG_URL_PLACEHOLDER)
        .render(frame, chunks[0]);

    Button::new(app.trigger_label())
        .enabled(app.trigger_enabled)
        .focused(focus == FocusField::Generate)
        .color(colors::PRIMARY)
        .render(frame, chunks[1]);

    InputField::new(labels::SHORT_URL, &app.form.short_url)
        .readonly()
        .placeholder(labels::SHORT_URL_PLACEHOLDER)
        .render(frame, chunks[2]);

    Button::new(labels::COPY)
        .focused(focus == FocusField::Copy)
        .color(colors::SUCCESS)
        .render(frame, chunks[3]);

    draw_request_line(frame, app, chunks[4]);

    if app.current_screen == CurrentScreen::Main
        && app.notification.is_none()
        && let Some(position) = cursor
    {
        frame.set_cursor_position(position);
    }
}

fn draw_request_line(frame: &mut Frame, app: &App, area: Rect) {
    let request = app.mediator.request();
    let Some(id) = request.id() else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(
            format!("Request {} ", id),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled(
            request.status().label(),
            Style::default().fg(colors::WARNING),
        ),
        Span::styled(
            format!(" via {}", app.mediator.provider_name()),
            Style::default().fg(colors::MUTED),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
