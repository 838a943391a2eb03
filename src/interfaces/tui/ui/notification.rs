use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::{Notification, NotificationKind};
use crate::interfaces::tui::constants::{colors, messages, popup};

fn theme(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Info => colors::SUCCESS,
        NotificationKind::Warning => colors::WARNING,
        NotificationKind::Error => colors::ERROR,
    }
}

pub fn draw_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    let color = theme(notification.kind);
    let inner_area = Popup::new(&notification.title, popup::NOTIFICATION)
        .theme_color(color)
        .render(frame, area);

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            notification.message.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
    ];

    if let Some(detail) = &notification.detail {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            detail.as_str(),
            Style::default().fg(colors::MUTED),
        )));
    }

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        messages::DISMISS_HINT,
        Style::default().fg(color),
    )));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_area);
}
