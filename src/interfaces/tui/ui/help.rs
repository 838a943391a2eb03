use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

const SHORTCUTS: [(&str, &str); 8] = [
    ("Enter", "Generate, or copy when the copy button is focused"),
    ("Tab / Shift+Tab", "Move focus"),
    ("Ctrl+Y, F2", "Copy short URL"),
    ("Esc", "Clear the long URL"),
    ("Backspace", "Delete last character"),
    ("Paste", "Insert into the long URL field"),
    ("F1", "Toggle this help"),
    ("Ctrl+C, Ctrl+Q", "Quit"),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let mut help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "SHORTCUTS",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for (key, desc) in SHORTCUTS {
        help_text.push(Line::from(vec![
            Span::styled(format!("  {:<18}", key), Style::default().fg(colors::PRIMARY)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ]));
    }

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
