//! 按钮组件
//!
//! 禁用时变灰，获得焦点时高亮

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

pub struct Button<'a> {
    label: &'a str,
    enabled: bool,
    focused: bool,
    color: Color,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
            focused: false,
            color: colors::PRIMARY,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// 边框加左右各两格留白
    pub fn width(&self) -> u16 {
        self.label.chars().count() as u16 + 6
    }

    fn style(&self) -> Style {
        if !self.enabled {
            Style::default().fg(colors::MUTED)
        } else if self.focused {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(self.color)
                .bold()
        } else {
            Style::default().fg(self.color).bold()
        }
    }

    /// 在 `area` 中水平居中渲染，`area` 高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = self.width().min(area.width);
        let x = area.x + (area.width - width) / 2;
        let rect = Rect::new(x, area.y, width, area.height.min(3));

        let border_style = if self.enabled {
            Style::default().fg(self.color)
        } else {
            Style::default().fg(colors::MUTED)
        };

        let button = Paragraph::new(self.label)
            .style(self.style())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
        frame.render_widget(button, rect);
    }
}
