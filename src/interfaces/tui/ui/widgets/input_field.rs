//! 通用输入框组件
//!
//! 支持：
//! - 激活状态高亮
//! - 只读模式
//! - 占位符
//! - 超出宽度时显示末尾部分

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// 使用 Builder 模式配置各种选项
///
/// # 示例
///
/// ```rust,ignore
/// InputField::new("Enter Long URL", &app.form.long_url)
///     .active(true)
///     .placeholder("https://...")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    placeholder: Option<&'a str>,
    required: bool,
    readonly: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            required: false,
            readonly: false,
        }
    }

    /// 设置激活状态
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置占位符
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 设置为必填字段
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 设置为只读
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    fn display_title(&self) -> String {
        let mut title = self.title.to_string();

        if self.required {
            title.push_str(" *");
        }

        if !self.value.is_empty() {
            title = format!("{} ({} chars)", title, self.value.chars().count());
        }

        if self.readonly {
            title.push_str(" [readonly]");
        }

        title
    }

    fn border_style(&self) -> Style {
        if self.readonly {
            Style::default().fg(colors::MUTED)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 只保留能放进 `width` 列的末尾字符
    fn visible_tail(&self, width: usize) -> &'a str {
        let count = self.value.chars().count();
        if count <= width {
            return self.value;
        }
        let skip = count - width;
        match self.value.char_indices().nth(skip) {
            Some((idx, _)) => &self.value[idx..],
            None => "",
        }
    }

    /// 渲染输入框，`area` 高度应为 3
    ///
    /// 激活且可编辑时返回光标位置
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Option<Position> {
        let inner_width = area.width.saturating_sub(2) as usize;
        // 光标占一列
        let visible = self.visible_tail(inner_width.saturating_sub(1));

        let paragraph = if visible.is_empty() {
            Paragraph::new(self.placeholder.unwrap_or(""))
                .style(Style::default().fg(colors::MUTED).italic())
        } else {
            let fg = if self.readonly {
                colors::SUCCESS
            } else {
                Color::White
            };
            Paragraph::new(visible).style(Style::default().fg(fg))
        };

        let input = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);

        if self.is_active && !self.readonly {
            let offset = visible.chars().count() as u16;
            Some(Position::new(area.x + 1 + offset, area.y + 1))
        } else {
            None
        }
    }
}
