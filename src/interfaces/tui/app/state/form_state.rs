//! 表单状态管理
//!
//! 长链接输入、只读的短链接输出，以及当前焦点

/// 可获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    #[default]
    LongUrl,
    Generate,
    Copy,
}

impl FocusField {
    /// Tab 顺序
    const ALL: [Self; 3] = [Self::LongUrl, Self::Generate, Self::Copy];

    /// 切换到下一个控件
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// 切换到上一个控件
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }
}

/// 表单状态
#[derive(Debug, Default)]
pub struct FormState {
    /// 长链接输入
    pub long_url: String,
    /// 短链接输出，只在请求成功时更新
    pub short_url: String,
    /// 当前焦点
    pub focus: FocusField,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_char(&mut self, c: char) {
        self.long_url.push(c);
    }

    pub fn pop_char(&mut self) {
        self.long_url.pop();
    }

    /// 追加粘贴内容，换行会被丢弃
    pub fn push_str(&mut self, text: &str) {
        self.long_url
            .extend(text.chars().filter(|c| !matches!(c, '\r' | '\n')));
    }

    pub fn clear_input(&mut self) {
        self.long_url.clear();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn is_editing(&self) -> bool {
        self.focus == FocusField::LongUrl
    }
}
