//! TUI 常量定义
//!
//! 集中管理弹窗尺寸、颜色、按钮文字和提示文案

/// 弹窗尺寸配置（百分比）
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    pub width: u16,
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 弹窗尺寸预设
pub mod popup {
    use super::PopupSize;

    /// 通知弹窗
    pub const NOTIFICATION: PopupSize = PopupSize::new(60, 35);

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 70);

    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 30);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    pub const PRIMARY: Color = Color::Cyan;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const MUTED: Color = Color::DarkGray;
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// 控件文字
pub mod labels {
    pub const APP_TITLE: &str = "Uniform Resource Compactor";
    pub const LONG_URL: &str = "Enter Long URL";
    pub const LONG_URL_PLACEHOLDER: &str = "https://example.com/a/very/long/path";
    pub const SHORT_URL: &str = "Shortened URL";
    pub const SHORT_URL_PLACEHOLDER: &str = "nothing generated yet";
    pub const GENERATE: &str = "Generate Short URL";
    pub const GENERATING: &str = "Shortening...";
    pub const COPY: &str = "Copy to Clipboard";
}

/// 通知文案
pub mod messages {
    pub const SHORTENING_FAILED: &str =
        "Could not shorten the URL. Please check the link and your internet connection.";
    pub const UNEXPECTED_PREFIX: &str = "An unexpected error occurred:";
    pub const COPIED_TITLE: &str = "Copied!";
    pub const COPIED: &str = "Short URL has been copied to your clipboard.";
    pub const DISMISS_HINT: &str = "Press [Enter] or [Esc] to close";
}

/// 事件轮询间隔（毫秒），后台结果在两次轮询之间被取回
pub const EVENT_POLL_INTERVAL_MS: u64 = 100;
