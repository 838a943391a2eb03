//! 模态通知
//!
//! 每个错误类型对应一种通知样式，通知出现时会拦截所有按键直到被关闭。

use crate::errors::CompactorError;
use crate::interfaces::tui::constants::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub detail: Option<String>,
}

impl Notification {
    fn new(kind: NotificationKind, title: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.into(),
            detail: None,
        }
    }

    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, message)
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Map a mediator error onto the modal the user sees.
    pub fn from_error(err: &CompactorError) -> Self {
        match err {
            CompactorError::Validation(msg) | CompactorError::EmptyResult(msg) => {
                Self::warning("Warning", msg.as_str())
            }
            CompactorError::RequestInFlight(msg) => Self::warning("Please Wait", msg.as_str()),
            CompactorError::Shortening(detail) => {
                Self::error("Error", messages::SHORTENING_FAILED).with_detail(detail.as_str())
            }
            CompactorError::Unexpected(msg) => Self::error(
                "Error",
                format!("{} {}", messages::UNEXPECTED_PREFIX, msg),
            ),
            CompactorError::Clipboard(msg) => Self::error("Clipboard", msg.as_str()),
            other => Self::error("Error", other.format_simple()),
        }
    }
}
