//! App state definition and basic state management

mod form_state;
mod notification;

pub use form_state::{FocusField, FormState};
pub use notification::{Notification, NotificationKind};

use crate::config::StaticConfig;
use crate::interfaces::tui::constants::labels;
use crate::mediator::Mediator;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Help,
    Exiting,
}

pub struct App {
    pub mediator: Mediator,
    pub current_screen: CurrentScreen,
    pub form: FormState,
    /// "Generate Short URL" 是否可点击，提交成功后立即置为 false
    pub trigger_enabled: bool,
    /// 模态通知，存在时拦截所有按键
    pub notification: Option<Notification>,
    pub status_message: String,
    pub error_message: String,
}

impl App {
    pub fn new(config: &StaticConfig) -> Self {
        Self::with_mediator(Mediator::from_config(&config.provider))
    }

    pub fn with_mediator(mediator: Mediator) -> Self {
        Self {
            mediator,
            current_screen: CurrentScreen::Main,
            form: FormState::new(),
            trigger_enabled: true,
            notification: None,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.trigger_enabled {
            labels::GENERATE
        } else {
            labels::GENERATING
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = msg.into();
        self.status_message.clear();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}
