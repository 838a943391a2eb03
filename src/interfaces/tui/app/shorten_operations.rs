//! 短链接生成与复制
//!
//! 触发按钮在 `submit` 成功返回的同一帧内被禁用，
//! 后台结果只在 UI 线程上通过 `drain_completions` 应用。

use tracing::debug;

use super::state::{App, Notification};
use crate::errors::CompactorError;
use crate::interfaces::tui::constants::messages;
use crate::mediator::Completion;

impl App {
    /// "Generate Short URL" pressed
    pub fn start_shorten(&mut self) {
        if !self.trigger_enabled {
            debug!("Trigger pressed while disabled; ignored");
            return;
        }

        match self.mediator.submit(&self.form.long_url) {
            Ok(id) => {
                self.trigger_enabled = false;
                self.set_status(format!("Shortening (request {})...", id));
            }
            Err(err) => self.show_error(&err),
        }
    }

    /// Apply one background result
    pub fn on_completion(&mut self, completion: Completion) {
        if let Some(outcome) = self.mediator.complete(completion) {
            match outcome {
                Ok(short_url) => {
                    self.form.short_url = short_url;
                    self.set_status("Short URL generated");
                }
                Err(err) => self.show_error(&err),
            }
        }
        self.trigger_enabled = !self.mediator.is_in_flight();
    }

    /// Apply every result that arrived since the last frame
    pub fn drain_completions(&mut self) {
        while let Some(completion) = self.mediator.poll_completion() {
            self.on_completion(completion);
        }
    }

    /// "Copy to Clipboard" pressed
    pub fn copy_short_url(&mut self) {
        match self.mediator.copy(&self.form.short_url) {
            Ok(()) => {
                self.set_status("Copied to clipboard");
                self.notify(Notification::info(messages::COPIED_TITLE, messages::COPIED));
            }
            Err(err) => self.show_error(&err),
        }
    }

    fn show_error(&mut self, err: &CompactorError) {
        self.set_error(err.message());
        self.notify(Notification::from_error(err));
    }
}
