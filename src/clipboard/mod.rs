//! Clipboard collaborator
//!
//! The mediator only needs "put this text on the clipboard"; the system
//! implementation is behind the `tui` feature because it pulls in `arboard`.
//!
//! On X11 and Wayland the copying process serves the clipboard itself, so
//! the `arboard` handle must outlive the copy. The TUI keeps one handle for
//! the whole session; one-shot commands wait for a clipboard manager to take
//! the content over before the process exits.

use std::time::Duration;

#[cfg(feature = "tui")]
use std::sync::Mutex;

/// 一次性命令退出前等待剪贴板管理器接管内容的最长时间
pub const HANDOFF_TIMEOUT: Duration = Duration::from_secs(2);

/// 剪贴板 trait
pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), String>;
}

/// System clipboard backed by `arboard`.
///
/// The handle is opened on first use and kept until the sink is dropped.
#[cfg(feature = "tui")]
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
    handoff: Option<Duration>,
}

#[cfg(feature = "tui")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// For processes that exit right after copying: every copy blocks until
    /// another program owns the content or `timeout` passes (Linux only).
    pub fn with_handoff(timeout: Duration) -> Self {
        Self {
            handle: Mutex::new(None),
            handoff: Some(timeout),
        }
    }

    pub fn handoff(&self) -> Option<Duration> {
        self.handoff
    }

    pub fn is_open(&self) -> bool {
        self.handle.lock().map(|h| h.is_some()).unwrap_or(false)
    }
}

#[cfg(feature = "tui")]
impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), String> {
        let mut guard = self.handle.lock().map_err(|e| e.to_string())?;
        let clipboard = match guard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| e.to_string())?,
        };
        let clipboard = guard.insert(clipboard);

        #[cfg(target_os = "linux")]
        if let Some(timeout) = self.handoff {
            use arboard::SetExtLinux;
            tracing::debug!("Waiting up to {:?} for a clipboard manager", timeout);
            return clipboard
                .set()
                .wait_until(std::time::Instant::now() + timeout)
                .text(text)
                .map_err(|e| e.to_string());
        }

        clipboard.set_text(text).map_err(|e| e.to_string())
    }
}

/// Used when the binary is built without clipboard support.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledClipboard;

impl ClipboardSink for DisabledClipboard {
    fn set_text(&self, _text: &str) -> Result<(), String> {
        Err("clipboard support is not compiled in (enable the `tui` feature)".to_string())
    }
}

/// 当前构建可用的默认剪贴板（长期运行的界面）
pub fn default_clipboard() -> Box<dyn ClipboardSink> {
    #[cfg(feature = "tui")]
    {
        Box::new(SystemClipboard::new())
    }
    #[cfg(not(feature = "tui"))]
    {
        Box::new(DisabledClipboard)
    }
}

/// 一次性命令使用的剪贴板，复制后等待内容被接管
pub fn handoff_clipboard() -> Box<dyn ClipboardSink> {
    #[cfg(feature = "tui")]
    {
        Box::new(SystemClipboard::with_handoff(HANDOFF_TIMEOUT))
    }
    #[cfg(not(feature = "tui"))]
    {
        Box::new(DisabledClipboard)
    }
}
