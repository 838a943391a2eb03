//! Shortener Request Mediator
//!
//! Bridges UI intent to the network call and back:
//!
//! 1. `submit` validates, flips the request to `InFlight` on the caller's
//!    thread and spawns the blocking provider call on tokio's blocking pool.
//! 2. The worker never touches mediator state. It sends a [`Completion`]
//!    over a channel.
//! 3. The owner drains completions with [`Mediator::poll_completion`] (UI
//!    loop) or [`Mediator::next_completion`] (async callers) and applies them
//!    with [`Mediator::complete`].
//!
//! Only one request may be in flight; a second `submit` is rejected.

mod normalize;
mod request;

pub use normalize::{EMPTY_INPUT_MESSAGE, normalize_long_url};
pub use request::{RequestId, RequestStatus, ShortenRequest};

use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, error::TryRecvError, unbounded_channel};
use tracing::{debug, info, warn};

use crate::clipboard::{ClipboardSink, default_clipboard};
use crate::config::ProviderConfig;
use crate::errors::{CompactorError, Result};
use crate::provider::{ShortenProvider, TinyUrlProvider};
use crate::system::panic_handler::panic_message;

/// 复制时没有可复制内容的提示
pub const NOTHING_TO_COPY_MESSAGE: &str = "Nothing to copy. Please generate a short URL first.";

/// 后台请求完成后回传给所有者的消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub id: RequestId,
    pub result: std::result::Result<String, CompactorError>,
}

pub struct Mediator {
    provider: Arc<dyn ShortenProvider>,
    clipboard: Box<dyn ClipboardSink>,
    request: ShortenRequest,
    next_id: u64,
    completion_tx: UnboundedSender<Completion>,
    completion_rx: UnboundedReceiver<Completion>,
}

impl Mediator {
    pub fn new(provider: Arc<dyn ShortenProvider>, clipboard: Box<dyn ClipboardSink>) -> Self {
        let (completion_tx, completion_rx) = unbounded_channel();
        Self {
            provider,
            clipboard,
            request: ShortenRequest::new(),
            next_id: 0,
            completion_tx,
            completion_rx,
        }
    }

    /// TinyURL + the default clipboard for this build.
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            Arc::new(TinyUrlProvider::from_config(config)),
            default_clipboard(),
        )
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn request(&self) -> &ShortenRequest {
        &self.request
    }

    pub fn is_in_flight(&self) -> bool {
        self.request.is_in_flight()
    }

    /// Start shortening `long_url` in the background.
    ///
    /// Must be called from within a tokio runtime. Validation, normalization
    /// and the in-flight check happen synchronously; none of those failures
    /// touch the network or the current request.
    pub fn submit(&mut self, long_url: &str) -> Result<RequestId> {
        if self.request.is_in_flight() {
            debug!("Rejected submit: request {:?} still in flight", self.request.id());
            return Err(CompactorError::request_in_flight(
                "A short URL is already being generated. Please wait.",
            ));
        }

        let url = normalize_long_url(long_url)?;

        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.request.begin(id, url.clone());
        info!("Request {} submitted for {}", id, url);

        let provider = Arc::clone(&self.provider);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let joined = tokio::task::spawn_blocking(move || provider.shorten(&url)).await;
            let result = match joined {
                Ok(Ok(short_url)) => Ok(short_url),
                Ok(Err(e)) => Err(CompactorError::from(e)),
                Err(e) if e.is_panic() => {
                    let payload = e.into_panic();
                    Err(CompactorError::unexpected(panic_message(payload.as_ref())))
                }
                Err(e) => Err(CompactorError::unexpected(e.to_string())),
            };
            // 所有者已被丢弃时发送失败，结果没有人需要了
            if tx.send(Completion { id, result }).is_err() {
                debug!("Request {} completed after its mediator was dropped", id);
            }
        });

        Ok(id)
    }

    /// Non-blocking check for a finished request.
    pub fn poll_completion(&mut self) -> Option<Completion> {
        match self.completion_rx.try_recv() {
            Ok(completion) => Some(completion),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next finished request.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completion_rx.recv().await
    }

    /// Apply a completion on the owning thread.
    ///
    /// Returns the outcome, or `None` when the completion belongs to a
    /// request that is no longer current.
    pub fn complete(
        &mut self,
        completion: Completion,
    ) -> Option<std::result::Result<String, CompactorError>> {
        let Completion { id, result } = completion;
        if !self.request.finish(id, result.clone()) {
            warn!("Dropping stale completion for request {}", id);
            return None;
        }

        match &result {
            Ok(short_url) => info!("Request {} succeeded: {}", id, short_url),
            Err(e) => warn!("Request {} failed: {}", id, e),
        }
        Some(result)
    }

    /// `submit` and wait for its outcome. For callers without a UI loop.
    pub async fn shorten(&mut self, long_url: &str) -> Result<String> {
        let id = self.submit(long_url)?;
        loop {
            let completion = self.next_completion().await.ok_or_else(|| {
                CompactorError::unexpected("background worker channel closed")
            })?;
            if completion.id != id {
                continue;
            }
            if let Some(outcome) = self.complete(completion) {
                return outcome;
            }
        }
    }

    /// Copy `short_url` to the clipboard.
    pub fn copy(&self, short_url: &str) -> Result<()> {
        if short_url.trim().is_empty() {
            return Err(CompactorError::empty_result(NOTHING_TO_COPY_MESSAGE));
        }

        self.clipboard
            .set_text(short_url)
            .map_err(|e| CompactorError::clipboard(format!("Failed to copy: {}", e)))?;
        debug!("Copied {} to clipboard", short_url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use std::sync::Mutex;

    struct FixedProvider(&'static str);

    impl ShortenProvider for FixedProvider {
        fn shorten(&self, _long_url: &str) -> std::result::Result<String, ProviderError> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[derive(Default)]
    struct RecordingClipboard(Mutex<Vec<String>>);

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&self, text: &str) -> std::result::Result<(), String> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn mediator() -> Mediator {
        Mediator::new(
            Arc::new(FixedProvider("https://tinyurl.com/abc")),
            Box::new(RecordingClipboard::default()),
        )
    }

    #[tokio::test]
    async fn test_stale_completion_is_ignored() {
        let mut mediator = mediator();
        let id = mediator.submit("https://example.com").unwrap();

        let stale = Completion {
            id: RequestId(id.value() + 41),
            result: Ok("https://tinyurl.com/stale".to_string()),
        };
        assert!(mediator.complete(stale).is_none());
        assert!(mediator.is_in_flight());

        let completion = mediator.next_completion().await.unwrap();
        assert_eq!(completion.id, id);
        assert_eq!(
            mediator.complete(completion),
            Some(Ok("https://tinyurl.com/abc".to_string()))
        );
        assert!(!mediator.is_in_flight());
    }

    #[tokio::test]
    async fn test_request_ids_increase() {
        let mut mediator = mediator();
        let first = mediator.submit("https://a.example").unwrap();
        let c = mediator.next_completion().await.unwrap();
        mediator.complete(c);

        let second = mediator.submit("https://b.example").unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_invalid_url_does_not_start_request() {
        let mut mediator = mediator();
        let err = mediator.submit("http://").unwrap_err();
        assert!(matches!(err, CompactorError::Shortening(_)));
        assert_eq!(mediator.request().status(), &RequestStatus::Idle);
        assert!(mediator.poll_completion().is_none());
    }

    #[test]
    fn test_copy_whitespace_is_empty_result() {
        let mediator = mediator();
        assert_eq!(
            mediator.copy("   "),
            Err(CompactorError::empty_result(NOTHING_TO_COPY_MESSAGE))
        );
    }
}
