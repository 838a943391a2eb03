use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};

use url_compactor::clipboard::ClipboardSink;
use url_compactor::errors::CompactorError;
use url_compactor::mediator::{
    EMPTY_INPUT_MESSAGE, Mediator, NOTHING_TO_COPY_MESSAGE, RequestStatus,
};
use url_compactor::provider::{ProviderError, ShortenProvider};
use url_compactor::system::{build_runtime, shutdown_runtime};

// =============================================================================
// Test doubles
// =============================================================================

type Outcome = Result<String, ProviderError>;

/// Records every URL it receives and answers with a fixed outcome
struct RecordingProvider {
    calls: Mutex<Vec<String>>,
    outcome: Outcome,
}

impl RecordingProvider {
    fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            outcome,
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ShortenProvider for RecordingProvider {
    fn shorten(&self, long_url: &str) -> Outcome {
        self.calls.lock().unwrap().push(long_url.to_string());
        self.outcome.clone()
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Waits for the test to release each call
struct GatedProvider {
    calls: Mutex<Vec<String>>,
    gate: Mutex<Receiver<Outcome>>,
}

impl GatedProvider {
    fn new() -> (Arc<Self>, Sender<Outcome>) {
        let (tx, rx) = channel();
        let provider = Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            gate: Mutex::new(rx),
        });
        (provider, tx)
    }
}

impl ShortenProvider for GatedProvider {
    fn shorten(&self, long_url: &str) -> Outcome {
        self.calls.lock().unwrap().push(long_url.to_string());
        self.gate
            .lock()
            .unwrap()
            .recv()
            .unwrap_or_else(|_| Err(ProviderError::Other("gate closed".to_string())))
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}

struct PanickingProvider;

impl ShortenProvider for PanickingProvider {
    fn shorten(&self, _long_url: &str) -> Outcome {
        panic!("provider exploded");
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}

/// Simulates a provider stuck on a slow network
struct SleepingProvider(std::time::Duration);

impl ShortenProvider for SleepingProvider {
    fn shorten(&self, _long_url: &str) -> Outcome {
        std::thread::sleep(self.0);
        Ok("https://tinyurl.com/late".to_string())
    }

    fn name(&self) -> &'static str {
        "sleeping"
    }
}

#[derive(Clone, Default)]
struct MemoryClipboard {
    contents: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    fn contents(&self) -> Vec<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), String> {
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn set_text(&self, _text: &str) -> Result<(), String> {
        Err("no display".to_string())
    }
}

fn mediator_with(provider: Arc<dyn ShortenProvider>) -> (Mediator, MemoryClipboard) {
    let clipboard = MemoryClipboard::default();
    (
        Mediator::new(provider, Box::new(clipboard.clone())),
        clipboard,
    )
}

// =============================================================================
// submit / shorten
// =============================================================================

#[cfg(test)]
mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_shortening() {
        let provider = RecordingProvider::new(Ok("https://tinyurl.com/xyz123".to_string()));
        let (mut mediator, _) = mediator_with(provider.clone());

        let short = mediator
            .shorten("https://example.com/a/very/long/path?x=1")
            .await
            .unwrap();

        assert_eq!(short, "https://tinyurl.com/xyz123");
        assert_eq!(provider.calls(), vec!["https://example.com/a/very/long/path?x=1"]);
        assert_eq!(
            mediator.request().status(),
            &RequestStatus::Succeeded("https://tinyurl.com/xyz123".to_string())
        );
        assert!(!mediator.is_in_flight());
    }

    #[tokio::test]
    async fn test_empty_input_never_reaches_provider() {
        let provider = RecordingProvider::new(Ok("https://tinyurl.com/x".to_string()));
        let (mut mediator, _) = mediator_with(provider.clone());

        for input in ["", "   ", "\t\n"] {
            let err = mediator.shorten(input).await.unwrap_err();
            assert_eq!(err, CompactorError::validation(EMPTY_INPUT_MESSAGE));
        }

        assert!(provider.calls().is_empty());
        assert_eq!(mediator.request().status(), &RequestStatus::Idle);
    }

    #[tokio::test]
    async fn test_missing_scheme_is_prefixed() {
        let provider = RecordingProvider::new(Ok("https://tinyurl.com/x".to_string()));
        let (mut mediator, _) = mediator_with(provider.clone());

        mediator.shorten("example.com/page").await.unwrap();

        assert_eq!(provider.calls(), vec!["http://example.com/page"]);
    }

    #[tokio::test]
    async fn test_provider_rejection_is_shortening_error() {
        let provider = RecordingProvider::new(Err(ProviderError::Shortening(
            "provider responded with HTTP 400".to_string(),
        )));
        let (mut mediator, _) = mediator_with(provider);

        let err = mediator.shorten("https://example.com").await.unwrap_err();

        assert_eq!(
            err,
            CompactorError::shortening("provider responded with HTTP 400")
        );
        assert_eq!(
            mediator.request().error_message(),
            Some("provider responded with HTTP 400")
        );
        assert!(mediator.request().short_url().is_none());
    }

    #[tokio::test]
    async fn test_other_provider_failure_is_unexpected() {
        let provider = RecordingProvider::new(Err(ProviderError::Other("bad body".to_string())));
        let (mut mediator, _) = mediator_with(provider);

        let err = mediator.shorten("https://example.com").await.unwrap_err();
        assert!(matches!(err, CompactorError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_worker_panic_becomes_unexpected_error() {
        let (mut mediator, _) = mediator_with(Arc::new(PanickingProvider));

        let err = mediator.shorten("https://example.com").await.unwrap_err();

        assert_eq!(err, CompactorError::unexpected("provider exploded"));
        assert!(!mediator.is_in_flight());
    }

    #[tokio::test]
    async fn test_second_submit_rejected_while_in_flight() {
        let (provider, gate) = GatedProvider::new();
        let (mut mediator, _) = mediator_with(provider.clone());

        let id = mediator.submit("https://a.example").unwrap();
        assert!(mediator.is_in_flight());

        let err = mediator.submit("https://b.example").unwrap_err();
        assert!(matches!(err, CompactorError::RequestInFlight(_)));
        assert_eq!(mediator.request().long_url(), "https://a.example");

        gate.send(Ok("https://tinyurl.com/a".to_string())).unwrap();
        let completion = mediator.next_completion().await.unwrap();
        assert_eq!(completion.id, id);
        assert_eq!(
            mediator.complete(completion),
            Some(Ok("https://tinyurl.com/a".to_string()))
        );

        assert_eq!(
            provider.calls.lock().unwrap().as_slice(),
            ["https://a.example".to_string()]
        );
    }

    #[tokio::test]
    async fn test_new_request_replaces_previous_result() {
        let (provider, gate) = GatedProvider::new();
        let (mut mediator, _) = mediator_with(provider);

        gate.send(Ok("https://tinyurl.com/first".to_string())).unwrap();
        mediator.shorten("https://first.example").await.unwrap();
        assert_eq!(mediator.request().short_url(), Some("https://tinyurl.com/first"));

        mediator.submit("https://second.example").unwrap();
        assert_eq!(mediator.request().status(), &RequestStatus::InFlight);
        assert!(mediator.request().short_url().is_none());

        gate.send(Ok("https://tinyurl.com/second".to_string())).unwrap();
        let completion = mediator.next_completion().await.unwrap();
        mediator.complete(completion);
        assert_eq!(mediator.request().short_url(), Some("https://tinyurl.com/second"));
    }

    #[tokio::test]
    async fn test_poll_completion_is_non_blocking() {
        let (provider, gate) = GatedProvider::new();
        let (mut mediator, _) = mediator_with(provider);

        mediator.submit("https://example.com").unwrap();
        assert!(mediator.poll_completion().is_none());

        gate.send(Ok("https://tinyurl.com/x".to_string())).unwrap();
        let completion = loop {
            if let Some(c) = mediator.poll_completion() {
                break c;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        };
        assert!(mediator.complete(completion).is_some());
    }
}

// =============================================================================
// copy
// =============================================================================

#[cfg(test)]
mod copy_tests {
    use super::*;

    #[test]
    fn test_copy_empty_is_empty_result() {
        let provider = RecordingProvider::new(Ok(String::new()));
        let (mediator, clipboard) = mediator_with(provider);

        assert_eq!(
            mediator.copy(""),
            Err(CompactorError::empty_result(NOTHING_TO_COPY_MESSAGE))
        );
        assert!(clipboard.contents().is_empty());
    }

    #[test]
    fn test_copy_writes_exact_text() {
        let provider = RecordingProvider::new(Ok(String::new()));
        let (mediator, clipboard) = mediator_with(provider);

        mediator.copy("https://tinyurl.com/xyz123").unwrap();

        assert_eq!(clipboard.contents(), vec!["https://tinyurl.com/xyz123"]);
    }

    #[test]
    fn test_clipboard_failure_is_reported() {
        let mediator = Mediator::new(
            RecordingProvider::new(Ok(String::new())),
            Box::new(BrokenClipboard),
        );

        let err = mediator.copy("https://tinyurl.com/xyz123").unwrap_err();
        assert!(matches!(err, CompactorError::Clipboard(_)));
        assert!(err.message().contains("no display"));
    }

    #[tokio::test]
    async fn test_copy_after_shortening() {
        let provider = RecordingProvider::new(Ok("https://tinyurl.com/xyz123".to_string()));
        let (mut mediator, clipboard) = mediator_with(provider);

        let short = mediator.shorten("https://example.com").await.unwrap();
        mediator.copy(&short).unwrap();

        assert_eq!(clipboard.contents(), vec!["https://tinyurl.com/xyz123"]);
    }
}

// =============================================================================
// shutdown
// =============================================================================

#[cfg(test)]
mod shutdown_tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn test_shutdown_abandons_in_flight_request() {
        let runtime = build_runtime().unwrap();
        let (mut mediator, _) =
            mediator_with(Arc::new(SleepingProvider(Duration::from_secs(3))));

        runtime.block_on(async {
            mediator.submit("https://example.com").unwrap();
        });
        assert!(mediator.is_in_flight());
        // Give the worker time to enter the provider call
        std::thread::sleep(Duration::from_millis(100));

        let started = Instant::now();
        shutdown_runtime(runtime);
        drop(mediator);

        assert!(
            started.elapsed() < Duration::from_secs(1),
            "shutdown waited {:?} for the provider",
            started.elapsed()
        );
    }
}
