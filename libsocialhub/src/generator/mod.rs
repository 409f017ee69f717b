//! AI draft generation
//!
//! A stateless request/response wrapper around an external text-generation
//! call. The [`GeneratorService`] enforces the composition rules: a
//! non-empty topic, at most one request in flight, and a fixed timeout.
//! The concrete wire exchange lives behind the [`TextModel`] trait so the
//! service can be driven by the real API client or a mock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{GenerationError, Result, ValidationError};

pub mod gemini;
pub mod mock;

pub use gemini::GeminiModel;
pub use mock::MockModel;

/// One-shot text completion against an external model.
///
/// Implementations perform a single request/response exchange: no retry,
/// no streaming.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> std::result::Result<String, GenerationError>;
}

/// Build the fixed prompt template around a user topic
pub fn build_prompt(topic: &str) -> String {
    format!(
        "Write a short, engaging social media post about \"{}\". \
         The tone should be professional but approachable. \
         Include 2-3 relevant hashtags.",
        topic
    )
}

/// Serializes generation requests: at most one in flight at a time.
///
/// The busy gate is cleared on every exit path, including timeout, so a
/// failed request never wedges the service.
#[derive(Clone)]
pub struct GeneratorService {
    model: Arc<dyn TextModel>,
    busy: Arc<AtomicBool>,
    timeout: Duration,
}

impl GeneratorService {
    pub fn new(model: Arc<dyn TextModel>, timeout: Duration) -> Self {
        Self {
            model,
            busy: Arc::new(AtomicBool::new(false)),
            timeout,
        }
    }

    /// Is a generation request currently in flight?
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Validate the topic and claim the busy gate without issuing the call.
    ///
    /// The returned request holds the gate until it is run or dropped, so
    /// callers can observe acceptance (and announce it) before the
    /// exchange starts.
    ///
    /// # Errors
    ///
    /// Fails with [`ValidationError::EmptyTopic`] if the trimmed topic is
    /// empty, and with [`GenerationError::Busy`] if another request is
    /// already in flight.
    pub fn begin(&self, topic: &str) -> Result<PendingGeneration<'_>> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::EmptyTopic.into());
        }

        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| GenerationError::Busy)?;

        Ok(PendingGeneration {
            service: self,
            topic: topic.to_string(),
            _gate: BusyGate(&self.busy),
        })
    }

    /// Generate draft text for a topic.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the busy gate rejects the
    /// call, the exchange times out, or the model call fails.
    pub async fn generate(&self, topic: &str) -> Result<String> {
        self.begin(topic)?.run().await
    }
}

/// An accepted generation request holding the busy gate until it resolves
pub struct PendingGeneration<'a> {
    service: &'a GeneratorService,
    topic: String,
    _gate: BusyGate<'a>,
}

impl PendingGeneration<'_> {
    /// The trimmed topic this request was accepted for
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Issue the exchange; consumes the request and releases the gate on
    /// every exit path
    pub async fn run(self) -> Result<String> {
        let topic = self.topic.as_str();
        debug!(topic, "starting generation request");
        let prompt = build_prompt(topic);

        let timeout = self.service.timeout;
        match tokio::time::timeout(timeout, self.service.model.complete(&prompt)).await {
            Err(_) => {
                warn!(topic, timeout_secs = timeout.as_secs(), "generation timed out");
                Err(GenerationError::Timeout.into())
            }
            Ok(Err(e)) => {
                warn!(topic, error = %e, "generation failed");
                Err(e.into())
            }
            Ok(Ok(text)) => {
                debug!(chars = text.chars().count(), "generation succeeded");
                Ok(text)
            }
        }
    }
}

/// Clears the busy flag when the request resolves, on every path
struct BusyGate<'a>(&'a AtomicBool);

impl Drop for BusyGate<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SocialHubError;

    fn service(model: MockModel) -> GeneratorService {
        GeneratorService::new(Arc::new(model), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_empty_topic_rejected_without_call() {
        let model = MockModel::success("generated");
        let calls = model.call_counter();
        let service = service(model);

        let result = service.generate("   ").await;
        assert!(matches!(
            result,
            Err(SocialHubError::Validation(ValidationError::EmptyTopic))
        ));
        assert_eq!(calls.count(), 0);
        assert!(!service.is_busy());
    }

    #[tokio::test]
    async fn test_generate_success() {
        let service = service(MockModel::success("A post about rust #rustlang"));

        let text = service.generate("rust").await.unwrap();
        assert_eq!(text, "A post about rust #rustlang");
        assert!(!service.is_busy());
    }

    #[tokio::test]
    async fn test_prompt_embeds_topic() {
        let model = MockModel::success("ok");
        let prompts = model.prompt_log();
        let service = service(model);

        service.generate("  remote work  ").await.unwrap();

        let seen = prompts.recorded();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("\"remote work\""));
        assert!(seen[0].contains("hashtags"));
    }

    #[tokio::test]
    async fn test_busy_gate_rejects_concurrent_request() {
        let model = MockModel::with_delay("slow reply", Duration::from_millis(200));
        let calls = model.call_counter();
        let service = service(model);
        let racing = service.clone();

        let first = tokio::spawn(async move { racing.generate("topic one").await });
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(service.is_busy());
        let second = service.generate("topic two").await;
        assert!(matches!(
            second,
            Err(SocialHubError::Generation(GenerationError::Busy))
        ));

        first.await.unwrap().unwrap();
        assert_eq!(calls.count(), 1);
        assert!(!service.is_busy());
    }

    #[test]
    fn test_begin_claims_and_drop_releases_gate() {
        let service = service(MockModel::success("ok"));

        let pending = service.begin("topic").unwrap();
        assert!(service.is_busy());
        assert_eq!(pending.topic(), "topic");

        // An abandoned request must not wedge the service
        drop(pending);
        assert!(!service.is_busy());
    }

    #[tokio::test]
    async fn test_busy_gate_clears_after_failure() {
        let service = service(MockModel::failure(GenerationError::Status(500)));

        let result = service.generate("topic").await;
        assert!(result.is_err());
        assert!(!service.is_busy());

        // Service is usable again
        let result = service.generate("topic").await;
        assert!(result.is_err());
        assert!(!service.is_busy());
    }

    #[tokio::test]
    async fn test_timeout() {
        let model = MockModel::with_delay("too late", Duration::from_secs(60));
        let service = GeneratorService::new(Arc::new(model), Duration::from_millis(50));

        let result = service.generate("topic").await;
        assert!(matches!(
            result,
            Err(SocialHubError::Generation(GenerationError::Timeout))
        ));
        assert!(!service.is_busy());
    }
}
