//! Mock text model for testing
//!
//! Configurable stand-in for the external generation service: canned
//! replies, failure injection, and artificial latency, with call and
//! prompt recording for verification.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use super::TextModel;
use crate::error::GenerationError;

/// Mock model with configurable behavior
pub struct MockModel {
    reply: Result<String, GenerationError>,
    delay: Duration,
    calls: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockModel {
    /// A model that always returns the given text
    pub fn success(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A model that always fails with the given error
    pub fn failure(error: GenerationError) -> Self {
        Self {
            reply: Err(error),
            ..Self::success("")
        }
    }

    /// A model that sleeps before replying, to simulate network latency
    pub fn with_delay(reply: &str, delay: Duration) -> Self {
        Self {
            delay,
            ..Self::success(reply)
        }
    }

    /// Handle for asserting how many calls were issued
    pub fn call_counter(&self) -> CallCounter {
        CallCounter(Arc::clone(&self.calls))
    }

    /// Handle for asserting which prompts were sent
    pub fn prompt_log(&self) -> PromptLog {
        PromptLog(Arc::clone(&self.prompts))
    }
}

#[async_trait]
impl TextModel for MockModel {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        *self.calls.lock().unwrap() += 1;
        self.prompts.lock().unwrap().push(prompt.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.reply.clone()
    }
}

/// Observer for the number of completed calls
#[derive(Clone)]
pub struct CallCounter(Arc<Mutex<usize>>);

impl CallCounter {
    pub fn count(&self) -> usize {
        *self.0.lock().unwrap()
    }
}

/// Observer for the prompts the mock has seen
#[derive(Clone)]
pub struct PromptLog(Arc<Mutex<Vec<String>>>);

impl PromptLog {
    pub fn recorded(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_mock_records_calls() {
        let mock = MockModel::success("canned");
        let calls = mock.call_counter();

        let reply = mock.complete("prompt").await.unwrap();
        assert_eq!(reply, "canned");
        assert_eq!(calls.count(), 1);
    }

    #[tokio::test]
    async fn test_failure_mock() {
        let mock = MockModel::failure(GenerationError::Status(500));
        let result = mock.complete("prompt").await;
        assert!(matches!(result, Err(GenerationError::Status(500))));
    }

    #[tokio::test]
    async fn test_prompt_recording() {
        let mock = MockModel::success("ok");
        let prompts = mock.prompt_log();

        mock.complete("first").await.unwrap();
        mock.complete("second").await.unwrap();

        assert_eq!(prompts.recorded(), vec!["first", "second"]);
    }
}
