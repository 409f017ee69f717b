//! Event system for session observers
//!
//! In-process event bus built on `tokio::sync::broadcast`. Session
//! operations emit progress events; any number of display surfaces may
//! subscribe. Emission never blocks: with no subscribers the event is
//! dropped, and a lagging subscriber loses oldest events first.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Platform;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<Event>;

/// Event bus for distributing session events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the given per-subscriber buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers; non-blocking
    pub fn emit(&self, event: Event) {
        // send() errors when no receivers exist, which is fine
        let _ = self.sender.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Events emitted by session operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A platform connection was toggled
    ConnectionToggled { platform: Platform, connected: bool },

    /// A generation request was accepted and issued
    GenerationStarted { topic: String },

    /// Generation succeeded and the draft text was replaced
    GenerationCompleted { chars: usize },

    /// Generation failed; the draft is unchanged
    GenerationFailed { error: String },

    /// A draft was fanned out into scheduled records
    PostsScheduled {
        count: usize,
        platforms: Vec<Platform>,
    },
}
