//! Composition session
//!
//! The single orchestrating owner of the composer state machine: the
//! connection registry, the mutable draft, the scheduling history, and
//! the generator service. All mutations go through `&mut self` methods,
//! so they are serialized and atomic with respect to each other; the
//! generation call is the only operation that suspends.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::draft::Draft;
use super::events::{Event, EventBus, EventReceiver};
use super::history::History;
use super::scheduler;
use crate::config::Config;
use crate::error::Result;
use crate::generator::{GeminiModel, GeneratorService, TextModel};
use crate::media::{MediaAttachment, MediaFile};
use crate::registry::ConnectionRegistry;
use crate::types::{FacebookKind, Platform, ScheduledPost};

const EVENT_BUS_CAPACITY: usize = 100;

pub struct Session {
    registry: ConnectionRegistry,
    draft: Draft,
    history: History,
    generator: GeneratorService,
    events: EventBus,
}

impl Session {
    /// Create a session around the given text model, with no platforms
    /// connected
    pub fn new(model: Arc<dyn TextModel>, timeout: Duration) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            draft: Draft::new(),
            history: History::new(),
            generator: GeneratorService::new(model, timeout),
            events: EventBus::new(EVENT_BUS_CAPACITY),
        }
    }

    /// Create a session from configuration, wiring the Gemini wire client
    /// and the configured default connections
    pub fn from_config(config: &Config) -> Self {
        let model: Arc<dyn TextModel> = Arc::new(GeminiModel::from_config(&config.generator));
        let mut session = Self::new(model, Duration::from_secs(config.generator.timeout_secs));
        session.registry = ConnectionRegistry::with_connected(&config.defaults.platforms);
        session
    }

    // === Connections ===

    /// Toggle a platform connection; always succeeds.
    ///
    /// Disconnecting a platform drops it from the draft selection in the
    /// same transition, so a disconnected platform is never observably
    /// selected.
    pub fn toggle_connection(&mut self, platform: Platform) -> bool {
        let connected = self.registry.toggle(platform);
        if !connected {
            self.draft.deselect(platform);
        }
        info!(%platform, connected, "connection toggled");
        self.events.emit(Event::ConnectionToggled {
            platform,
            connected,
        });
        connected
    }

    // === Draft edits ===

    /// Toggle a platform in the draft selection.
    ///
    /// Only connected platforms can be selected; toggling a disconnected
    /// platform is a no-op returning `false`, mirroring a gated control.
    pub fn toggle_selection(&mut self, platform: Platform) -> bool {
        if !self.registry.is_connected(platform) {
            return false;
        }
        self.draft.toggle_selected(platform)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.set_text(text);
    }

    pub fn attach_media(&mut self, file: MediaFile) -> &MediaAttachment {
        self.draft.attach_media(file)
    }

    pub fn remove_media(&mut self) {
        self.draft.remove_media();
    }

    pub fn set_facebook_kind(&mut self, kind: FacebookKind) {
        self.draft.set_facebook_kind(kind);
    }

    // === Generation ===

    /// Generate draft text from a topic via the external service.
    ///
    /// On success the draft text is replaced entirely; on failure the
    /// draft is left exactly as it was. `GenerationStarted` is emitted
    /// only once the request passes validation and claims the busy gate;
    /// rejected requests produce no events.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty topic, an in-flight request, a
    /// timeout, or a failed exchange.
    pub async fn generate(&mut self, topic: &str) -> Result<()> {
        let request = self.generator.begin(topic)?;
        self.events.emit(Event::GenerationStarted {
            topic: request.topic().to_string(),
        });

        match request.run().await {
            Ok(text) => {
                self.events.emit(Event::GenerationCompleted {
                    chars: text.chars().count(),
                });
                self.draft.set_text(text);
                Ok(())
            }
            Err(e) => {
                self.events.emit(Event::GenerationFailed {
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    // === Scheduling ===

    /// Schedule the current draft: validate, fan out one record per
    /// selected platform, prepend the batch to history, and reset the
    /// draft (releasing the media preview resource).
    ///
    /// Validation precedes all mutation; a failing call leaves the draft
    /// and history untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::ValidationError`] if the draft has no
    /// content or no selected platform.
    pub fn schedule(&mut self) -> Result<Vec<ScheduledPost>> {
        let batch = scheduler::fan_out(&self.draft)?;

        let platforms: Vec<Platform> = batch.iter().map(|p| p.platform).collect();
        info!(count = batch.len(), ?platforms, "draft scheduled");

        self.history.prepend_batch(batch.clone());
        self.draft.reset();
        self.events.emit(Event::PostsScheduled {
            count: batch.len(),
            platforms,
        });

        Ok(batch)
    }

    // === Read surface ===

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Is a generation request currently in flight?
    pub fn is_generating(&self) -> bool {
        self.generator.is_busy()
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> EventReceiver {
        self.events.subscribe()
    }
}
