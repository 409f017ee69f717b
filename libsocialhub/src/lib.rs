//! SocialHub - compose, generate, and schedule multi-platform posts
//!
//! This library provides the composition-and-scheduling core of
//! SocialHub: a single mutable draft that can be edited by hand or filled
//! by an external text-generation service, fanned out into immutable
//! per-platform scheduled records, and read back as an ordered history.

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod media;
pub mod registry;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SocialHubError};
pub use media::{MediaAttachmentManager, MediaFile};
pub use registry::ConnectionRegistry;
pub use service::Session;
pub use types::{Platform, PostStatus, ScheduledPost};
