//! Core types for SocialHub

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// A connectable social platform.
///
/// The set is fixed at compile time; identity is the variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
}

impl Platform {
    /// All platforms in registry order
    pub const ALL: [Platform; 2] = [Platform::Twitter, Platform::Facebook];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitter" | "x" => Ok(Platform::Twitter),
            "facebook" => Ok(Platform::Facebook),
            _ => Err(format!(
                "Unknown platform: '{}'. Valid options: twitter, facebook",
                s
            )),
        }
    }
}

/// Facebook publishes either a regular post or a reel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacebookKind {
    Post,
    Reel,
}

impl Default for FacebookKind {
    fn default() -> Self {
        FacebookKind::Post
    }
}

impl std::fmt::Display for FacebookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacebookKind::Post => write!(f, "Post"),
            FacebookKind::Reel => write!(f, "Reel"),
        }
    }
}

/// Platform-specific publishing option carried by a scheduled record.
///
/// Only platforms that define an option contribute a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform", content = "kind", rename_all = "lowercase")]
pub enum PlatformOption {
    Facebook(FacebookKind),
}

/// Broad media category derived from a MIME type prefix.
///
/// Anything that is not `image/*` is treated as video, matching the
/// permissive behavior of the composer: unsupported categories are
/// accepted and rendered best-effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Image,
    Video,
}

impl MediaCategory {
    /// Derive the category from a MIME type string by prefix match
    pub fn from_mime(mime: &str) -> Self {
        if mime.to_lowercase().starts_with("image/") {
            MediaCategory::Image
        } else {
            MediaCategory::Video
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaCategory::Image => write!(f, "image"),
            MediaCategory::Video => write!(f, "video"),
        }
    }
}

/// Value snapshot of an attached media file.
///
/// Carries no live preview resource; the record outlives the attachment
/// it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSnapshot {
    pub name: String,
    pub category: MediaCategory,
}

/// Status of a scheduled post.
///
/// This core does not model delivery, so `Scheduled` is the only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    Scheduled,
}

/// Immutable per-platform record produced by scheduling a draft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPost {
    pub id: String,
    pub platform: Platform,
    pub content: String,
    pub media: Option<MediaSnapshot>,
    pub option: Option<PlatformOption>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
}

impl ScheduledPost {
    pub fn new(
        platform: Platform,
        content: String,
        media: Option<MediaSnapshot>,
        option: Option<PlatformOption>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            platform,
            content,
            media,
            option,
            status: PostStatus::Scheduled,
            created_at,
        }
    }

    /// Human-readable creation date for display surfaces
    pub fn display_date(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert_eq!("twitter".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!("x".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!("Facebook".parse::<Platform>().unwrap(), Platform::Facebook);
        assert!("mastodon".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Twitter.to_string(), "twitter");
        assert_eq!(Platform::Facebook.to_string(), "facebook");
    }

    #[test]
    fn test_platform_serialization() {
        let json = serde_json::to_string(&Platform::Twitter).unwrap();
        assert_eq!(json, r#""twitter""#);

        let deserialized: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Platform::Twitter);
    }

    #[test]
    fn test_media_category_from_mime() {
        assert_eq!(MediaCategory::from_mime("image/png"), MediaCategory::Image);
        assert_eq!(MediaCategory::from_mime("IMAGE/JPEG"), MediaCategory::Image);
        assert_eq!(MediaCategory::from_mime("video/mp4"), MediaCategory::Video);
        // Unsupported categories fall through to video, not an error
        assert_eq!(
            MediaCategory::from_mime("application/pdf"),
            MediaCategory::Video
        );
        assert_eq!(MediaCategory::from_mime(""), MediaCategory::Video);
    }

    #[test]
    fn test_facebook_kind_default() {
        assert_eq!(FacebookKind::default(), FacebookKind::Post);
    }

    #[test]
    fn test_scheduled_post_new_unique_ids() {
        let now = Utc::now();
        let a = ScheduledPost::new(Platform::Twitter, "a".to_string(), None, None, now);
        let b = ScheduledPost::new(Platform::Twitter, "a".to_string(), None, None, now);

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_scheduled_post_status_is_constant() {
        let post = ScheduledPost::new(
            Platform::Facebook,
            "hello".to_string(),
            None,
            Some(PlatformOption::Facebook(FacebookKind::Reel)),
            Utc::now(),
        );
        assert_eq!(post.status, PostStatus::Scheduled);
        assert_eq!(post.option, Some(PlatformOption::Facebook(FacebookKind::Reel)));
    }

    #[test]
    fn test_scheduled_post_serialization() {
        let post = ScheduledPost::new(
            Platform::Twitter,
            "hello".to_string(),
            Some(MediaSnapshot {
                name: "sunset.png".to_string(),
                category: MediaCategory::Image,
            }),
            None,
            Utc::now(),
        );

        let json = serde_json::to_string(&post).unwrap();
        let back: ScheduledPost = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, post.id);
        assert_eq!(back.platform, post.platform);
        assert_eq!(back.content, post.content);
        assert_eq!(back.media, post.media);
    }

    #[test]
    fn test_display_date_format() {
        let post = ScheduledPost::new(Platform::Twitter, "x".to_string(), None, None, Utc::now());
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(post.display_date().len(), 19);
    }
}
