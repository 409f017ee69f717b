//! The in-progress post being composed
//!
//! A single mutable draft: text, at most one media attachment, the set of
//! selected platforms in selection order, and per-platform options. The
//! draft itself does not know about connection state; the session enforces
//! the selected-implies-connected invariant at the toggle points.

use crate::media::{MediaAttachment, MediaAttachmentManager, MediaFile};
use crate::types::{FacebookKind, Platform};

#[derive(Debug, Default)]
pub struct Draft {
    text: String,
    media: MediaAttachmentManager,
    selected: Vec<Platform>,
    facebook_kind: FacebookKind,
}

impl Draft {
    /// A fresh, empty draft
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the draft text entirely
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Character count of the current text (characters, not bytes)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Does the draft carry schedulable content (text or media)?
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty() || self.media.is_attached()
    }

    pub fn media(&self) -> Option<&MediaAttachment> {
        self.media.current()
    }

    /// Attach a media file, displacing any previous attachment
    pub fn attach_media(&mut self, file: MediaFile) -> &MediaAttachment {
        self.media.attach(file)
    }

    /// Remove the current attachment; no-op if none exists
    pub fn remove_media(&mut self) {
        self.media.remove();
    }

    /// Selected platforms in selection order
    pub fn selected_platforms(&self) -> &[Platform] {
        &self.selected
    }

    pub fn is_selected(&self, platform: Platform) -> bool {
        self.selected.contains(&platform)
    }

    /// Toggle a platform in the selection, preserving selection order for
    /// the remaining entries; returns whether it is now selected
    pub(crate) fn toggle_selected(&mut self, platform: Platform) -> bool {
        if let Some(pos) = self.selected.iter().position(|p| *p == platform) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(platform);
            true
        }
    }

    /// Drop a platform from the selection if present
    pub(crate) fn deselect(&mut self, platform: Platform) {
        self.selected.retain(|p| *p != platform);
    }

    pub fn facebook_kind(&self) -> FacebookKind {
        self.facebook_kind
    }

    pub fn set_facebook_kind(&mut self, kind: FacebookKind) {
        self.facebook_kind = kind;
    }

    /// Reset to the initial empty state, releasing any media resource
    pub(crate) fn reset(&mut self) {
        self.text.clear();
        self.media.remove();
        self.selected.clear();
        self.facebook_kind = FacebookKind::default();
    }
}
