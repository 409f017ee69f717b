//! Media attachment lifecycle
//!
//! The composer holds at most one attached media file at a time. Each
//! attachment owns a revocable preview handle; replacing or removing the
//! attachment must release that handle exactly once. Release is guaranteed
//! by ownership (`Drop`), not by caller discipline.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::types::{MediaCategory, MediaSnapshot};

/// A user-picked file reference with its MIME type string
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub name: String,
    pub mime_type: String,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// An ownership-bound, revocable display resource for an attachment.
///
/// Dropping the handle revokes it. The release counter is observable
/// through a [`PreviewProbe`] so tests can assert no leak and no double
/// release.
#[derive(Debug)]
pub struct PreviewHandle {
    releases: Arc<AtomicUsize>,
    released: bool,
}

impl PreviewHandle {
    pub fn new() -> Self {
        Self {
            releases: Arc::new(AtomicUsize::new(0)),
            released: false,
        }
    }

    /// Observer for this handle's release count
    pub fn probe(&self) -> PreviewProbe {
        PreviewProbe {
            releases: Arc::clone(&self.releases),
        }
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl Default for PreviewHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Observer handle that outlives the preview it watches
#[derive(Debug, Clone)]
pub struct PreviewProbe {
    releases: Arc<AtomicUsize>,
}

impl PreviewProbe {
    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    pub fn is_released(&self) -> bool {
        self.release_count() > 0
    }
}

/// One live media attachment: the file reference, its derived category,
/// and the preview resource bound to it
#[derive(Debug)]
pub struct MediaAttachment {
    file: MediaFile,
    category: MediaCategory,
    preview: PreviewHandle,
}

impl MediaAttachment {
    pub fn name(&self) -> &str {
        &self.file.name
    }

    pub fn mime_type(&self) -> &str {
        &self.file.mime_type
    }

    pub fn category(&self) -> MediaCategory {
        self.category
    }

    pub fn preview(&self) -> &PreviewHandle {
        &self.preview
    }

    /// Value snapshot without the live preview resource
    pub fn snapshot(&self) -> MediaSnapshot {
        MediaSnapshot {
            name: self.file.name.clone(),
            category: self.category,
        }
    }
}

/// Owns the single attachment slot of the composer.
///
/// `attach` replaces in place; the displaced preview handle is released
/// before the new attachment is observable. `remove` is a no-op when
/// nothing is attached.
#[derive(Debug, Default)]
pub struct MediaAttachmentManager {
    current: Option<MediaAttachment>,
}

impl MediaAttachmentManager {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Attach a file, displacing any existing attachment.
    ///
    /// The category is derived from the MIME prefix, not validated;
    /// unknown types are accepted.
    pub fn attach(&mut self, file: MediaFile) -> &MediaAttachment {
        // Dropping the old attachment releases its preview handle before
        // the replacement is stored.
        self.current = None;

        let category = MediaCategory::from_mime(&file.mime_type);
        self.current = Some(MediaAttachment {
            file,
            category,
            preview: PreviewHandle::new(),
        });
        self.current.as_ref().expect("attachment just stored")
    }

    /// Release the current attachment, if any
    pub fn remove(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&MediaAttachment> {
        self.current.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.current.is_some()
    }
}
