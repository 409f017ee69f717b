//! Scheduling fan-out
//!
//! Turns one validated draft into one immutable [`ScheduledPost`] per
//! selected platform. Validation happens in full before any record is
//! constructed, so a failing schedule call leaves everything untouched.

use chrono::Utc;

use super::draft::Draft;
use crate::error::{Result, ValidationError};
use crate::types::{Platform, PlatformOption, ScheduledPost};

/// Validate a draft for scheduling; first failure wins.
///
/// Order: content (text or media) before platform selection.
pub fn validate(draft: &Draft) -> Result<()> {
    if !draft.has_content() {
        return Err(ValidationError::EmptyContent.into());
    }
    if draft.selected_platforms().is_empty() {
        return Err(ValidationError::NoPlatformSelected.into());
    }
    Ok(())
}

/// Fan a validated draft out into one record per selected platform.
///
/// Records share the same content and media snapshot by value and carry
/// one batch timestamp; order follows selection order. The snapshot is
/// taken without disturbing the live attachment; the caller commits the
/// batch to history and resets the draft, which releases the preview
/// resource.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the draft has no content and no
/// media, or no selected platform; no records are produced in that case.
pub fn fan_out(draft: &Draft) -> Result<Vec<ScheduledPost>> {
    validate(draft)?;

    let created_at = Utc::now();
    let content = draft.text().to_string();
    let media = draft.media().map(|m| m.snapshot());

    let batch = draft
        .selected_platforms()
        .iter()
        .map(|platform| {
            ScheduledPost::new(
                *platform,
                content.clone(),
                media.clone(),
                option_for(draft, *platform),
                created_at,
            )
        })
        .collect();

    Ok(batch)
}

/// The option snapshot for a platform, if that platform defines one
fn option_for(draft: &Draft, platform: Platform) -> Option<PlatformOption> {
    match platform {
        Platform::Facebook => Some(PlatformOption::Facebook(draft.facebook_kind())),
        Platform::Twitter => None,
    }
}
