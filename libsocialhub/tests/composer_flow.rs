//! End-to-end composition flow
//!
//! Exercises the full session lifecycle: connect platforms, edit or
//! generate a draft, attach media, and fan the draft out into per-platform
//! scheduled records.

use std::sync::Arc;
use std::time::Duration;

use libsocialhub::error::{GenerationError, SocialHubError, ValidationError};
use libsocialhub::generator::{GeneratorService, MockModel};
use libsocialhub::media::MediaFile;
use libsocialhub::service::Session;
use libsocialhub::types::{FacebookKind, MediaCategory, Platform, PlatformOption, PostStatus};

fn session() -> Session {
    Session::new(
        Arc::new(MockModel::success("generated post #ai")),
        Duration::from_secs(5),
    )
}

#[test]
fn hello_to_two_platforms() {
    let mut session = session();
    session.toggle_connection(Platform::Twitter);
    session.toggle_connection(Platform::Facebook);
    session.toggle_selection(Platform::Twitter);
    session.toggle_selection(Platform::Facebook);
    session.set_text("Hello");

    let batch = session.schedule().unwrap();

    assert_eq!(batch.len(), 2);
    assert!(batch.iter().all(|p| p.content == "Hello"));
    assert!(batch.iter().all(|p| p.status == PostStatus::Scheduled));

    // History holds the batch, newest first, in selection order
    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history.posts()[0].platform, Platform::Twitter);
    assert_eq!(history.posts()[1].platform, Platform::Facebook);

    // Draft cleared to its initial state
    assert_eq!(session.draft().text(), "");
    assert!(session.draft().selected_platforms().is_empty());
    assert!(session.draft().media().is_none());
}

#[test]
fn facebook_reel_option_snapshot() {
    let mut session = session();
    session.toggle_connection(Platform::Twitter);
    session.toggle_connection(Platform::Facebook);
    session.toggle_selection(Platform::Facebook);
    session.toggle_selection(Platform::Twitter);
    session.set_facebook_kind(FacebookKind::Reel);
    session.set_text("Watch this");

    let batch = session.schedule().unwrap();

    let facebook = batch.iter().find(|p| p.platform == Platform::Facebook).unwrap();
    let twitter = batch.iter().find(|p| p.platform == Platform::Twitter).unwrap();

    assert_eq!(
        facebook.option,
        Some(PlatformOption::Facebook(FacebookKind::Reel))
    );
    assert_eq!(twitter.option, None);

    // Option default is restored by the reset
    assert_eq!(session.draft().facebook_kind(), FacebookKind::Post);
}

#[test]
fn media_replacement_releases_previous_preview() {
    let mut session = session();

    session.attach_media(MediaFile::new("a.png", "image/png"));
    let probe_a = session.draft().media().unwrap().preview().probe();

    session.attach_media(MediaFile::new("b.mp4", "video/mp4"));
    assert_eq!(probe_a.release_count(), 1);

    let current = session.draft().media().unwrap();
    assert_eq!(current.name(), "b.mp4");
    assert_eq!(current.category(), MediaCategory::Video);
}

#[test]
fn scheduling_media_post_transfers_snapshot() {
    let mut session = session();
    session.toggle_connection(Platform::Twitter);
    session.toggle_selection(Platform::Twitter);
    session.attach_media(MediaFile::new("sunset.png", "image/png"));
    let probe = session.draft().media().unwrap().preview().probe();

    let batch = session.schedule().unwrap();

    let media = batch[0].media.as_ref().unwrap();
    assert_eq!(media.name, "sunset.png");
    assert_eq!(media.category, MediaCategory::Image);
    // Live preview released exactly once by the draft reset
    assert_eq!(probe.release_count(), 1);
}

#[test]
fn disconnect_while_selected_never_observable() {
    let mut session = session();
    session.toggle_connection(Platform::Twitter);
    session.toggle_connection(Platform::Facebook);
    session.toggle_selection(Platform::Twitter);
    session.toggle_selection(Platform::Facebook);

    session.toggle_connection(Platform::Facebook);

    assert_eq!(session.draft().selected_platforms(), &[Platform::Twitter]);

    session.set_text("Hello");
    let batch = session.schedule().unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].platform, Platform::Twitter);
}

#[test]
fn schedule_failures_leave_history_unchanged() {
    let mut session = session();

    // No content, no platform: content error wins
    let result = session.schedule();
    assert!(matches!(
        result,
        Err(SocialHubError::Validation(ValidationError::EmptyContent))
    ));

    session.set_text("Hello");
    let result = session.schedule();
    assert!(matches!(
        result,
        Err(SocialHubError::Validation(
            ValidationError::NoPlatformSelected
        ))
    ));

    assert!(session.history().is_empty());
    assert_eq!(session.draft().text(), "Hello");
}

#[tokio::test]
async fn generation_roundtrip_overwrites_draft() {
    let mut session = session();
    session.set_text("typed by hand");

    session.generate("rust releases").await.unwrap();
    assert_eq!(session.draft().text(), "generated post #ai");
}

#[tokio::test]
async fn generation_failure_preserves_draft() {
    let mut session = Session::new(
        Arc::new(MockModel::failure(GenerationError::MalformedResponse)),
        Duration::from_secs(5),
    );
    session.set_text("typed by hand");

    let result = session.generate("rust releases").await;
    assert!(matches!(
        result,
        Err(SocialHubError::Generation(
            GenerationError::MalformedResponse
        ))
    ));
    assert_eq!(session.draft().text(), "typed by hand");
}

#[tokio::test]
async fn busy_gate_allows_one_request_at_a_time() {
    let model = MockModel::with_delay("slow reply", Duration::from_millis(200));
    let calls = model.call_counter();
    let service = GeneratorService::new(Arc::new(model), Duration::from_secs(5));
    let racing = service.clone();

    let first = tokio::spawn(async move { racing.generate("topic").await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    let second = service.generate("other topic").await;
    assert!(matches!(
        second,
        Err(SocialHubError::Generation(GenerationError::Busy))
    ));

    assert_eq!(first.await.unwrap().unwrap(), "slow reply");
    assert_eq!(calls.count(), 1);

    // Gate cleared: a new request goes through
    assert_eq!(service.generate("topic").await.unwrap(), "slow reply");
    assert_eq!(calls.count(), 2);
}

#[test]
fn two_consecutive_schedules_prepend() {
    let mut session = session();
    session.toggle_connection(Platform::Twitter);

    session.toggle_selection(Platform::Twitter);
    session.set_text("first");
    session.schedule().unwrap();

    session.toggle_selection(Platform::Twitter);
    session.set_text("second");
    session.schedule().unwrap();

    let posts = session.history().posts();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].content, "second");
    assert_eq!(posts[1].content, "first");
    assert_ne!(posts[0].id, posts[1].id);
}
