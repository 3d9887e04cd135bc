mod common;

use std::sync::Arc;

use common::RecordingObserver;
use serde::Deserialize;
use viewstate_core::overlay::{
    LoadingOverlayController, OverlayState, ViewportElement, ViewportEvent, ViewportOverlayState,
};
use viewstate_core::viewport::{ErrorPayload, ImageId};

fn id(s: &str) -> Option<ImageId> {
    Some(ImageId::new(s))
}

#[test]
fn test_initial_state_is_idle() {
    let state = ViewportOverlayState::new();
    assert_eq!(state.display(), OverlayState::Idle);
    assert!(state.pending_image_id().is_none());
}

#[test]
fn test_repeated_scroll_stays_loading_and_tracks_latest() {
    let mut state = ViewportOverlayState::new();
    assert_eq!(state.on_scroll_requested(id("a")), Some(OverlayState::Loading));
    assert_eq!(state.on_scroll_requested(id("b")), None);
    assert_eq!(state.on_scroll_requested(id("c")), None);

    assert_eq!(state.display(), OverlayState::Loading);
    assert_eq!(state.pending_image_id(), Some(&ImageId::new("c")));
}

#[test]
fn test_stale_error_is_discarded() {
    let mut state = ViewportOverlayState::new();
    state.on_scroll_requested(id("A"));
    state.on_scroll_requested(id("B"));

    let t = state.on_image_errored(Some(&ImageId::new("A")), ErrorPayload::new("e"));
    assert_eq!(t, None);
    assert_eq!(state.display(), OverlayState::Loading);
    assert_eq!(state.pending_image_id(), Some(&ImageId::new("B")));

    let t = state.on_image_errored(Some(&ImageId::new("B")), ErrorPayload::new("e2"));
    assert_eq!(t, Some(OverlayState::Errored(ErrorPayload::new("e2"))));
    assert_eq!(state.display(), OverlayState::Errored(ErrorPayload::new("e2")));
    assert!(state.pending_image_id().is_none());
    assert!(!state.is_loading());
}

#[test]
fn test_second_error_for_same_image_is_ignored() {
    let mut state = ViewportOverlayState::new();
    state.on_scroll_requested(id("A"));
    state.on_image_errored(Some(&ImageId::new("A")), ErrorPayload::new("first"));

    let t = state.on_image_errored(Some(&ImageId::new("A")), ErrorPayload::new("second"));
    assert_eq!(t, None);
    assert_eq!(state.error(), Some(&ErrorPayload::new("first")));
}

#[test]
fn test_ready_clears_error() {
    let mut state = ViewportOverlayState::new();
    state.on_scroll_requested(id("A"));
    state.on_image_errored(Some(&ImageId::new("A")), ErrorPayload::new("e"));

    assert_eq!(state.on_image_ready(), Some(OverlayState::Idle));
    assert_eq!(state.display(), OverlayState::Idle);
    assert!(state.error().is_none());
}

#[test]
fn test_ready_keeps_latest_request_pending() {
    let mut state = ViewportOverlayState::new();
    state.on_scroll_requested(id("A"));
    state.on_scroll_requested(id("B"));

    // A's image lands while B is still in flight.
    assert_eq!(state.on_image_ready(), Some(OverlayState::Idle));
    assert_eq!(state.pending_image_id(), Some(&ImageId::new("B")));

    let t = state.on_image_errored(Some(&ImageId::new("B")), ErrorPayload::new("404"));
    assert_eq!(t, Some(OverlayState::Errored(ErrorPayload::new("404"))));
    assert_eq!(state.display(), OverlayState::Errored(ErrorPayload::new("404")));
}

#[test]
fn test_error_after_ready_surfaces_through_controller() {
    let element = Arc::new(ViewportElement::new("vp-1"));
    let mut ctrl = LoadingOverlayController::mount(element.clone(), "data-1");

    element.emit(ViewportEvent::scroll("A"));
    element.emit(ViewportEvent::scroll("B"));
    element.emit(ViewportEvent::NewImageDisplayed);
    element.emit(ViewportEvent::load_error("B", "404"));

    assert_eq!(
        ctrl.poll_events(),
        vec![
            OverlayState::Loading,
            OverlayState::Idle,
            OverlayState::Errored(ErrorPayload::new("404")),
        ]
    );
    assert_eq!(ctrl.state(), OverlayState::Errored(ErrorPayload::new("404")));
}

#[test]
fn test_missing_image_ids_are_discarded() {
    let mut state = ViewportOverlayState::new();
    assert_eq!(state.on_scroll_requested(None), None);
    assert_eq!(state.display(), OverlayState::Idle);

    state.on_scroll_requested(id("A"));
    assert_eq!(state.on_image_errored(None, ErrorPayload::new("e")), None);
    assert_eq!(state.display(), OverlayState::Loading);
}

#[test]
fn test_error_without_request_is_discarded() {
    let mut state = ViewportOverlayState::new();
    let t = state.on_image_errored(Some(&ImageId::new("A")), ErrorPayload::new("e"));
    assert_eq!(t, None);
    assert_eq!(state.display(), OverlayState::Idle);
}

#[test]
fn test_controller_handle_notifies_observer_once_per_transition() {
    let element = Arc::new(ViewportElement::new("vp-1"));
    let mut ctrl =
        LoadingOverlayController::with_observer(element, "data-1", RecordingObserver::default());

    ctrl.handle(ViewportEvent::scroll("a"));
    ctrl.handle(ViewportEvent::scroll("b"));
    ctrl.handle(ViewportEvent::load_error("a", "stale"));
    ctrl.handle(ViewportEvent::load_error("b", "404"));
    ctrl.handle(ViewportEvent::NewImageDisplayed);
    ctrl.handle(ViewportEvent::NewImageDisplayed);

    assert_eq!(
        ctrl.observer().calls(),
        vec!["started", "failed:404", "cleared"]
    );
    assert_eq!(ctrl.state(), OverlayState::Idle);
}

#[test]
fn test_poll_events_applies_in_order() {
    let element = Arc::new(ViewportElement::new("vp-1"));
    let mut ctrl = LoadingOverlayController::mount(element.clone(), "data-1");

    element.emit(ViewportEvent::scroll("A"));
    element.emit(ViewportEvent::scroll("B"));
    element.emit(ViewportEvent::load_error("A", "stale"));
    assert_eq!(ctrl.poll_events(), vec![OverlayState::Loading]);
    assert_eq!(ctrl.state(), OverlayState::Loading);

    element.emit(ViewportEvent::load_error("B", "e2"));
    element.emit(ViewportEvent::NewImageDisplayed);
    assert_eq!(
        ctrl.poll_events(),
        vec![
            OverlayState::Errored(ErrorPayload::new("e2")),
            OverlayState::Idle,
        ]
    );
    assert!(ctrl.poll_events().is_empty());
}

#[derive(Deserialize)]
struct EventLog {
    events: Vec<ViewportEvent>,
}

#[test]
fn test_event_log_parses_all_kinds() {
    let log: EventLog = toml::from_str(
        r#"
[[events]]
kind = "scroll_requested"
image_id = "img-1"

[[events]]
kind = "scroll_requested"

[[events]]
kind = "new_image_displayed"

[[events]]
kind = "image_load_error"
image_id = "img-1"
error = "404"

[[events]]
kind = "image_load_error"
error = "no id"
"#,
    )
    .unwrap();

    assert_eq!(
        log.events,
        vec![
            ViewportEvent::scroll("img-1"),
            ViewportEvent::ScrollRequested { image_id: None },
            ViewportEvent::NewImageDisplayed,
            ViewportEvent::load_error("img-1", "404"),
            ViewportEvent::ImageLoadError {
                image_id: None,
                error: ErrorPayload::new("no id"),
            },
        ]
    );
}
