#![allow(dead_code)]

use std::cell::RefCell;

use viewstate_core::consts::SEGMENTATION_PRESENTATION_ID;
use viewstate_core::overlay::OverlayObserver;
use viewstate_core::viewport::{ErrorPayload, ViewportDescriptor, ViewportRegistry};

/// Viewport with the given display sets and no assigned presentation ids.
pub fn viewport(id: &str, display_sets: &[&str]) -> ViewportDescriptor {
    ViewportDescriptor::new(id, display_sets.iter().copied())
}

/// Viewport already holding a segmentation presentation id.
pub fn assigned_viewport(
    id: &str,
    display_sets: &[&str],
    presentation_id: &str,
) -> ViewportDescriptor {
    viewport(id, display_sets).with_presentation_id(SEGMENTATION_PRESENTATION_ID, presentation_id)
}

pub fn registry(viewports: Vec<ViewportDescriptor>) -> ViewportRegistry {
    ViewportRegistry::from_viewports(viewports)
}

/// Observer that records each callback as a short string.
#[derive(Default)]
pub struct RecordingObserver {
    pub calls: RefCell<Vec<String>>,
}

impl RecordingObserver {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl OverlayObserver for RecordingObserver {
    fn loading_started(&self) {
        self.calls.borrow_mut().push("started".into());
    }

    fn overlay_cleared(&self) {
        self.calls.borrow_mut().push("cleared".into());
    }

    fn load_failed(&self, error: &ErrorPayload) {
        self.calls.borrow_mut().push(format!("failed:{error}"));
    }
}
