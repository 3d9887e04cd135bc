use serde::{Deserialize, Serialize};

use crate::viewport::{ErrorPayload, ImageId};

/// Events raised by a viewport element's image pipeline.
///
/// Image ids are optional because the pipeline does not guarantee them;
/// events without one are discarded by the overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewportEvent {
    /// The stack was scrolled; `image_id` is the image now being fetched.
    ScrollRequested {
        #[serde(default)]
        image_id: Option<ImageId>,
    },
    /// A new image is on screen.
    NewImageDisplayed,
    /// Fetching `image_id` failed.
    ImageLoadError {
        #[serde(default)]
        image_id: Option<ImageId>,
        error: ErrorPayload,
    },
}

impl ViewportEvent {
    pub fn scroll(image_id: impl Into<ImageId>) -> Self {
        Self::ScrollRequested {
            image_id: Some(image_id.into()),
        }
    }

    pub fn load_error(image_id: impl Into<ImageId>, error: impl Into<String>) -> Self {
        Self::ImageLoadError {
            image_id: Some(image_id.into()),
            error: ErrorPayload::new(error),
        }
    }
}

impl std::fmt::Display for ViewportEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScrollRequested { image_id: Some(id) } => write!(f, "scroll -> {id}"),
            Self::ScrollRequested { image_id: None } => write!(f, "scroll -> <missing>"),
            Self::NewImageDisplayed => write!(f, "new image displayed"),
            Self::ImageLoadError {
                image_id: Some(id),
                error,
            } => write!(f, "load error {id}: {error}"),
            Self::ImageLoadError {
                image_id: None,
                error,
            } => write!(f, "load error <missing>: {error}"),
        }
    }
}

/// Receives discrete overlay transitions.
///
/// Each method fires once per actual transition, never for repeated events
/// that leave the display state unchanged. All methods default to no-ops.
pub trait OverlayObserver {
    fn loading_started(&self) {}

    /// The overlay went back to idle, from either loading or an error.
    fn overlay_cleared(&self) {}

    fn load_failed(&self, _error: &ErrorPayload) {}
}

/// Observer used when the controller is mounted without one.
pub struct NoOpObserver;
impl OverlayObserver for NoOpObserver {}
