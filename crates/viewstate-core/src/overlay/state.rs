use tracing::debug;

use crate::config::OverlayConfig;
use crate::viewport::{ErrorPayload, ImageId};

/// What the overlay should display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Idle,
    Loading,
    Errored(ErrorPayload),
}

impl OverlayState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Errored(e) => Some(e),
            _ => None,
        }
    }

    /// Plain-text lines for the overlay. Empty when idle.
    pub fn describe(&self, texts: &OverlayConfig) -> Vec<String> {
        match self {
            Self::Idle => Vec::new(),
            Self::Loading => vec![texts.loading_text.clone()],
            Self::Errored(e) => vec![
                texts.error_title.clone(),
                texts.error_message.clone(),
                e.to_string(),
            ],
        }
    }
}

impl std::fmt::Display for OverlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Errored(e) => write!(f, "Errored({e})"),
        }
    }
}

/// Overlay state owned by a single viewport's controller.
///
/// Each transition returns `Some(new_state)` only when the displayed state
/// actually changed.
#[derive(Clone, Debug, Default)]
pub struct ViewportOverlayState {
    is_loading: bool,
    error: Option<ErrorPayload>,
    /// Most recently requested image; an error only counts if it matches.
    pending_image_id: Option<ImageId>,
}

impl ViewportOverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&ErrorPayload> {
        self.error.as_ref()
    }

    pub fn pending_image_id(&self) -> Option<&ImageId> {
        self.pending_image_id.as_ref()
    }

    pub fn display(&self) -> OverlayState {
        match (&self.error, self.is_loading) {
            (Some(e), _) => OverlayState::Errored(e.clone()),
            (None, true) => OverlayState::Loading,
            (None, false) => OverlayState::Idle,
        }
    }

    pub fn on_scroll_requested(&mut self, image_id: Option<ImageId>) -> Option<OverlayState> {
        let Some(image_id) = image_id else {
            debug!("Scroll event without image id discarded");
            return None;
        };
        self.pending_image_id = Some(image_id);

        if self.is_loading {
            return None;
        }

        self.is_loading = true;
        self.error = None;
        Some(OverlayState::Loading)
    }

    pub fn on_image_ready(&mut self) -> Option<OverlayState> {
        let before = self.display();
        self.is_loading = false;
        self.error = None;

        if before.is_idle() {
            None
        } else {
            Some(OverlayState::Idle)
        }
    }

    pub fn on_image_errored(
        &mut self,
        image_id: Option<&ImageId>,
        error: ErrorPayload,
    ) -> Option<OverlayState> {
        let matches = match (image_id, self.pending_image_id.as_ref()) {
            (Some(incoming), Some(pending)) => incoming == pending,
            _ => false,
        };
        if !matches {
            debug!(
                incoming = ?image_id,
                pending = ?self.pending_image_id,
                "Stale image load error discarded"
            );
            return None;
        }

        self.pending_image_id = None;
        self.is_loading = false;
        self.error = Some(error.clone());
        Some(OverlayState::Errored(error))
    }
}
