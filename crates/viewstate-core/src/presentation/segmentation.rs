use tracing::trace;

use crate::config::PresentationConfig;
use crate::consts::SEGMENTATION_PRESENTATION_ID;
use crate::viewport::{ViewportDescriptor, ViewportRegistry};

use super::unique::add_unique_suffix;
use super::PresentationIdProvider;

/// Keys a viewport's segmentation presentation by its display sets.
///
/// The key is the viewport's display set UIDs joined in order, plus a
/// numeric suffix when another open viewport already holds that key.
#[derive(Clone, Debug, Default)]
pub struct SegmentationPresentationId {
    config: PresentationConfig,
}

impl SegmentationPresentationId {
    pub fn new(config: PresentationConfig) -> Self {
        Self { config }
    }
}

impl PresentationIdProvider for SegmentationPresentationId {
    fn kind(&self) -> &str {
        SEGMENTATION_PRESENTATION_ID
    }

    fn resolve(
        &self,
        kind: &str,
        viewport: &ViewportDescriptor,
        registry: &ViewportRegistry,
        is_updating_same_viewport: bool,
    ) -> Option<String> {
        if kind != SEGMENTATION_PRESENTATION_ID {
            return None;
        }
        if viewport.viewport_options.is_none() || viewport.display_set_instance_uids.is_empty() {
            return None;
        }

        let candidate = viewport
            .display_set_instance_uids
            .join(self.config.separator.as_str());
        let id = add_unique_suffix(
            candidate,
            kind,
            viewport,
            registry,
            is_updating_same_viewport,
            &self.config,
        );
        trace!(viewport = %viewport.viewport_id, id = %id, "Segmentation presentation id");
        Some(id)
    }
}

/// Resolve a segmentation presentation id with the default separator and
/// suffix base.
pub fn get_segmentation_presentation_id(
    kind: &str,
    viewport: &ViewportDescriptor,
    registry: &ViewportRegistry,
    is_updating_same_viewport: bool,
) -> Option<String> {
    SegmentationPresentationId::default().resolve(
        kind,
        viewport,
        registry,
        is_updating_same_viewport,
    )
}
