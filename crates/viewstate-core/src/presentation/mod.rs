mod dispatcher;
mod segmentation;
mod unique;

pub use dispatcher::PresentationIdDispatcher;
pub use segmentation::{get_segmentation_presentation_id, SegmentationPresentationId};
pub use unique::add_unique_suffix;

use crate::viewport::{ViewportDescriptor, ViewportRegistry};

/// One kind of presentation id.
///
/// Providers share a dispatch point: each is offered every requested kind
/// and returns `None` for kinds it does not handle.
pub trait PresentationIdProvider {
    /// The kind name this provider answers to.
    fn kind(&self) -> &str;

    /// Derive the id for `viewport`, or `None` if `kind` is not this
    /// provider's or the viewport has nothing to key on.
    fn resolve(
        &self,
        kind: &str,
        viewport: &ViewportDescriptor,
        registry: &ViewportRegistry,
        is_updating_same_viewport: bool,
    ) -> Option<String>;
}
