use std::collections::BTreeMap;

use crate::config::PresentationConfig;
use crate::viewport::{ViewportDescriptor, ViewportRegistry};

use super::segmentation::SegmentationPresentationId;
use super::PresentationIdProvider;

/// Offers each registered kind to every provider and collects the ids that
/// were produced.
pub struct PresentationIdDispatcher {
    providers: Vec<Box<dyn PresentationIdProvider>>,
}

impl PresentationIdDispatcher {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Dispatcher with the built-in providers.
    pub fn with_defaults(config: &PresentationConfig) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(Box::new(SegmentationPresentationId::new(config.clone())));
        dispatcher
    }

    pub fn register(&mut self, provider: Box<dyn PresentationIdProvider>) {
        self.providers.push(provider);
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    /// Resolve a single kind; the first provider that answers wins.
    pub fn resolve(
        &self,
        kind: &str,
        viewport: &ViewportDescriptor,
        registry: &ViewportRegistry,
        is_updating_same_viewport: bool,
    ) -> Option<String> {
        self.providers
            .iter()
            .find_map(|p| p.resolve(kind, viewport, registry, is_updating_same_viewport))
    }

    /// Every kind that produced an id for `viewport`.
    pub fn resolve_all(
        &self,
        viewport: &ViewportDescriptor,
        registry: &ViewportRegistry,
        is_updating_same_viewport: bool,
    ) -> BTreeMap<String, String> {
        self.kinds()
            .into_iter()
            .filter_map(|kind| {
                self.resolve(kind, viewport, registry, is_updating_same_viewport)
                    .map(|id| (kind.to_string(), id))
            })
            .collect()
    }
}

impl Default for PresentationIdDispatcher {
    fn default() -> Self {
        Self::with_defaults(&PresentationConfig::default())
    }
}
