use std::sync::Arc;

use tracing::{debug, info};

use super::element::{EventSubscription, ImageEventSource};
use super::state::{OverlayState, ViewportOverlayState};
use super::types::{NoOpObserver, OverlayObserver, ViewportEvent};

/// Loading/error overlay for one mounted viewport.
///
/// Owns its subscription on the viewport element and the overlay state.
/// Events are applied serially on the caller's thread by [`poll_events`]
/// (or directly via [`handle`]), in the order the element raised them.
///
/// [`poll_events`]: Self::poll_events
/// [`handle`]: Self::handle
pub struct LoadingOverlayController<O: OverlayObserver = NoOpObserver> {
    viewport_data: String,
    subscription: Option<EventSubscription>,
    state: ViewportOverlayState,
    observer: O,
}

impl LoadingOverlayController<NoOpObserver> {
    pub fn mount(element: Arc<dyn ImageEventSource>, viewport_data: impl Into<String>) -> Self {
        Self::with_observer(element, viewport_data, NoOpObserver)
    }
}

impl<O: OverlayObserver> LoadingOverlayController<O> {
    pub fn with_observer(
        element: Arc<dyn ImageEventSource>,
        viewport_data: impl Into<String>,
        observer: O,
    ) -> Self {
        let viewport_data = viewport_data.into();
        let subscription = EventSubscription::acquire(element);
        info!(viewport = %viewport_data, id = subscription.id(), "Overlay mounted");
        Self {
            viewport_data,
            subscription: Some(subscription),
            state: ViewportOverlayState::new(),
            observer,
        }
    }

    /// Re-establish the subscription if the (element, viewport data) pair
    /// changed. The previous subscription is released before the new one is
    /// acquired, and the overlay restarts idle.
    ///
    /// Returns true if a new subscription was made.
    pub fn rebind(
        &mut self,
        element: Arc<dyn ImageEventSource>,
        viewport_data: impl Into<String>,
    ) -> bool {
        let viewport_data = viewport_data.into();
        let same_element = self
            .subscription
            .as_ref()
            .is_some_and(|sub| sub.is_on(&element));
        if same_element && self.viewport_data == viewport_data {
            return false;
        }

        // Release first so no handler stays bound to the stale viewport.
        self.subscription = None;
        self.state = ViewportOverlayState::new();

        let subscription = EventSubscription::acquire(element);
        debug!(
            from = %self.viewport_data,
            to = %viewport_data,
            id = subscription.id(),
            "Overlay rebound"
        );
        self.viewport_data = viewport_data;
        self.subscription = Some(subscription);
        true
    }

    /// Release the subscription and discard the overlay state.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            info!(viewport = %self.viewport_data, "Overlay unmounted");
        }
        self.state = ViewportOverlayState::new();
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn viewport_data(&self) -> &str {
        &self.viewport_data
    }

    pub fn state(&self) -> OverlayState {
        self.state.display()
    }

    pub fn overlay(&self) -> &ViewportOverlayState {
        &self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Apply a single event. Returns the new display state if it changed.
    pub fn handle(&mut self, event: ViewportEvent) -> Option<OverlayState> {
        let transition = match event {
            ViewportEvent::ScrollRequested { image_id } => self.state.on_scroll_requested(image_id),
            ViewportEvent::NewImageDisplayed => self.state.on_image_ready(),
            ViewportEvent::ImageLoadError { image_id, error } => {
                self.state.on_image_errored(image_id.as_ref(), error)
            }
        };

        match &transition {
            Some(OverlayState::Loading) => self.observer.loading_started(),
            Some(OverlayState::Idle) => self.observer.overlay_cleared(),
            Some(OverlayState::Errored(e)) => self.observer.load_failed(e),
            None => {}
        }
        transition
    }

    /// Drain every queued event from the element, returning the transitions
    /// in the order they happened.
    pub fn poll_events(&mut self) -> Vec<OverlayState> {
        let mut transitions = Vec::new();
        while let Some(event) = self.subscription.as_ref().and_then(|sub| sub.try_next()) {
            if let Some(t) = self.handle(event) {
                transitions.push(t);
            }
        }
        transitions
    }
}
