mod controller;
mod element;
mod state;
mod types;

pub use controller::LoadingOverlayController;
pub use element::{EventSubscription, ImageEventSource, SubscriptionId, ViewportElement};
pub use state::{OverlayState, ViewportOverlayState};
pub use types::{NoOpObserver, OverlayObserver, ViewportEvent};
