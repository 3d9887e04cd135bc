use std::collections::BTreeMap;
use std::sync::mpsc;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use super::types::ViewportEvent;

pub type SubscriptionId = u64;

/// An addressable element that raises viewport image events.
///
/// Implementors deliver every event raised after `subscribe` to the given
/// sender until `unsubscribe` is called with the returned id.
pub trait ImageEventSource: Send + Sync {
    fn subscribe(&self, tx: mpsc::Sender<ViewportEvent>) -> SubscriptionId;

    /// Returns false if `id` was not subscribed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

#[derive(Default)]
struct Subscribers {
    next_id: SubscriptionId,
    senders: BTreeMap<SubscriptionId, mpsc::Sender<ViewportEvent>>,
}

/// In-process element that fans events out to its subscribers over channels.
#[derive(Default)]
pub struct ViewportElement {
    name: String,
    subscribers: Mutex<Subscribers>,
}

impl ViewportElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscribers: Mutex::new(Subscribers::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().senders.len()
    }

    /// Deliver `event` to every live subscriber. Returns the delivery count.
    pub fn emit(&self, event: ViewportEvent) -> usize {
        let mut subs = self.lock();
        // Receivers dropped without unsubscribing are pruned here.
        subs.senders.retain(|_, tx| tx.send(event.clone()).is_ok());
        subs.senders.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Subscribers> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ImageEventSource for ViewportElement {
    fn subscribe(&self, tx: mpsc::Sender<ViewportEvent>) -> SubscriptionId {
        let mut subs = self.lock();
        let id = subs.next_id;
        subs.next_id += 1;
        subs.senders.insert(id, tx);
        debug!(element = %self.name, id, "Subscribed");
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.lock().senders.remove(&id).is_some();
        debug!(element = %self.name, id, removed, "Unsubscribed");
        removed
    }
}

/// A live subscription on an element. Unsubscribes when dropped.
pub struct EventSubscription {
    source: Arc<dyn ImageEventSource>,
    id: SubscriptionId,
    rx: mpsc::Receiver<ViewportEvent>,
}

impl EventSubscription {
    pub fn acquire(source: Arc<dyn ImageEventSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        let id = source.subscribe(tx);
        Self { source, id, rx }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// True if this subscription is on `source` (pointer identity).
    pub fn is_on(&self, source: &Arc<dyn ImageEventSource>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.source), Arc::as_ptr(source))
    }

    /// Next queued event, if any, without blocking.
    pub fn try_next(&self) -> Option<ViewportEvent> {
        self.rx.try_recv().ok()
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        self.source.unsubscribe(self.id);
    }
}
