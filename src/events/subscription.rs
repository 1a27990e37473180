//! Subscriptions - owned cancellation handles for listener bindings.

use super::document::{DocumentInner, ListenerId};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// One listener binding. Releasing it (explicitly or by drop) unbinds the
/// listener exactly once; later releases are no-ops.
#[must_use = "dropping a Subscription unbinds its listener immediately"]
pub struct Subscription {
    id: ListenerId,
    live: Arc<AtomicBool>,
    document: Weak<Mutex<DocumentInner>>,
}

impl Subscription {
    pub(crate) fn new(
        id: ListenerId,
        live: Arc<AtomicBool>,
        document: Weak<Mutex<DocumentInner>>,
    ) -> Self {
        Self { id, live, document }
    }

    /// Returns true while the listener is still bound
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Unbind the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    fn release(&self) {
        if !self.live.swap(false, Ordering::AcqRel) {
            return;
        }
        // The document may already be gone; the flag alone keeps the
        // listener silent in that case.
        if let Some(document) = self.document.upgrade() {
            let callback = document.lock().remove(self.id);
            drop(callback);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("live", &self.is_live())
            .finish()
    }
}

/// Every binding created by one mount. Emptied by `release_all`.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    bindings: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.bindings.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Release every binding and empty the set. Returns how many were released.
    pub fn release_all(&mut self) -> usize {
        let released = self.bindings.len();
        for subscription in self.bindings.drain(..) {
            subscription.unsubscribe();
        }
        released
    }
}

impl Extend<Subscription> for SubscriptionSet {
    fn extend<I: IntoIterator<Item = Subscription>>(&mut self, iter: I) {
        self.bindings.extend(iter);
    }
}
