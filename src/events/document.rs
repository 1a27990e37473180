//! Document event hub - where the host delivers raw input.
//!
//! Listeners are registered against a scope (one handle's grab region, or the
//! whole document) and an `EventKind`. An occurrence dispatched at a handle
//! reaches that handle's listeners and then bubbles to document listeners; an
//! occurrence dispatched at the document reaches document listeners only.
//!
//! Dispatch snapshots the matching listeners and runs them with the hub lock
//! released, so a listener may release subscriptions or dispatch again.

use super::subscription::Subscription;
use crate::input::{EventKind, RawEvent};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Identity of a handle's grab region, unique within one `Document`.
///
/// Issued by [`Document::handle`], so views mounted on the same document never
/// share a start scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleId(pub usize);

impl std::fmt::Display for HandleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "handle#{}", self.0)
    }
}

/// Where an occurrence happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOrigin {
    /// Inside a handle's grab region
    Handle(HandleId),
    /// Anywhere else on the page
    Document,
}

/// What a listener is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenScope {
    Handle(HandleId),
    Document,
}

impl ListenScope {
    fn receives(&self, origin: EventOrigin) -> bool {
        match (self, origin) {
            (Self::Document, _) => true,
            (Self::Handle(bound), EventOrigin::Handle(hit)) => *bound == hit,
            (Self::Handle(_), EventOrigin::Document) => false,
        }
    }
}

/// Per-dispatch context handed to every listener.
#[derive(Debug, Default)]
pub struct EventContext {
    default_prevented: bool,
}

impl EventContext {
    /// Ask the host to skip its default action (page scroll on touch move)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What the host learns after a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DispatchOutcome {
    /// Number of listeners that ran
    pub delivered: usize,
    pub default_prevented: bool,
}

pub type Listener = Arc<dyn Fn(&RawEvent, &mut EventContext) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListenerId(u64);

struct ListenerEntry {
    id: ListenerId,
    scope: ListenScope,
    kind: EventKind,
    live: Arc<AtomicBool>,
    callback: Listener,
}

#[derive(Default)]
pub(crate) struct DocumentInner {
    next_id: u64,
    next_handle: usize,
    listeners: Vec<ListenerEntry>,
}

impl DocumentInner {
    /// Unbind `id`, handing its callback back so the caller can drop it
    /// after releasing the hub lock.
    pub(crate) fn remove(&mut self, id: ListenerId) -> Option<Listener> {
        let index = self.listeners.iter().position(|entry| entry.id == id)?;
        Some(self.listeners.remove(index).callback)
    }
}

/// The event surface of one page. Cheap to clone; clones share listeners.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<Mutex<DocumentInner>>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a handle id no other handle on this document carries.
    pub fn handle(&self) -> HandleId {
        let mut inner = self.inner.lock();
        let handle = HandleId(inner.next_handle);
        inner.next_handle += 1;
        handle
    }

    /// Register a listener. It stays bound until the returned subscription
    /// is released or dropped.
    pub fn listen(&self, scope: ListenScope, kind: EventKind, callback: Listener) -> Subscription {
        let live = Arc::new(AtomicBool::new(true));
        let mut inner = self.inner.lock();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push(ListenerEntry {
            id,
            scope,
            kind,
            live: live.clone(),
            callback,
        });
        Subscription::new(id, live, Arc::downgrade(&self.inner))
    }

    /// Deliver one raw occurrence to every matching live listener, in
    /// registration order.
    pub fn dispatch(&self, origin: EventOrigin, event: &RawEvent) -> DispatchOutcome {
        let kind = event.kind();
        let matching: Vec<(Arc<AtomicBool>, Listener)> = {
            let inner = self.inner.lock();
            inner
                .listeners
                .iter()
                .filter(|entry| entry.kind == kind && entry.scope.receives(origin))
                .map(|entry| (entry.live.clone(), entry.callback.clone()))
                .collect()
        };

        let mut cx = EventContext::default();
        let mut delivered = 0;
        for (live, callback) in matching {
            // Released by an earlier listener in this same dispatch
            if !live.load(Ordering::Acquire) {
                continue;
            }
            callback(event, &mut cx);
            delivered += 1;
        }

        DispatchOutcome {
            delivered,
            default_prevented: cx.default_prevented(),
        }
    }

    /// Number of bound listeners
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}
