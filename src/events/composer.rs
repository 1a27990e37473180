//! Stream composition - unify both devices into start/move/end signals.
//!
//! Start is local: bound to one handle's grab region, so handles never react
//! to each other's grab. Move and end are global: bound to the whole document,
//! because a fast drag leaves the small handle hit area straight away.

use super::document::{Document, EventContext, HandleId, ListenScope, Listener};
use super::subscription::Subscription;
use crate::input::{normalize, EventKind, PointerEvent, RawEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Callback for a composed signal
pub type PointerHandler = Arc<dyn Fn(&PointerEvent, &mut EventContext) + Send + Sync>;

/// Builds device-unified listeners on a `Document`.
pub struct StreamComposer {
    document: Document,
    closed: Arc<AtomicBool>,
}

impl StreamComposer {
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Mouse down or touch start inside `handle`'s grab region.
    pub fn on_start(&self, handle: HandleId, handler: PointerHandler) -> [Subscription; 2] {
        let scope = ListenScope::Handle(handle);
        [
            self.bind(scope, EventKind::MouseDown, handler.clone()),
            self.bind(scope, EventKind::TouchStart, handler),
        ]
    }

    /// Mouse move or touch move anywhere on the document.
    pub fn on_move(&self, handler: PointerHandler) -> [Subscription; 2] {
        [
            self.bind(ListenScope::Document, EventKind::MouseMove, handler.clone()),
            self.bind(ListenScope::Document, EventKind::TouchMove, handler),
        ]
    }

    /// Mouse up or touch end anywhere on the document.
    pub fn on_end(&self, handler: PointerHandler) -> [Subscription; 2] {
        [
            self.bind(ListenScope::Document, EventKind::MouseUp, handler.clone()),
            self.bind(ListenScope::Document, EventKind::TouchEnd, handler),
        ]
    }

    /// Silence every signal built by this composer, including listeners an
    /// in-flight dispatch has already picked up.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn bind(&self, scope: ListenScope, kind: EventKind, handler: PointerHandler) -> Subscription {
        let closed = self.closed.clone();
        let listener: Listener = Arc::new(move |raw: &RawEvent, cx: &mut EventContext| {
            if closed.load(Ordering::Acquire) {
                return;
            }
            if let Some(event) = normalize(raw) {
                handler(&event, cx);
            }
        });
        self.document.listen(scope, kind, listener)
    }
}
