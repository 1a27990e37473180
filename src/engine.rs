//! Engine lifecycle - mount handle/target pairs, tear everything down once.
//!
//! Mount binds two local start listeners per handle and one shared pair each
//! for move and end, all recorded in the engine's `SubscriptionSet`.
//! Teardown closes the composed signals, cancels active sessions and releases
//! every binding. Dropping the engine tears it down.

use crate::config::ResizeConfig;
use crate::constants::MOVE_TICK_WARN_MS;
use crate::drag::{DragController, SessionArena};
use crate::events::{Document, EventContext, HandleId, StreamComposer, SubscriptionSet};
use crate::input::PointerEvent;
use crate::profile_scope;
use crate::target::TargetRef;
use std::sync::Arc;
use tracing::debug;

pub struct ResizeEngine {
    composer: StreamComposer,
    handles: Vec<HandleId>,
    sessions: SessionArena,
    subscriptions: SubscriptionSet,
    torn_down: bool,
}

impl ResizeEngine {
    /// Bind every resolved target to its handle.
    ///
    /// Every item gets a handle id issued by `document`, in order; look it up
    /// with [`ResizeEngine::handle`]. A `None` item is a handle whose target
    /// could not be resolved; it keeps its id but nothing is bound to it. The
    /// set is fixed here, and handles added to the page later are not picked up.
    pub fn mount<I>(document: &Document, targets: I, config: &ResizeConfig) -> Self
    where
        I: IntoIterator<Item = Option<TargetRef>>,
    {
        let composer = StreamComposer::new(document);
        let sessions = SessionArena::new();
        let mut subscriptions = SubscriptionSet::new();
        let mut handles = Vec::new();
        let mut skipped = 0usize;

        for target in targets {
            let handle = document.handle();
            handles.push(handle);
            let Some(target) = target else {
                debug!(%handle, "no target resolved, handle skipped");
                skipped += 1;
                continue;
            };

            let slot = sessions.insert(DragController::new(handle, target, config.min_height));
            let arena = sessions.clone();
            subscriptions.extend(composer.on_start(
                handle,
                Arc::new(move |event: &PointerEvent, _cx: &mut EventContext| {
                    arena.begin(slot, event);
                }),
            ));
        }

        // Shared by every handle; nothing to serve when no pair was bound.
        if !sessions.is_empty() {
            let arena = sessions.clone();
            let prevent_default = config.prevent_default_on_move;
            subscriptions.extend(composer.on_move(Arc::new(
                move |event: &PointerEvent, cx: &mut EventContext| {
                    profile_scope!("resize_tick", MOVE_TICK_WARN_MS, arena.active_count());
                    let resized = arena.update_all(event);
                    if resized > 0 && prevent_default {
                        cx.prevent_default();
                    }
                },
            )));

            let arena = sessions.clone();
            subscriptions.extend(composer.on_end(Arc::new(
                move |_event: &PointerEvent, _cx: &mut EventContext| {
                    arena.finish_all();
                },
            )));
        }

        debug!(
            bound = sessions.len(),
            skipped,
            bindings = subscriptions.len(),
            "resize engine mounted"
        );

        Self {
            composer,
            handles,
            sessions,
            subscriptions,
            torn_down: false,
        }
    }

    /// Cancel every active session and release every binding.
    ///
    /// Safe to call with nothing dragging, and any number of times; only the
    /// first call has an effect.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        self.composer.close();
        let cancelled = self.sessions.cancel_all();
        let released = self.subscriptions.release_all();
        debug!(cancelled, released, "resize engine torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Id issued to the `index`-th mounted item, bound or not
    pub fn handle(&self, index: usize) -> Option<HandleId> {
        self.handles.get(index).copied()
    }

    /// Handles that got a controller at mount, in mount order
    pub fn bound_handles(&self) -> Vec<HandleId> {
        self.sessions.handles()
    }

    /// Listener bindings currently held (zero after teardown)
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Handles currently dragging
    pub fn active_sessions(&self) -> usize {
        self.sessions.active_count()
    }

    pub fn is_dragging(&self, handle: HandleId) -> bool {
        self.sessions.is_dragging(handle)
    }
}

impl Drop for ResizeEngine {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for ResizeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeEngine")
            .field("bound", &self.sessions.len())
            .field("bindings", &self.subscriptions.len())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}
