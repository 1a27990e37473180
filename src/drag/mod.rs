//! Drag sessions for every mounted handle.
//!
//! Controllers live in one arena indexed by slot. The shared document-wide
//! move and end listeners walk the whole arena; each controller decides for
//! itself whether it is active, so N handles cost one listener pair.
//!
//! The host must not hold a target's lock while dispatching input: the arena
//! lock is taken first and target locks inside it. Targets are written with
//! the arena lock held, so `HeightTarget::set_height` must not dispatch.

mod controller;
mod state;

pub use controller::{resize_height, DragController};
pub use state::{DragSession, DragState};

use crate::events::HandleId;
use crate::input::PointerEvent;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared arena of controllers. Clones refer to the same arena.
#[derive(Debug, Clone, Default)]
pub struct SessionArena {
    slots: Arc<Mutex<Vec<DragController>>>,
}

impl SessionArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a controller and return its slot.
    pub fn insert(&self, controller: DragController) -> usize {
        let mut slots = self.slots.lock();
        slots.push(controller);
        slots.len() - 1
    }

    /// Start event for the controller in `slot`.
    pub fn begin(&self, slot: usize, event: &PointerEvent) -> bool {
        self.slots
            .lock()
            .get_mut(slot)
            .is_some_and(|controller| controller.begin(event))
    }

    /// Move event for every controller. Returns how many targets were resized.
    pub fn update_all(&self, event: &PointerEvent) -> usize {
        self.slots
            .lock()
            .iter_mut()
            .filter_map(|controller| controller.update(event))
            .count()
    }

    /// End event for every controller. Returns how many sessions ended.
    pub fn finish_all(&self) -> usize {
        self.slots
            .lock()
            .iter_mut()
            .map(|controller| controller.finish())
            .filter(|ended| *ended)
            .count()
    }

    /// Force every active session back to Idle. Returns how many were cancelled.
    pub fn cancel_all(&self) -> usize {
        self.slots
            .lock()
            .iter_mut()
            .map(|controller| controller.cancel())
            .filter(|cancelled| *cancelled)
            .count()
    }

    pub fn active_count(&self) -> usize {
        self.slots
            .lock()
            .iter()
            .filter(|controller| controller.is_dragging())
            .count()
    }

    pub fn is_dragging(&self, handle: HandleId) -> bool {
        self.slots
            .lock()
            .iter()
            .any(|controller| controller.handle() == handle && controller.is_dragging())
    }

    /// Handles with a controller, in mount order
    pub fn handles(&self) -> Vec<HandleId> {
        self.slots.lock().iter().map(DragController::handle).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}
