//! Drag session controller - turns pointer events into target heights.
//!
//! One controller per mounted handle. Start events arrive only from the
//! controller's own handle; move and end events arrive from the document and
//! are ignored unless this controller's session is active.

use super::state::DragState;
use crate::events::HandleId;
use crate::input::PointerEvent;
use crate::target::TargetRef;
use tracing::{debug, trace};

/// New height for a drag that started at `start_y` with `start_height` and is
/// now at `y`. Shrinking stops at `min_height`; growth is unbounded.
#[inline]
pub fn resize_height(start_height: f32, start_y: f32, y: f32, min_height: f32) -> f32 {
    (start_height + (y - start_y)).max(min_height)
}

pub struct DragController {
    handle: HandleId,
    target: TargetRef,
    state: DragState,
    min_height: f32,
}

impl DragController {
    pub fn new(handle: HandleId, target: TargetRef, min_height: f32) -> Self {
        Self {
            handle,
            target,
            state: DragState::Idle,
            min_height,
        }
    }

    pub fn handle(&self) -> HandleId {
        self.handle
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Idle -> Dragging. Reads the target height now. Returns false if a
    /// session was already active (it is left untouched).
    pub fn begin(&mut self, event: &PointerEvent) -> bool {
        if self.state.is_dragging() {
            trace!(handle = %self.handle, "start ignored, session already active");
            return false;
        }
        let start_height = self.target.lock().height();
        self.state.start(event.vertical_position, start_height);
        debug!(
            handle = %self.handle,
            device = ?event.device,
            start_y = event.vertical_position,
            start_height,
            "resize started"
        );
        true
    }

    /// Apply a move to the target. Returns the height written, or None when idle.
    pub fn update(&mut self, event: &PointerEvent) -> Option<f32> {
        let session = *self.state.session()?;
        let height = resize_height(
            session.start_height,
            session.start_vertical_position,
            event.vertical_position,
            self.min_height,
        );
        trace!(
            handle = %self.handle,
            y = event.vertical_position,
            raw = session.start_height + (event.vertical_position - session.start_vertical_position),
            height,
            "resize tick"
        );
        self.target.lock().set_height(height);
        Some(height)
    }

    /// Dragging -> Idle on an end event.
    pub fn finish(&mut self) -> bool {
        let ended = self.state.reset();
        if ended {
            debug!(handle = %self.handle, "resize stopped");
        }
        ended
    }

    /// Dragging -> Idle forced by teardown.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.state.reset();
        if cancelled {
            debug!(handle = %self.handle, "resize cancelled");
        }
        cancelled
    }
}

impl std::fmt::Debug for DragController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("handle", &self.handle)
            .field("state", &self.state)
            .field("min_height", &self.min_height)
            .finish()
    }
}
