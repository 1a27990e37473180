//! Drag state machine - per-handle session state.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging      (start on this handle)
//! Dragging -> Dragging  (move anywhere on the document)
//! Dragging -> Idle      (end anywhere on the document, or teardown)
//! ```
//!
//! A start while already dragging leaves the captured session untouched.

/// Values captured when a drag begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer vertical position at the start event
    pub start_vertical_position: f32,
    /// Target height read at the start event
    pub start_height: f32,
}

/// Session state for one handle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Gesture in progress, with the values captured at its start
    Dragging(DragSession),
}

impl DragState {
    /// Returns true if a session is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Get the active session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Enter Dragging. Returns false (and keeps the existing session) if
    /// already dragging.
    pub fn start(&mut self, start_vertical_position: f32, start_height: f32) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = Self::Dragging(DragSession {
            start_vertical_position,
            start_height,
        });
        true
    }

    /// Return to Idle, discarding the session. Returns true if a session was
    /// discarded.
    pub fn reset(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }
}
