//! Raw input occurrences as the host delivers them.
//!
//! These mirror the shape of browser mouse and touch events closely enough
//! that a host can forward them field for field. They are serializable so a
//! recorded gesture can be replayed against the engine.

use serde::{Deserialize, Serialize};

/// Mouse button phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseKind {
    Down,
    Move,
    Up,
}

/// Touch phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchKind {
    Start,
    Move,
    End,
}

/// A single contact on a touch surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    #[serde(default)]
    pub identifier: i64,
    pub client_y: f32,
}

impl TouchPoint {
    pub fn new(identifier: i64, client_y: f32) -> Self {
        Self {
            identifier,
            client_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseInput {
    pub kind: MouseKind,
    pub client_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchInput {
    pub kind: TouchKind,
    /// Contacts still on the surface
    #[serde(default)]
    pub touches: Vec<TouchPoint>,
    /// Contacts that changed in this occurrence (the lifted finger on an end)
    #[serde(default)]
    pub changed_touches: Vec<TouchPoint>,
}

/// Raw input from either a pointing device or a touch surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "device", rename_all = "snake_case")]
pub enum RawEvent {
    Mouse(MouseInput),
    Touch(TouchInput),
}

/// Listener key: which raw occurrence a binding reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl RawEvent {
    pub fn mouse_down(client_y: f32) -> Self {
        Self::Mouse(MouseInput {
            kind: MouseKind::Down,
            client_y,
        })
    }

    pub fn mouse_move(client_y: f32) -> Self {
        Self::Mouse(MouseInput {
            kind: MouseKind::Move,
            client_y,
        })
    }

    pub fn mouse_up(client_y: f32) -> Self {
        Self::Mouse(MouseInput {
            kind: MouseKind::Up,
            client_y,
        })
    }

    /// Single-finger touch occurrence. On an end the finger is reported in
    /// `changed_touches` only, as browsers do.
    pub fn touch(kind: TouchKind, client_y: f32) -> Self {
        let point = TouchPoint::new(0, client_y);
        let (touches, changed_touches) = match kind {
            TouchKind::End => (Vec::new(), vec![point]),
            TouchKind::Start | TouchKind::Move => (vec![point], vec![point]),
        };
        Self::Touch(TouchInput {
            kind,
            touches,
            changed_touches,
        })
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Mouse(m) => match m.kind {
                MouseKind::Down => EventKind::MouseDown,
                MouseKind::Move => EventKind::MouseMove,
                MouseKind::Up => EventKind::MouseUp,
            },
            Self::Touch(t) => match t.kind {
                TouchKind::Start => EventKind::TouchStart,
                TouchKind::Move => EventKind::TouchMove,
                TouchKind::End => EventKind::TouchEnd,
            },
        }
    }
}
