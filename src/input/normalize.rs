//! Device normalization - one mapping from raw mouse/touch input to `PointerEvent`.

use super::raw::{MouseKind, RawEvent, TouchKind};
use serde::{Deserialize, Serialize};

/// Gesture phase, shared by both devices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Move,
    End,
}

/// Which device produced the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Mouse,
    Touch,
}

/// Device-agnostic input datum consumed by drag sessions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: Phase,
    pub vertical_position: f32,
    pub device: DeviceKind,
}

/// Convert raw input into a `PointerEvent`.
///
/// Touch input reads the first active contact. When the active list is empty
/// (the normal case for an end) the first changed contact is used instead.
/// A touch occurrence with no contact at all is dropped.
pub fn normalize(raw: &RawEvent) -> Option<PointerEvent> {
    match raw {
        RawEvent::Mouse(mouse) => Some(PointerEvent {
            phase: match mouse.kind {
                MouseKind::Down => Phase::Start,
                MouseKind::Move => Phase::Move,
                MouseKind::Up => Phase::End,
            },
            vertical_position: mouse.client_y,
            device: DeviceKind::Mouse,
        }),
        RawEvent::Touch(touch) => {
            let point = touch
                .touches
                .first()
                .or_else(|| touch.changed_touches.first())?;
            Some(PointerEvent {
                phase: match touch.kind {
                    TouchKind::Start => Phase::Start,
                    TouchKind::Move => Phase::Move,
                    TouchKind::End => Phase::End,
                },
                vertical_position: point.client_y,
                device: DeviceKind::Touch,
            })
        }
    }
}
