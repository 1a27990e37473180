//! Mouse and touch input for resize handles.
//!
//! The host forwards raw occurrences (`RawEvent`) exactly as its platform
//! reports them. Everything downstream sees only `PointerEvent`, produced by
//! a single `normalize` function shared by both devices.
//!
//! ## Modules
//!
//! - `raw` - Raw mouse/touch occurrence types and listener keys
//! - `normalize` - Raw occurrence to `PointerEvent` mapping

mod normalize;
mod raw;

pub use normalize::{normalize, DeviceKind, Phase, PointerEvent};
pub use raw::{EventKind, MouseInput, MouseKind, RawEvent, TouchInput, TouchKind, TouchPoint};
