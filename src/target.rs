//! Resize targets - the elements whose height a handle controls.
//!
//! The engine only ever reads and writes the height. Content and lifetime
//! stay with the host view, which shares each target with the engine through
//! a `TargetRef`.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Anything with a mutable pixel height.
///
/// Both methods run while the engine holds its session lock, and the host
/// must not hold the target's own lock while dispatching. An implementation
/// must therefore not dispatch into the `Document` from `set_height`; queue
/// the notification and deliver it after the dispatch returns.
pub trait HeightTarget: Send {
    /// Current height in pixels
    fn height(&self) -> f32;

    /// Replace the height in pixels
    fn set_height(&mut self, height: f32);
}

/// Shared handle to a target, owned by the host view.
pub type TargetRef = Arc<Mutex<dyn HeightTarget>>;

/// Stock target: a response panel with a height and nothing else the engine sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub height: f32,
}

impl Panel {
    pub fn new(height: f32) -> Self {
        Self { height }
    }

    /// Wrap as a shared target, returning both the typed handle (for the host)
    /// and the `TargetRef` (for the engine).
    pub fn shared(height: f32) -> (Arc<Mutex<Panel>>, TargetRef) {
        let panel = Arc::new(Mutex::new(Self::new(height)));
        let target: TargetRef = panel.clone();
        (panel, target)
    }
}

impl HeightTarget for Panel {
    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }
}
