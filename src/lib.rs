//! Drag-to-resize engine for stacked response panels.
//!
//! A host view hands the engine one target per resize handle and forwards raw
//! mouse and touch input into a [`Document`]. Dragging a handle changes its
//! panel's height, never below the configured floor. Any number of handles can
//! be mounted at once; they share a single document-wide move/end listener
//! pair.
//!
//! ```ignore
//! let document = Document::new();
//! let (panel, target) = Panel::shared(200.0);
//! let mut engine = ResizeEngine::mount(&document, [Some(target)], &ResizeConfig::default());
//!
//! let handle = engine.handle(0).unwrap();
//! document.dispatch(EventOrigin::Handle(handle), &RawEvent::mouse_down(300.0));
//! document.dispatch(EventOrigin::Document, &RawEvent::mouse_move(340.0));
//! assert_eq!(panel.lock().height, 240.0);
//!
//! engine.teardown();
//! ```

pub mod config;
pub mod constants;
pub mod drag;
pub mod engine;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod perf;
pub mod replay;
pub mod target;

pub use config::ResizeConfig;
pub use engine::ResizeEngine;
pub use error::{ResizeError, ResizeResult};
pub use events::{DispatchOutcome, Document, EventOrigin, HandleId};
pub use input::{PointerEvent, RawEvent};
pub use target::{HeightTarget, Panel, TargetRef};
