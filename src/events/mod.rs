//! Event surface and stream composition.
//!
//! ## Modules
//!
//! - `document` - Event hub the host dispatches raw input into
//! - `subscription` - Owned cancellation handles and the per-mount set
//! - `composer` - Device-unified start (per handle) and move/end (global) signals

mod composer;
mod document;
mod subscription;

pub use composer::{PointerHandler, StreamComposer};
pub use document::{
    DispatchOutcome, Document, EventContext, EventOrigin, HandleId, ListenScope, Listener,
};
pub use subscription::{Subscription, SubscriptionSet};
