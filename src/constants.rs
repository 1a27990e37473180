//! Engine-wide constants.
//!
//! Centralizes the numeric limits used by the resize engine so the clamp,
//! the defaults in `ResizeConfig` and the tests all agree.

// ============================================================================
// Panel Limits
// ============================================================================

/// Minimum height a panel can be dragged down to, in pixels
pub const MIN_PANEL_HEIGHT: f32 = 100.0;

// ============================================================================
// Event Surface
// ============================================================================

/// Number of listener bindings a single handle contributes (mouse down + touch start)
pub const START_BINDINGS_PER_HANDLE: usize = 2;

/// Number of document-wide bindings shared by every handle (move + end, per device)
pub const SHARED_GLOBAL_BINDINGS: usize = 4;

// ============================================================================
// Profiling
// ============================================================================

/// Budget for a single move tick across all sessions before a warning is logged
pub const MOVE_TICK_WARN_MS: f64 = 4.0;

/// Default log directive used by the replay binary when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "panel_resize=info";
