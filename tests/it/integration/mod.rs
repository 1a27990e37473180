//! Integration tests for panel-resize.
//!
//! These drive mounted engines through complete gestures and verify the
//! interaction between input, sessions and teardown end-to-end.
