//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices.
//!
//! Structure:
//! - integration: Full gestures through mounted engines
//! - unit: Single-component unit tests

mod integration;
