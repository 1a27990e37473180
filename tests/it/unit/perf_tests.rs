//! Unit tests for perf module.

use panel_resize::perf::ScopedTimer;
use std::time::Duration;

#[test]
fn test_tick_within_budget() {
    // Budget is generous, so dropping must not warn or panic
    let timer = ScopedTimer::new("resize_tick", 1000.0, 1);
    assert!(timer.elapsed_ms() >= 0.0);
    assert!(!timer.is_over_budget());
}

#[test]
fn test_tick_over_budget() {
    let timer = ScopedTimer::new("resize_tick", 0.0, 3);
    std::thread::sleep(Duration::from_millis(2));
    assert!(timer.is_over_budget());
}
