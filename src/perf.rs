//! Tick timing for the resize hot path.
//!
//! Move events arrive at pointer rate, and every tick walks all mounted
//! controllers. With the `profiling` feature the move handler runs under a
//! [`ScopedTimer`] that warns when a tick overruns its budget, noting how many
//! sessions it was driving.
//!
//! ```toml
//! [dependencies]
//! panel-resize = { features = ["profiling"] }
//! ```

use std::time::Instant;
use tracing::warn;

/// Time the rest of the enclosing scope as one tick driving `$sessions`
/// active sessions. Expands to nothing without the `profiling` feature, and
/// `$sessions` is not evaluated then.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr, $threshold_ms:expr, $sessions:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms, $sessions);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// Warns on drop if the scope took longer than `threshold_ms`.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    sessions: usize,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64, sessions: usize) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            sessions,
        }
    }

    /// Milliseconds since the tick started
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn is_over_budget(&self) -> bool {
        self.elapsed_ms() > self.threshold_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }
        warn!(
            tick = self.name,
            sessions = self.sessions,
            elapsed_ms = format!("{elapsed_ms:.2}"),
            budget_ms = format!("{:.2}", self.threshold_ms),
            "resize tick over budget"
        );
    }
}
