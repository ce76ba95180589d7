//! Timing instrumentation for the pointer hot paths.
//!
//! Pointer-move handling has to finish before the next input event arrives,
//! so slow handlers are worth knowing about. Enable with the `profiling`
//! feature flag:
//! ```toml
//! [dependencies]
//! stampdesk = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_pointer_move() {
//!     profile_scope!("handle_pointer_move");
//!     // ... event handling code ...
//! }
//! ```

use crate::constants::POINTER_BUDGET_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer that warns when its scope outlives a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer against the per-event pointer budget.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, POINTER_BUDGET_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", ms),
                budget_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        } else {
            #[cfg(feature = "profiling")]
            trace!(operation = self.name, elapsed_ms = ms, "Timed");
        }
    }
}
