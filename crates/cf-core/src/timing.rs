//! Opt-in wall clock timing for long runs such as multirun sweeps.
//!
//! Off by default. Turn it on with [`set_enabled`] or by setting `CF_TIMING`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

static FORCED: AtomicBool = AtomicBool::new(false);

pub const ENV_VAR: &str = "CF_TIMING";

pub fn set_enabled(on: bool) {
    FORCED.store(on, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    FORCED.load(Ordering::Relaxed) || std::env::var_os(ENV_VAR).is_some()
}

/// Stopwatch that only reads the clock when timing is enabled.
#[derive(Debug)]
pub struct Timer {
    label: &'static str,
    started: Option<Instant>,
}

impl Timer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            started: is_enabled().then(Instant::now),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Elapsed time, or `None` when timing was off at start.
    pub fn stop(self) -> Option<Duration> {
        self.started.map(|t| t.elapsed())
    }
}

/// Run `f`, returning its value and the elapsed time if timing is on.
pub fn timed<T>(label: &'static str, f: impl FnOnce() -> T) -> (T, Option<Duration>) {
    let timer = Timer::start(label);
    let value = f();
    (value, timer.stop())
}
