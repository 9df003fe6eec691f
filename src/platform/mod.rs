//! Platform abstraction - the monotonic clock
//!
//! The sim never reads wall time itself; every timestamp is handed in by the
//! caller. `SystemClock` backs the real game loop, `ManualClock` lets tests
//! and demos step time explicitly.

use std::time::Instant;

/// A monotonic millisecond counter
pub trait Clock {
    /// Milliseconds elapsed since the clock started; never decreases
    fn now_ms(&self) -> u64;
}

/// Wall-clock backed monotonic time
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Hand-stepped clock for tests and scripted demos
#[derive(Debug, Default)]
pub struct ManualClock {
    now: std::cell::Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance time by `ms`
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
