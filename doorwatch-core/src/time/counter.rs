//! Shared millisecond counter
//!
//! The tick context is the only writer. Every other reader goes through
//! an atomic load, so a read can never observe a half-updated value even
//! on cores without native 32-bit atomics (`portable-atomic` falls back
//! to a critical section there).

use portable_atomic::{AtomicU32, Ordering};

use crate::traits::Clock;

/// Monotonic, wrapping millisecond counter
pub struct MillisCounter {
    millis: AtomicU32,
}

impl Default for MillisCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl MillisCounter {
    /// Create a counter at zero (usable in a `static`)
    pub const fn new() -> Self {
        Self {
            millis: AtomicU32::new(0),
        }
    }

    /// Advance the counter (tick context only)
    pub fn advance(&self, delta_ms: u32) {
        // Single writer: load + store cannot lose an update
        let now = self.millis.load(Ordering::Acquire);
        self.millis.store(now.wrapping_add(delta_ms), Ordering::Release);
    }

    /// Atomic snapshot of the counter
    pub fn now_ms(&self) -> u32 {
        self.millis.load(Ordering::Acquire)
    }
}

impl Clock for MillisCounter {
    fn now_ms(&self) -> u32 {
        MillisCounter::now_ms(self)
    }
}

impl Clock for &MillisCounter {
    fn now_ms(&self) -> u32 {
        MillisCounter::now_ms(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let counter = MillisCounter::new();
        assert_eq!(counter.now_ms(), 0);
        counter.advance(10);
        counter.advance(10);
        assert_eq!(counter.now_ms(), 20);
    }

    #[test]
    fn test_wraps() {
        let counter = MillisCounter::new();
        counter.advance(u32::MAX);
        counter.advance(5);
        assert_eq!(counter.now_ms(), 4);
    }

    #[test]
    fn test_clock_impl() {
        static COUNTER: MillisCounter = MillisCounter::new();
        COUNTER.advance(42);
        let clock = &COUNTER;
        assert_eq!(Clock::now_ms(&clock), 42);
    }
}
