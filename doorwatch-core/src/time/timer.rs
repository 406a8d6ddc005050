//! Non-blocking interval timer

/// Compares a start timestamp against a fixed interval
///
/// Replaces busy-wait delays: the caller keeps polling and acts when
/// the interval has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTimer {
    start_ms: u32,
    interval_ms: u32,
}

impl ElapsedTimer {
    /// Create a timer started at `now_ms`
    pub const fn new(interval_ms: u32, now_ms: u32) -> Self {
        Self {
            start_ms: now_ms,
            interval_ms,
        }
    }

    /// Restart the interval from `now_ms`
    pub fn restart(&mut self, now_ms: u32) {
        self.start_ms = now_ms;
    }

    /// Milliseconds since the last restart
    pub fn elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.start_ms)
    }

    /// Check if the interval has elapsed
    pub fn is_due(&self, now_ms: u32) -> bool {
        self.elapsed(now_ms) >= self.interval_ms
    }

    /// If due, restart from `now_ms` and return true
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if self.is_due(now_ms) {
            self.start_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Consume every whole interval elapsed so far
    ///
    /// Returns the number of intervals and moves the start forward by
    /// exactly that many, keeping the remainder. A zero interval
    /// never completes.
    pub fn take_intervals(&mut self, now_ms: u32) -> u32 {
        if self.interval_ms == 0 {
            return 0;
        }
        let count = self.elapsed(now_ms) / self.interval_ms;
        self.start_ms = self
            .start_ms
            .wrapping_add(count.wrapping_mul(self.interval_ms));
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_after_interval() {
        let timer = ElapsedTimer::new(500, 1000);
        assert!(!timer.is_due(1000));
        assert!(!timer.is_due(1499));
        assert!(timer.is_due(1500));
    }

    #[test]
    fn test_poll_restarts() {
        let mut timer = ElapsedTimer::new(250, 0);
        assert!(!timer.poll(200));
        assert!(timer.poll(260));
        assert!(!timer.poll(500));
        assert!(timer.poll(510));
    }

    #[test]
    fn test_wraparound() {
        let start = u32::MAX - 100;
        let timer = ElapsedTimer::new(500, start);
        let now = start.wrapping_add(499);
        assert!(now < start);
        assert!(!timer.is_due(now));
        assert!(timer.is_due(start.wrapping_add(500)));
        assert_eq!(timer.elapsed(start.wrapping_add(500)), 500);
    }

    #[test]
    fn test_take_intervals_keeps_remainder() {
        let mut timer = ElapsedTimer::new(1000, 0);
        assert_eq!(timer.take_intervals(999), 0);
        assert_eq!(timer.take_intervals(3500), 3);
        assert_eq!(timer.elapsed(3500), 500);
        assert_eq!(timer.take_intervals(4000), 1);
        assert_eq!(timer.elapsed(4000), 0);
    }

    #[test]
    fn test_take_intervals_zero_interval() {
        let mut timer = ElapsedTimer::new(0, 0);
        assert_eq!(timer.take_intervals(10_000), 0);
    }
}
