//! Time-based debounce filter
//!
//! A change of the raw reading is accepted only after it has persisted,
//! unchanged, for the whole debounce interval. Timestamps are wrapping
//! millisecond values and are only ever compared by subtraction.
//!
//! ```text
//!   raw:        C C O C O O O O O O O
//!   confirmed:  C C C C C C C C O O O
//!                       ^ pending restarts here
//! ```

use super::ContactState;

/// Debounce filter for a two-level contact
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Debounce interval (ms), zero accepts every change immediately
    interval_ms: u32,
    /// Last accepted value
    confirmed: ContactState,
    /// First sample of the current run matching `confirmed`; `None` until
    /// a sample has been seen
    stable_since: Option<u32>,
    /// Latched once the confirmed value has been stable for a full interval
    settled: bool,
    /// Time the raw reading first differed from `confirmed`
    pending_since: Option<u32>,
}

impl Debouncer {
    /// Create a filter that starts out confirmed at `initial`
    ///
    /// The initial value is an assumption, not an observation: stability
    /// is counted from the first sample that agrees with it.
    pub fn new(initial: ContactState, interval_ms: u32) -> Self {
        Self {
            interval_ms,
            confirmed: initial,
            stable_since: None,
            settled: false,
            pending_since: None,
        }
    }

    /// Feed one raw sample and return the confirmed value
    pub fn update(&mut self, raw: ContactState, now_ms: u32) -> ContactState {
        if raw == self.confirmed {
            if self.pending_since.take().is_some() {
                // Bounced away and back: stability restarts
                self.stable_since = Some(now_ms);
                self.settled = false;
            }
            self.stable_since.get_or_insert(now_ms);
        } else {
            let since = *self.pending_since.get_or_insert(now_ms);
            if now_ms.wrapping_sub(since) >= self.interval_ms {
                self.confirmed = raw;
                self.stable_since = Some(since);
                self.pending_since = None;
            }
            self.settled = false;
        }

        if !self.settled && self.pending_since.is_none() {
            if let Some(since) = self.stable_since {
                self.settled = now_ms.wrapping_sub(since) >= self.interval_ms;
            }
        }

        self.confirmed
    }

    /// Last confirmed value
    pub fn confirmed(&self) -> ContactState {
        self.confirmed
    }

    /// True once the confirmed value has been observed for a full
    /// interval with no raw deviation since
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Require the confirmed value to be observed for a fresh interval
    ///
    /// Used after wake-up: the time spent asleep does not count as
    /// observed stability. Counting restarts at the next sample.
    pub fn restart_stability(&mut self) {
        self.stable_since = None;
        self.pending_since = None;
        self.settled = false;
    }
}
