//! Monotonic time source

/// Monotonic millisecond clock
///
/// The value wraps at `u32::MAX`; compare timestamps by subtraction,
/// never by ordering.
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u32;
}
