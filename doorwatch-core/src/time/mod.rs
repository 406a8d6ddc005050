//! Millisecond time keeping
//!
//! All timestamps are wrapping `u32` milliseconds. They are compared by
//! subtraction only, which stays correct across the ~49.7 day wraparound.

pub mod counter;
pub mod timer;

pub use counter::MillisCounter;
pub use timer::ElapsedTimer;
