//! Door monitoring
//!
//! Debounces the contact, counts the grace period and decides the
//! indicator levels and when the board may sleep.

pub mod door;
pub mod grace;

pub use door::{DoorMonitor, MonitorOutput, Transition};
pub use grace::GraceCounter;
