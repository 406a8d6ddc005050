//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod monitor;
pub mod tick;

pub use monitor::{monitor_task, SleepGate};
pub use tick::tick_task;
