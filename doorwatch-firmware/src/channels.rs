//! Inter-task communication
//!
//! Static signals and shared state between the tick task and the monitor
//! task. Uses embassy-sync primitives for safe async communication.

use doorwatch_core::time::MillisCounter;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

/// Millisecond counter; the tick task is the only writer
pub static MILLIS: MillisCounter = MillisCounter::new();

/// Set while the monitor sleeps; the tick task parks instead of ticking
pub static SUSPENDED: AtomicBool = AtomicBool::new(false);

/// Signal that the monitor woke up and ticks should resume
pub static RESUME_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();
