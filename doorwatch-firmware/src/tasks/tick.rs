//! Tick task driving the control loop
//!
//! Advances the millisecond counter and wakes the monitor task once per
//! tick. Stops ticking while the monitor sleeps, like a timer that halts
//! in power-down.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

use crate::channels::{MILLIS, RESUME_SIGNAL, SUSPENDED};

/// Signal to notify the monitor of a tick, carrying the current time
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Tick task - advances the clock and signals the monitor
#[embassy_executor::task]
pub async fn tick_task(interval_ms: u32) {
    info!("Tick task started ({} ms)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(interval_ms)));

    loop {
        ticker.next().await;

        if SUSPENDED.load(Ordering::Acquire) {
            RESUME_SIGNAL.wait().await;
            ticker.reset();
            continue;
        }

        MILLIS.advance(interval_ms);
        TICK_SIGNAL.signal(MILLIS.now_ms());
    }
}
