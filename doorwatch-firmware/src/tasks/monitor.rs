//! Door monitor task
//!
//! Runs one [`DoorWatch::poll`] per tick and logs state changes. Sleep is
//! routed through [`SleepGate`] so the tick task stops while the chip
//! idles waiting for the contact to change.

use core::sync::atomic::Ordering;

use defmt::*;
use doorwatch_core::time::MillisCounter;
use doorwatch_core::traits::{ContactSensor, PowerControl};
use doorwatch_core::{ContactState, DoorWatch};
use doorwatch_drivers::{LedIndicators, ReedContact};
use doorwatch_hal_rp2040::{ContactPin, LedPin};

use super::tick::TICK_SIGNAL;
use crate::channels::{RESUME_SIGNAL, SUSPENDED};

/// Door watch as wired on the board
pub type BoardWatch = DoorWatch<
    SleepGate<ReedContact<ContactPin<'static>>>,
    LedIndicators<LedPin<'static>, LedPin<'static>>,
    &'static MillisCounter,
>;

/// Contact sensor wrapper that suspends the tick task around sleep
pub struct SleepGate<S> {
    inner: S,
}

impl<S> SleepGate<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: ContactSensor> ContactSensor for SleepGate<S> {
    fn read_contact(&mut self) -> ContactState {
        self.inner.read_contact()
    }
}

impl<S: PowerControl> PowerControl for SleepGate<S> {
    fn arm_wake_on_contact_change(&mut self) {
        self.inner.arm_wake_on_contact_change();
    }

    async fn request_low_power_sleep(&mut self) {
        RESUME_SIGNAL.reset();
        SUSPENDED.store(true, Ordering::Release);
        info!("Door closed, sleeping");

        self.inner.request_low_power_sleep().await;

        SUSPENDED.store(false, Ordering::Release);
        RESUME_SIGNAL.signal(());
        info!("Woke on contact change");
    }
}

/// Monitor task - polls the door watch once per tick
#[embassy_executor::task]
pub async fn monitor_task(mut watch: BoardWatch) {
    info!("Monitor task started");

    loop {
        let now_ms = TICK_SIGNAL.wait().await;
        let output = watch.poll().await;

        if let Some(transition) = output.transition {
            info!(
                "{} -> {} at {} ms (contact {})",
                transition.from, transition.to, now_ms, output.contact
            );
        }
    }
}
