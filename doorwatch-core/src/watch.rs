//! Door watch poll loop
//!
//! Glues a [`DoorMonitor`] to its collaborators. One call to
//! [`DoorWatch::poll`] is one control-loop tick: sample time and contact,
//! run the monitor, drive the indicators, and hand over to the power
//! layer when a sleep is requested.

use crate::config::MonitorConfig;
use crate::contact::ContactState;
use crate::monitor::{DoorMonitor, MonitorOutput};
use crate::traits::{Clock, ContactSensor, IndicatorKind, IndicatorOutput, PowerControl};

/// Door monitor wired to its platform collaborators
pub struct DoorWatch<S, I, C> {
    monitor: DoorMonitor,
    sensor: S,
    indicators: I,
    clock: C,
}

impl<S, I, C> DoorWatch<S, I, C>
where
    S: ContactSensor + PowerControl,
    I: IndicatorOutput,
    C: Clock,
{
    /// Create a door watch in Standby with both indicators off
    pub fn new(config: MonitorConfig, sensor: S, mut indicators: I, clock: C) -> Self {
        indicators.all_off();
        let monitor = DoorMonitor::new(config, clock.now_ms());
        Self {
            monitor,
            sensor,
            indicators,
            clock,
        }
    }

    /// Run one control-loop tick
    ///
    /// Only blocks when the monitor requests sleep; in that case both
    /// indicators are switched off, the wake source is armed, and this
    /// returns after the wake event.
    ///
    /// The contact is read again after arming. A change that lands between
    /// the tick's sample and the arming would otherwise never wake the
    /// board, so the sleep is skipped and handled as an immediate wake.
    pub async fn poll(&mut self) -> MonitorOutput {
        let now_ms = self.clock.now_ms();
        let raw = self.sensor.read_contact();
        let output = self.monitor.poll(raw, now_ms);

        self.indicators
            .set_indicator(IndicatorKind::Status, output.status_on);
        self.indicators
            .set_indicator(IndicatorKind::Alarm, output.alarm_on);

        if output.sleep_requested {
            self.indicators.all_off();
            self.sensor.arm_wake_on_contact_change();
            if self.sensor.read_contact() == ContactState::Closed {
                self.sensor.request_low_power_sleep().await;
            }
            self.monitor.on_wake(self.clock.now_ms());
        }

        output
    }

    pub fn monitor(&self) -> &DoorMonitor {
        &self.monitor
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn indicators(&self) -> &I {
        &self.indicators
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (S, I, C) {
        (self.sensor, self.indicators, self.clock)
    }
}
