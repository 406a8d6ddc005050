//! Doorwatch - Door Contact Alarm Firmware
//!
//! Watches a reed contact on the door. While the door is closed the chip
//! sleeps; when it opens a grace period starts, and a door left open past
//! the grace period raises a blinking alarm until it is closed again.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use doorwatch_core::config::{parse_config, DoorwatchConfig, PinsConfig};
use doorwatch_core::DoorWatch;
use doorwatch_drivers::{LedIndicators, ReedContact};
use doorwatch_hal_rp2040::pin_bank;

use crate::channels::MILLIS;
use crate::tasks::SleepGate;

/// Embedded configuration (compiled into firmware)
/// Edit doorwatch.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../doorwatch.toml");

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Doorwatch firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    let monitor_config = config.monitor;
    let mut pins = config.pins;
    info!(
        "Grace period {} ms ({} x {} ms), alarm blink {} ms",
        monitor_config.grace_period_ms(),
        monitor_config.grace_steps,
        monitor_config.grace_step_ms,
        monitor_config.alarm_blink_ms
    );

    let mut bank = pin_bank!(p);
    let (contact_pin, status_pin, alarm_pin) = match bank.claim_board(&pins) {
        Ok(board) => board,
        Err(e) => {
            // Nothing was taken from the bank, the default pins are still free
            error!("Invalid pin assignment: {}, using default pins", e);
            pins = PinsConfig::default();
            match bank.claim_board(&pins) {
                Ok(board) => board,
                Err(e) => {
                    error!("Default pins unavailable: {}, halting", e);
                    loop {
                        cortex_m::asm::wfi();
                    }
                }
            }
        }
    };
    info!(
        "Contact on gpio{}, LEDs on gpio{} / gpio{}",
        pins.contact.pin, pins.status_led.pin, pins.alarm_led.pin
    );

    let contact = ReedContact::new(contact_pin, pins.contact.active_level());
    let indicators = LedIndicators::new(
        status_pin,
        pins.status_led.inverted,
        alarm_pin,
        pins.alarm_led.inverted,
    );
    let watch = DoorWatch::new(monitor_config, SleepGate::new(contact), indicators, &MILLIS);

    // Spawn tasks
    spawner
        .spawn(tasks::tick_task(monitor_config.tick_interval_ms))
        .unwrap();
    spawner.spawn(tasks::monitor_task(watch)).unwrap();

    info!("All tasks spawned, firmware running");
}

/// Parse the embedded configuration
///
/// Falls back to the built-in defaults if the file does not parse or
/// fails validation.
fn load_config() -> DoorwatchConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded embedded configuration");
            config
        }
        Err(e) => {
            error!("Invalid embedded configuration: {}, using defaults", e);
            DoorwatchConfig::default()
        }
    }
}
