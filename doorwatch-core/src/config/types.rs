//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default debounce interval (ms); reed contacts do not bounce
pub const DEFAULT_DEBOUNCE_MS: u32 = 0;

/// Default length of one grace step (ms)
pub const DEFAULT_GRACE_STEP_MS: u32 = 1000;

/// Default number of grace steps before the alarm
pub const DEFAULT_GRACE_STEPS: u8 = 5;

/// Default alarm blink cadence (ms per toggle)
pub const DEFAULT_ALARM_BLINK_MS: u32 = 250;

/// Default control loop tick interval (ms)
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 10;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Grace step length is zero, the grace period would never elapse
    ZeroGraceStep,
    /// Alarm blink cadence is zero
    ZeroBlinkInterval,
    /// Tick interval is zero
    ZeroTickInterval,
    /// Tick interval is longer than the alarm blink cadence
    TickSlowerThanBlink,
    /// Debounce interval is longer than one grace step
    DebounceLongerThanGraceStep,
}

/// Door monitor timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonitorConfig {
    /// A raw contact change must persist this long to be accepted (ms)
    pub debounce_ms: u32,
    /// Length of one grace step (ms)
    pub grace_step_ms: u32,
    /// Grace steps the door may stay open before the alarm
    pub grace_steps: u8,
    /// Alarm indicator toggle cadence (ms)
    pub alarm_blink_ms: u32,
    /// Control loop tick interval (ms)
    pub tick_interval_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            grace_step_ms: DEFAULT_GRACE_STEP_MS,
            grace_steps: DEFAULT_GRACE_STEPS,
            alarm_blink_ms: DEFAULT_ALARM_BLINK_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl MonitorConfig {
    /// Check the timing values for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grace_step_ms == 0 {
            return Err(ConfigError::ZeroGraceStep);
        }
        if self.alarm_blink_ms == 0 {
            return Err(ConfigError::ZeroBlinkInterval);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.tick_interval_ms > self.alarm_blink_ms {
            return Err(ConfigError::TickSlowerThanBlink);
        }
        if self.debounce_ms > self.grace_step_ms {
            return Err(ConfigError::DebounceLongerThanGraceStep);
        }
        Ok(())
    }

    /// Total grace period in milliseconds
    pub fn grace_period_ms(&self) -> u32 {
        self.grace_step_ms.saturating_mul(self.grace_steps as u32)
    }
}

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }

    /// Level the pin reads or drives when "active"
    ///
    /// For the contact pin, active means the door is open.
    pub const fn active_level(&self) -> bool {
        !self.inverted
    }
}

/// Board pin assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinsConfig {
    /// Reed contact input (active = door open)
    pub contact: PinConfig,
    /// Status LED (green)
    pub status_led: PinConfig,
    /// Alarm LED (red)
    pub alarm_led: PinConfig,
}

impl Default for PinsConfig {
    fn default() -> Self {
        Self {
            contact: PinConfig::with_pullup(4),
            status_led: PinConfig::new(5),
            alarm_led: PinConfig::new(6),
        }
    }
}

impl PinsConfig {
    /// Check that no pin is assigned twice
    pub fn has_conflicts(&self) -> bool {
        self.contact.pin == self.status_led.pin
            || self.contact.pin == self.alarm_led.pin
            || self.status_led.pin == self.alarm_led.pin
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoorwatchConfig {
    pub monitor: MonitorConfig,
    pub pins: PinsConfig,
}
