//! Reed contact door sensor
//!
//! A reed switch held closed by a magnet on the door. The switch pulls the
//! input to one level while the door is closed; the pull resistor takes it
//! to the other level when the door opens.

use core::future::Future;

use doorwatch_core::traits::{ContactSensor, PowerControl};
use doorwatch_core::ContactState;
use doorwatch_hal::{InputPin, WakeSource};

/// Reed contact on a digital input
pub struct ReedContact<P> {
    pin: P,
    /// Pin level while the door is open
    open_level: bool,
}

impl<P: InputPin> ReedContact<P> {
    /// Create a reed contact
    ///
    /// # Arguments
    /// - `pin`: The input the switch is wired to
    /// - `open_high`: If true, the pin reads high while the door is open
    pub fn new(pin: P, open_high: bool) -> Self {
        Self {
            pin,
            open_level: open_high,
        }
    }

    /// Contact with a pull-up: switch closed pulls the pin low
    pub fn new_open_high(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Contact with a pull-down: switch closed pulls the pin high
    pub fn new_open_low(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Level the pin reads while the door is open
    pub fn open_level(&self) -> bool {
        self.open_level
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    pub fn into_pin(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ContactSensor for ReedContact<P> {
    fn read_contact(&mut self) -> ContactState {
        ContactState::from_level(self.pin.is_high(), self.open_level)
    }
}

impl<P: InputPin + WakeSource> PowerControl for ReedContact<P> {
    fn arm_wake_on_contact_change(&mut self) {
        self.pin.arm();
    }

    fn request_low_power_sleep(&mut self) -> impl Future<Output = ()> {
        self.pin.wait()
    }
}
