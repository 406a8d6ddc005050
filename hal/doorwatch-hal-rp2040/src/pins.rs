//! Pin bank for config-driven pin assignment
//!
//! Pin numbers come from `doorwatch.toml` at boot, so GPIO pins have to be
//! taken by number at runtime instead of by name.

use doorwatch_core::config::PinsConfig;
use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;

use crate::gpio::{GpioAllocator, PinError, GPIO_COUNT};
use crate::io::{ContactPin, LedPin};

/// Build a [`PinBank`] from all GPIO pins of the `Peripherals`
///
/// Usage:
/// ```ignore
/// let p = embassy_rp::init(Default::default());
/// let mut bank = pin_bank!(p);
/// ```
#[macro_export]
macro_rules! pin_bank {
    ($p:ident) => {
        $crate::pins::PinBank::new([
            $p.PIN_0.into(),
            $p.PIN_1.into(),
            $p.PIN_2.into(),
            $p.PIN_3.into(),
            $p.PIN_4.into(),
            $p.PIN_5.into(),
            $p.PIN_6.into(),
            $p.PIN_7.into(),
            $p.PIN_8.into(),
            $p.PIN_9.into(),
            $p.PIN_10.into(),
            $p.PIN_11.into(),
            $p.PIN_12.into(),
            $p.PIN_13.into(),
            $p.PIN_14.into(),
            $p.PIN_15.into(),
            $p.PIN_16.into(),
            $p.PIN_17.into(),
            $p.PIN_18.into(),
            $p.PIN_19.into(),
            $p.PIN_20.into(),
            $p.PIN_21.into(),
            $p.PIN_22.into(),
            $p.PIN_23.into(),
            $p.PIN_24.into(),
            $p.PIN_25.into(),
            $p.PIN_26.into(),
            $p.PIN_27.into(),
            $p.PIN_28.into(),
            $p.PIN_29.into(),
        ])
    };
}

/// All GPIO pins, taken out one at a time by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
    allocator: GpioAllocator,
}

impl PinBank {
    /// Create a pin bank; use [`pin_bank!`] to build the array
    pub fn new(pins: [Peri<'static, AnyPin>; GPIO_COUNT]) -> Self {
        Self {
            pins: pins.map(Some),
            allocator: GpioAllocator::new(),
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.allocator.allocate(pin)?;
        self.pins[usize::from(pin)]
            .take()
            .ok_or(PinError::AlreadyAllocated(pin))
    }

    /// Check if a pin is still available
    /// Set up the contact and both LEDs from a board configuration
    ///
    /// Pins are checked for conflicts before any of them is taken.
    pub fn claim_board(
        &mut self,
        pins: &PinsConfig,
    ) -> Result<(ContactPin<'static>, LedPin<'static>, LedPin<'static>), PinError> {
        let mut check = GpioAllocator::new();
        check.allocate_all(pins)?;

        let contact = ContactPin::new(self.take(pins.contact.pin)?, pins.contact.pull_up);
        let status = LedPin::new(self.take(pins.status_led.pin)?, pins.status_led.inverted);
        let alarm = LedPin::new(self.take(pins.alarm_led.pin)?, pins.alarm_led.inverted);
        Ok((contact, status, alarm))
    }
}
