//! Contact input and LED outputs on RP2040 GPIO

use doorwatch_hal::{InputPin, OutputPin, WakeSource};
use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

/// Door contact input
///
/// Also the wake-up source: while asleep the monitor task awaits the
/// opposite of the level seen at arming, and the thread executor idles
/// in WFE.
pub struct ContactPin<'d> {
    input: Input<'d>,
    /// Level at arming (true = high), `None` when not armed
    armed_level: Option<bool>,
}

impl<'d> ContactPin<'d> {
    /// Configure a pin as contact input
    ///
    /// Without the internal pull-up the pin floats unless the board has an
    /// external resistor.
    pub fn new(pin: Peri<'d, AnyPin>, pull_up: bool) -> Self {
        let pull = if pull_up { Pull::Up } else { Pull::None };
        Self {
            input: Input::new(pin, pull),
            armed_level: None,
        }
    }
}

impl InputPin for ContactPin<'_> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}

impl WakeSource for ContactPin<'_> {
    fn arm(&mut self) {
        self.armed_level = Some(self.input.is_high());
    }

    fn is_armed(&self) -> bool {
        self.armed_level.is_some()
    }

    async fn wait(&mut self) {
        // Level waits return at once if the pin already moved
        match self.armed_level {
            Some(true) => self.input.wait_for_low().await,
            Some(false) => self.input.wait_for_high().await,
            None => return,
        }
        self.armed_level = None;
    }
}

/// LED output
pub struct LedPin<'d> {
    output: Output<'d>,
}

impl<'d> LedPin<'d> {
    /// Configure a pin as LED output, starting with the LED off
    pub fn new(pin: Peri<'d, AnyPin>, inverted: bool) -> Self {
        let off = if inverted { Level::High } else { Level::Low };
        Self {
            output: Output::new(pin, off),
        }
    }
}

impl OutputPin for LedPin<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
