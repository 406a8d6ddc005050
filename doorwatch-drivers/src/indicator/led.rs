//! LED indicators
//!
//! Status and alarm LEDs on GPIO pins, each either active-high (LED to
//! ground) or active-low (LED to supply).

use doorwatch_core::traits::{IndicatorKind, IndicatorOutput};
use doorwatch_hal::OutputPin;

/// One LED on an output pin
struct Led<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> Led<P> {
    fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set_on(false);
        led
    }

    fn set_on(&mut self, on: bool) {
        self.on = on;

        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}

/// Status and alarm LEDs
///
/// Both LEDs start off.
pub struct LedIndicators<S, A> {
    status: Led<S>,
    alarm: Led<A>,
}

impl<S: OutputPin, A: OutputPin> LedIndicators<S, A> {
    /// Create the indicators
    ///
    /// # Arguments
    /// - `status` / `alarm`: The LED pins
    /// - `status_inverted` / `alarm_inverted`: If true, the LED is ON when
    ///   its pin is LOW
    pub fn new(status: S, status_inverted: bool, alarm: A, alarm_inverted: bool) -> Self {
        Self {
            status: Led::new(status, status_inverted),
            alarm: Led::new(alarm, alarm_inverted),
        }
    }

    /// Both LEDs active-high
    pub fn new_active_high(status: S, alarm: A) -> Self {
        Self::new(status, false, alarm, false)
    }

    /// Check if an indicator is currently lit
    pub fn is_on(&self, kind: IndicatorKind) -> bool {
        match kind {
            IndicatorKind::Status => self.status.on,
            IndicatorKind::Alarm => self.alarm.on,
        }
    }

    /// Release the pins
    pub fn into_pins(self) -> (S, A) {
        (self.status.pin, self.alarm.pin)
    }
}

impl<S: OutputPin, A: OutputPin> IndicatorOutput for LedIndicators<S, A> {
    fn set_indicator(&mut self, kind: IndicatorKind, on: bool) {
        match kind {
            IndicatorKind::Status => self.status.set_on(on),
            IndicatorKind::Alarm => self.alarm.set_on(on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_leds() {
        let mut leds = LedIndicators::new_active_high(MockPin::new(), MockPin::new());

        // Initially off
        assert!(!leds.is_on(IndicatorKind::Status));
        assert!(!leds.status.pin.is_set_high());

        leds.set_indicator(IndicatorKind::Status, true);
        assert!(leds.is_on(IndicatorKind::Status));
        assert!(leds.status.pin.is_set_high());
        assert!(!leds.alarm.pin.is_set_high());

        leds.set_indicator(IndicatorKind::Alarm, true);
        assert!(leds.alarm.pin.is_set_high());
    }

    #[test]
    fn test_active_low_alarm() {
        let mut leds = LedIndicators::new(MockPin::new(), false, MockPin::new(), true);

        // Off means pin high for active-low
        assert!(!leds.is_on(IndicatorKind::Alarm));
        assert!(leds.alarm.pin.is_set_high());

        leds.set_indicator(IndicatorKind::Alarm, true);
        assert!(!leds.alarm.pin.is_set_high());

        leds.set_indicator(IndicatorKind::Alarm, false);
        assert!(leds.alarm.pin.is_set_high());
    }

    #[test]
    fn test_all_off() {
        let mut leds = LedIndicators::new_active_high(MockPin::new(), MockPin::new());
        leds.set_indicator(IndicatorKind::Status, true);
        leds.set_indicator(IndicatorKind::Alarm, true);

        leds.all_off();
        let (status, alarm) = leds.into_pins();
        assert!(!status.is_set_high());
        assert!(!alarm.is_set_high());
    }
}
