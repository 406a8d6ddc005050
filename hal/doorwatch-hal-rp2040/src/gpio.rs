//! GPIO allocation and management
//!
//! Tracks which GPIO pins are in use to prevent conflicts.

use doorwatch_core::config::PinsConfig;
use heapless::FnvIndexSet;

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when allocating a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    OutOfRange(u8),
    /// Pin already in use
    AlreadyAllocated(u8),
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Allocate a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if usize::from(pin) >= GPIO_COUNT {
            return Err(PinError::OutOfRange(pin));
        }
        match self.allocated.insert(pin) {
            Ok(true) => Ok(()),
            // Capacity exceeds GPIO_COUNT, so a failed insert means a duplicate
            Ok(false) | Err(_) => Err(PinError::AlreadyAllocated(pin)),
        }
    }

    /// Allocate every pin of a board configuration
    ///
    /// Stops at the first invalid or duplicated pin.
    pub fn allocate_all(&mut self, pins: &PinsConfig) -> Result<(), PinError> {
        self.allocate(pins.contact.pin)?;
        self.allocate(pins.status_led.pin)?;
        self.allocate(pins.alarm_led.pin)?;
        Ok(())
    }

    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doorwatch_core::config::PinConfig;

    #[test]
    fn test_allocator() {
        let mut alloc = GpioAllocator::new();

        assert_eq!(alloc.allocate(4), Ok(()));
        assert!(alloc.is_allocated(4));

        // Can't allocate same pin twice
        assert_eq!(alloc.allocate(4), Err(PinError::AlreadyAllocated(4)));
        assert!(!alloc.is_allocated(5));
        assert_eq!(alloc.allocated_count(), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut alloc = GpioAllocator::new();
        assert_eq!(alloc.allocate(29), Ok(()));
        assert_eq!(alloc.allocate(30), Err(PinError::OutOfRange(30)));
        assert_eq!(alloc.allocated_count(), 1);
    }

    #[test]
    fn test_allocate_board_pins() {
        let mut alloc = GpioAllocator::new();
        assert_eq!(alloc.allocate_all(&PinsConfig::default()), Ok(()));
        assert_eq!(alloc.allocated_count(), 3);

        let clash = PinsConfig {
            alarm_led: PinConfig::new(4),
            ..Default::default()
        };
        let mut alloc = GpioAllocator::new();
        assert_eq!(
            alloc.allocate_all(&clash),
            Err(PinError::AlreadyAllocated(4))
        );
    }
}
