//! Wake-up source abstraction
//!
//! A wake source is an input whose level change ends a low-power sleep.
//! On AVR parts this is a pin change interrupt, on Cortex-M parts an
//! edge-triggered GPIO interrupt that ends a WFE/WFI.

use core::future::Future;

/// Input that can wake the chip
pub trait WakeSource {
    /// Record the current level and enable the wake-up interrupt
    fn arm(&mut self);

    /// Check if the wake-up interrupt is enabled
    fn is_armed(&self) -> bool;

    /// Wait until the pin level differs from the level seen at arming,
    /// sleeping in the meantime
    ///
    /// A change between `arm` and `wait` is not lost: the wait resolves
    /// right away. Resolves immediately when not armed, and disarms on
    /// return.
    fn wait(&mut self) -> impl Future<Output = ()>;
}
