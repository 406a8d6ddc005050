//! Door contact sensor trait

use crate::contact::ContactState;

/// Trait for door contact sensors
///
/// Implementations map the physical pin level to a [`ContactState`].
/// A read cannot fail.
pub trait ContactSensor {
    /// Take one synchronous sample of the contact
    ///
    /// Takes `&mut self` because some pins require mutable access to read.
    fn read_contact(&mut self) -> ContactState;
}
