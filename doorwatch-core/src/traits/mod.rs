//! Collaborator traits
//!
//! These traits define the interface between the door monitor and the
//! platform code that samples the contact, drives the LEDs, keeps time
//! and puts the chip to sleep.

pub mod clock;
pub mod contact;
pub mod indicator;
pub mod power;

pub use clock::Clock;
pub use contact::ContactSensor;
pub use indicator::{IndicatorKind, IndicatorOutput};
pub use power::PowerControl;
