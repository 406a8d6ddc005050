//! Doorwatch Hardware Abstraction Layer
//!
//! This crate defines pin-level hardware abstraction traits that can be
//! implemented by chip-specific HALs. Drivers in `doorwatch-drivers` build
//! the door contact and indicator devices on top of them, so the same
//! application code runs on any board that implements these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (doorwatch-firmware)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  doorwatch-drivers (contact, LEDs)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  doorwatch-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ doorwatch-hal-    │
//!           │     rp2040        │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`wake::WakeSource`] - Pin that can wake the chip from sleep

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod wake;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use wake::WakeSource;
