//! RP2040-specific HAL for the door watch firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `doorwatch-hal` traits, plus config-driven pin setup:
//!
//! - GPIO allocation and conflict checks
//! - Pin bank for taking GPIO pins by number at runtime
//! - Contact input (doubles as the wake-up source) and LED outputs

#![no_std]

pub mod gpio;
pub mod io;
pub mod pins;

pub use gpio::{GpioAllocator, PinError, GPIO_COUNT};
pub use io::{ContactPin, LedPin};
pub use pins::PinBank;
