//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in doorwatch-core on top of the pin traits from doorwatch-hal:
//!
//! - Reed contact (door sensor and wake-up source)
//! - LED indicators (status and alarm, active-high or active-low)

#![no_std]
#![deny(unsafe_code)]

pub mod contact;
pub mod indicator;

pub use contact::ReedContact;
pub use indicator::LedIndicators;
