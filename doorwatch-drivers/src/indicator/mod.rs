//! Indicator drivers

pub mod led;

pub use led::LedIndicators;
