//! Board-agnostic core logic for the door watch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Contact sampling types and debounce filtering
//! - Wrapping millisecond timers and the shared tick counter
//! - State machine for standby, open and alarm
//! - The door monitor that ties them together
//! - Collaborator traits and the poll loop driving them
//! - Configuration types and the embedded config parser

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod contact;
pub mod monitor;
pub mod state;
pub mod time;
pub mod traits;
pub mod watch;

pub use contact::{ContactState, Debouncer};
pub use monitor::{DoorMonitor, GraceCounter, MonitorOutput};
pub use state::{Event, MonitorState};
pub use watch::DoorWatch;
