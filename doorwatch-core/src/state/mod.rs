//! State machine for the door monitor
//!
//! Defines the authoritative runtime behavior of the monitor.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::MonitorState;
