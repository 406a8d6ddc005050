//! State machine definition
//!
//! Indicator and sleep behavior is a function of the current state.

use core::fmt;

use super::events::Event;

/// Monitor states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorState {
    /// Door closed, monitoring; the only state that may sleep
    #[default]
    Standby,
    /// Door open, grace period counting
    Open,
    /// Door open past the grace period, alarm indication active
    Alarm,
}

impl MonitorState {
    /// Check if the status indicator is lit on entry to this state
    pub fn status_indicated(&self) -> bool {
        matches!(self, MonitorState::Open | MonitorState::Alarm)
    }

    /// Check if this state drives the alarm indicator
    pub fn is_alarm(&self) -> bool {
        matches!(self, MonitorState::Alarm)
    }

    /// Check if this state allows low-power sleep
    pub fn sleep_allowed(&self) -> bool {
        matches!(self, MonitorState::Standby)
    }

    /// Check if the door is considered open in this state
    pub fn door_open(&self) -> bool {
        matches!(self, MonitorState::Open | MonitorState::Alarm)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use MonitorState::*;

        match (self, event) {
            // Standby transitions
            (Standby, ContactOpened) => Open,

            // Open transitions
            (Open, GraceExpired) => Alarm,
            (Open, ContactClosed) => Standby,

            // Alarm transitions
            (Alarm, ContactClosed) => Standby,

            // Default: stay in current state
            _ => self,
        }
    }
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorState::Standby => f.write_str("Standby"),
            MonitorState::Open => f.write_str("Open"),
            MonitorState::Alarm => f.write_str("Alarm"),
        }
    }
}
