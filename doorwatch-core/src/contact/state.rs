//! Contact state of the door sensor

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-level reading of the door contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContactState {
    /// Door is open (reed contact released)
    Open,
    /// Door is closed (reed contact held by the magnet)
    Closed,
}

impl ContactState {
    /// Map a pin level to a contact state
    ///
    /// `open_level` is the level the pin reads while the door is open.
    pub fn from_level(high: bool, open_level: bool) -> Self {
        if high == open_level {
            ContactState::Open
        } else {
            ContactState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == ContactState::Open
    }

    pub fn is_closed(self) -> bool {
        self == ContactState::Closed
    }
}

impl fmt::Display for ContactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactState::Open => f.write_str("Open"),
            ContactState::Closed => f.write_str("Closed"),
        }
    }
}
