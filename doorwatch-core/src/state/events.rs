//! Events that trigger state transitions

use crate::contact::ContactState;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Contact events (debounced)
    /// Contact confirmed open
    ContactOpened,
    /// Contact confirmed closed
    ContactClosed,

    // Timer events
    /// Door has been open for the whole grace period
    GraceExpired,
}

impl Event {
    /// Event for a newly confirmed contact state
    pub fn from_contact(contact: ContactState) -> Self {
        match contact {
            ContactState::Open => Event::ContactOpened,
            ContactState::Closed => Event::ContactClosed,
        }
    }
}
