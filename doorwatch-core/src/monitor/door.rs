//! Door monitor
//!
//! One tick of the control loop is one call to [`DoorMonitor::poll`]:
//!
//! ```text
//!   raw contact ──► Debouncer ──► contact event ──┐
//!                                                 ▼
//!   now_ms ──► grace timer ──► GraceExpired ──► MonitorState::transition
//!                                                 │
//!          blink timer ◄── Alarm ◄────────────────┤
//!                                                 ▼
//!                                          MonitorOutput
//! ```
//!
//! The monitor never blocks and never touches hardware; the caller
//! applies the returned [`MonitorOutput`].

use crate::config::MonitorConfig;
use crate::contact::{ContactState, Debouncer};
use crate::state::{Event, MonitorState};
use crate::time::ElapsedTimer;

use super::grace::GraceCounter;

/// A state change that happened during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: MonitorState,
    pub to: MonitorState,
}

/// Result of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorOutput {
    /// State after this poll
    pub state: MonitorState,
    /// Debounced contact after this poll
    pub contact: ContactState,
    /// Desired status indicator level
    pub status_on: bool,
    /// Desired alarm indicator level
    pub alarm_on: bool,
    /// The platform should arm the wake source and sleep now
    pub sleep_requested: bool,
    /// State change during this poll, if any
    pub transition: Option<Transition>,
}

/// Door monitor state machine
///
/// Owns the only copy of [`MonitorState`]; all changes go through
/// [`MonitorState::transition`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DoorMonitor {
    config: MonitorConfig,
    state: MonitorState,
    debouncer: Debouncer,
    grace: GraceCounter,
    grace_timer: ElapsedTimer,
    blink_timer: ElapsedTimer,
    /// Current status indicator level (slow blink while Open)
    status_on: bool,
    /// Current alarm indicator level (only ever true in Alarm)
    alarm_on: bool,
    /// One sleep request is owed for the current Standby episode
    sleep_pending: bool,
}

impl DoorMonitor {
    /// Create a monitor in Standby with the contact assumed closed
    ///
    /// If the door is actually open, the first polls confirm it and move
    /// to Open; otherwise a sleep is requested once the closed contact has
    /// been sampled over a full debounce interval, counted from the first
    /// poll.
    pub fn new(config: MonitorConfig, now_ms: u32) -> Self {
        Self {
            config,
            state: MonitorState::Standby,
            debouncer: Debouncer::new(ContactState::Closed, config.debounce_ms),
            grace: GraceCounter::new(),
            grace_timer: ElapsedTimer::new(config.grace_step_ms, now_ms),
            blink_timer: ElapsedTimer::new(config.alarm_blink_ms, now_ms),
            status_on: false,
            alarm_on: false,
            sleep_pending: true,
        }
    }

    /// Run one pass of the transition logic
    pub fn poll(&mut self, raw: ContactState, now_ms: u32) -> MonitorOutput {
        let from = self.state;
        let contact = self.debouncer.update(raw, now_ms);

        // Contact edges, as seen by the state machine
        if contact.is_open() != self.state.door_open() {
            self.dispatch(Event::from_contact(contact), now_ms);
        }

        if self.state.door_open() {
            let steps = self.grace_timer.take_intervals(now_ms);
            self.grace.advance(steps);

            if self.state == MonitorState::Open && steps % 2 == 1 {
                self.status_on = !self.status_on;
            }

            if self.grace.is_expired(self.config.grace_steps) {
                self.dispatch(Event::GraceExpired, now_ms);
            }
        }

        // Non-blocking blink: the contact is re-sampled on every tick
        if self.state.is_alarm() && self.blink_timer.poll(now_ms) {
            self.alarm_on = !self.alarm_on;
        }

        let sleep_requested = self.sleep_pending
            && self.state.sleep_allowed()
            && contact.is_closed()
            && self.debouncer.is_settled();
        if sleep_requested {
            self.sleep_pending = false;
        }

        MonitorOutput {
            state: self.state,
            contact,
            status_on: self.status_on,
            alarm_on: self.alarm_on,
            sleep_requested,
            transition: (from != self.state).then_some(Transition {
                from,
                to: self.state,
            }),
        }
    }

    /// Resume after a low-power sleep
    ///
    /// Time spent asleep does not count as observed stability: the closed
    /// contact must be confirmed for a fresh debounce interval before the
    /// next sleep request.
    pub fn on_wake(&mut self, now_ms: u32) {
        self.debouncer.restart_stability();
        self.grace_timer.restart(now_ms);
        self.blink_timer.restart(now_ms);
        if self.state.sleep_allowed() {
            self.sleep_pending = true;
        }
    }

    /// Feed an event through the state machine and run entry actions
    fn dispatch(&mut self, event: Event, now_ms: u32) {
        let next = self.state.transition(event);
        if next == self.state {
            return;
        }
        self.state = next;
        self.status_on = next.status_indicated();

        match next {
            MonitorState::Open => {
                self.grace.reset();
                self.grace_timer.restart(now_ms);
                self.alarm_on = false;
            }
            MonitorState::Alarm => {
                self.alarm_on = true;
                self.blink_timer.restart(now_ms);
            }
            MonitorState::Standby => {
                self.grace.reset();
                self.alarm_on = false;
                self.sleep_pending = true;
            }
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Debounced contact state
    pub fn contact(&self) -> ContactState {
        self.debouncer.confirmed()
    }

    /// Whole grace steps counted since the door opened
    pub fn grace_count(&self) -> u8 {
        self.grace.count()
    }

    /// Current status indicator level
    pub fn status_indicator(&self) -> bool {
        self.status_on
    }

    /// Current alarm indicator level
    pub fn alarm_indicator(&self) -> bool {
        self.alarm_on
    }

    /// Check if a sleep request is still owed for this Standby episode
    pub fn sleep_pending(&self) -> bool {
        self.sleep_pending
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}
