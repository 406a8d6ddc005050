//! Property-based tests for the door monitor.
//!
//! These tests use proptest to check the monitor invariants across
//! random contact sequences and tick spacings.

use doorwatch_core::config::MonitorConfig;
use doorwatch_core::{ContactState, DoorMonitor, MonitorState};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_contact()(open in any::<bool>()) -> ContactState {
        if open { ContactState::Open } else { ContactState::Closed }
    }
}

prop_compose! {
    fn arbitrary_config()(
        debounce_ms in 0u32..100,
        grace_step_ms in 100u32..2000,
        grace_steps in any::<u8>(),
        alarm_blink_ms in 50u32..1000,
    ) -> MonitorConfig {
        MonitorConfig {
            debounce_ms,
            grace_step_ms,
            grace_steps,
            alarm_blink_ms,
            tick_interval_ms: 10,
        }
    }
}

prop_compose! {
    /// Contact samples with the time step before each sample
    fn arbitrary_samples()(
        samples in prop::collection::vec((arbitrary_contact(), 0u32..600), 1..400)
    ) -> Vec<(ContactState, u32)> {
        samples
    }
}

proptest! {
    #[test]
    fn state_is_always_one_of_three(
        config in arbitrary_config(),
        start in any::<u32>(),
        samples in arbitrary_samples(),
    ) {
        let mut monitor = DoorMonitor::new(config, start);
        let mut now = start;
        for (raw, step) in samples {
            now = now.wrapping_add(step);
            let out = monitor.poll(raw, now);
            prop_assert!(matches!(
                out.state,
                MonitorState::Standby | MonitorState::Open | MonitorState::Alarm
            ));
            prop_assert_eq!(out.state, monitor.state());
        }
    }

    #[test]
    fn alarm_indicator_only_in_alarm(
        config in arbitrary_config(),
        samples in arbitrary_samples(),
    ) {
        let mut monitor = DoorMonitor::new(config, 0);
        let mut now = 0u32;
        for (raw, step) in samples {
            now = now.wrapping_add(step);
            let out = monitor.poll(raw, now);
            if out.alarm_on {
                prop_assert_eq!(out.state, MonitorState::Alarm);
            }
            match out.state {
                MonitorState::Standby => prop_assert!(!out.status_on),
                MonitorState::Alarm => prop_assert!(out.status_on),
                MonitorState::Open => {}
            }
        }
    }

    #[test]
    fn sleep_only_from_confirmed_closed_standby(
        config in arbitrary_config(),
        samples in arbitrary_samples(),
    ) {
        let mut monitor = DoorMonitor::new(config, 0);
        let mut now = 0u32;
        for (raw, step) in samples {
            now = now.wrapping_add(step);
            let out = monitor.poll(raw, now);
            if out.sleep_requested {
                prop_assert_eq!(out.state, MonitorState::Standby);
                prop_assert_eq!(out.contact, ContactState::Closed);
                prop_assert!(!out.alarm_on);
                prop_assert!(!out.status_on);
            }
        }
    }

    #[test]
    fn sleep_needs_a_full_interval_of_closed_samples(
        config in arbitrary_config(),
        samples in arbitrary_samples(),
    ) {
        let mut monitor = DoorMonitor::new(config, 0);
        let mut now = 0u32;
        // First sample of the current run of raw Closed readings
        let mut closed_since: Option<u32> = None;
        for (raw, step) in samples {
            now = now.wrapping_add(step);
            closed_since = match raw {
                ContactState::Closed => Some(closed_since.unwrap_or(now)),
                ContactState::Open => None,
            };
            let out = monitor.poll(raw, now);
            if out.sleep_requested {
                let since = closed_since.expect("sleep without a closed sample");
                prop_assert!(
                    now - since >= config.debounce_ms,
                    "sleep at {} after closed run from {}", now, since
                );
            }
        }
    }

    #[test]
    fn one_sleep_request_per_standby_entry(
        config in arbitrary_config(),
        samples in arbitrary_samples(),
    ) {
        let mut monitor = DoorMonitor::new(config, 0);
        let mut now = 0u32;
        let mut closed_since: Option<u32> = None;
        // Start-up counts as an entry into Standby
        let mut owed = true;
        for (raw, step) in samples {
            now = now.wrapping_add(step);
            closed_since = match raw {
                ContactState::Closed => Some(closed_since.unwrap_or(now)),
                ContactState::Open => None,
            };
            let out = monitor.poll(raw, now);
            if let Some(t) = out.transition {
                if t.to == MonitorState::Standby {
                    owed = true;
                }
            }
            if out.sleep_requested {
                prop_assert!(owed, "second sleep request at {}", now);
                owed = false;
            }

            // Once the door has read closed for a full interval in
            // Standby, the owed request must have been issued
            let stable = closed_since.is_some_and(|since| now - since >= config.debounce_ms);
            if out.state == MonitorState::Standby && stable {
                prop_assert!(!owed, "no sleep request by {}", now);
            }
        }
    }

    #[test]
    fn grace_counter_never_wraps(
        grace_steps in any::<u8>(),
        gaps in prop::collection::vec(0u32..100_000, 1..200),
    ) {
        let config = MonitorConfig {
            grace_step_ms: 1,
            grace_steps,
            ..MonitorConfig::default()
        };
        let mut monitor = DoorMonitor::new(config, 0);
        let mut now = 0u32;
        let mut last = 0u8;
        for gap in gaps {
            now = now.wrapping_add(gap);
            monitor.poll(ContactState::Open, now);
            prop_assert!(monitor.grace_count() >= last);
            last = monitor.grace_count();
        }
        if monitor.grace_count() >= grace_steps {
            prop_assert_eq!(monitor.state(), MonitorState::Alarm);
        }
    }

    #[test]
    fn glitches_shorter_than_debounce_are_ignored(
        debounce_ms in 20u32..200,
        glitch in 1u32..20,
    ) {
        let config = MonitorConfig {
            debounce_ms,
            ..MonitorConfig::default()
        };
        let mut monitor = DoorMonitor::new(config, 0);
        monitor.poll(ContactState::Closed, 1000);

        let glitch_ms = glitch.min(debounce_ms - 1);
        monitor.poll(ContactState::Open, 2000);
        let out = monitor.poll(ContactState::Open, 2000 + glitch_ms);
        prop_assert_eq!(out.state, MonitorState::Standby);
        let out = monitor.poll(ContactState::Closed, 2000 + glitch_ms + 1);
        prop_assert_eq!(out.state, MonitorState::Standby);
    }
}
