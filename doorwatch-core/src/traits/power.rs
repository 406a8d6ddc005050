//! Power management trait

use core::future::Future;

/// Trait for the platform's low-power sleep
///
/// [`arm_wake_on_contact_change`](PowerControl::arm_wake_on_contact_change)
/// must be called before
/// [`request_low_power_sleep`](PowerControl::request_low_power_sleep),
/// otherwise the sleep may never end.
pub trait PowerControl {
    /// Arm the wake-up source so the next contact transition resumes the loop
    ///
    /// The contact level at arming is the reference: a sleep requested
    /// later ends as soon as the contact differs from it, even if the
    /// change happened before the sleep started.
    fn arm_wake_on_contact_change(&mut self);

    /// Suspend until the armed wake event
    ///
    /// Returns only after an external wake event. Implementations that
    /// were not armed return immediately.
    fn request_low_power_sleep(&mut self) -> impl Future<Output = ()>;
}
