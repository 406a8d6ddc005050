//! Grace period counter

/// Whole grace steps counted while the door is open
///
/// Saturates at `u8::MAX` instead of wrapping, and a saturated counter
/// is always expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GraceCounter {
    count: u8,
}

impl GraceCounter {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Add elapsed grace steps, clamping at the maximum
    pub fn advance(&mut self, steps: u32) {
        let steps = u8::try_from(steps).unwrap_or(u8::MAX);
        self.count = self.count.saturating_add(steps);
    }

    /// Check the counter against a threshold (`>=`, never `==`)
    pub fn is_expired(&self, threshold: u8) -> bool {
        self.count >= threshold
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}
