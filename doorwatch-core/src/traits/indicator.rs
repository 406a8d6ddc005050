//! Indicator output trait

/// The two indicators on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorKind {
    /// Steady "awake and watching" indicator (green LED)
    Status,
    /// Blinking alarm indicator (red LED)
    Alarm,
}

/// Trait for driving the indicators
pub trait IndicatorOutput {
    /// Switch one indicator on or off
    fn set_indicator(&mut self, kind: IndicatorKind, on: bool);

    /// Switch both indicators off
    fn all_off(&mut self) {
        self.set_indicator(IndicatorKind::Status, false);
        self.set_indicator(IndicatorKind::Alarm, false);
    }
}
