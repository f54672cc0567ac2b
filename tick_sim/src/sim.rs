//! Manually advanced simulation clock.

use tick_hal::{TickSource, TickUnit, TickWord};

/// A tick source whose counters move only when the test tells them to.
///
/// Both counters advance independently and wrap at the width `W`, so a
/// test can park either counter just below the wrap point and step it
/// across.
///
/// # Examples
///
/// ```
/// use tick_hal::{TickSource, TickUnit};
/// use tick_sim::SimClock;
///
/// let mut clock = SimClock::<u32>::new();
/// clock.advance_low(250);
/// assert_eq!(clock.poll(TickUnit::LowRes), 250);
/// assert_eq!(clock.poll(TickUnit::HighRes), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SimClock<W: TickWord = u32> {
    low: W,
    high: W,
}

impl<W: TickWord> SimClock<W> {
    /// Creates a clock with both counters at zero.
    pub fn new() -> Self {
        Self {
            low: W::ZERO,
            high: W::ZERO,
        }
    }

    /// Creates a clock with the counters at explicit values.
    ///
    /// Useful for starting a scenario near the top of the counter
    /// range.
    pub fn at(low: W, high: W) -> Self {
        Self { low, high }
    }

    /// Advances the coarse counter, wrapping at the width.
    pub fn advance_low(&mut self, ticks: W) {
        self.low = self.low.wrapping_add(ticks);
    }

    /// Advances the fine counter, wrapping at the width.
    pub fn advance_high(&mut self, ticks: W) {
        self.high = self.high.wrapping_add(ticks);
    }

    /// Advances the counter selected by `unit`.
    pub fn advance(&mut self, unit: TickUnit, ticks: W) {
        match unit {
            TickUnit::LowRes => self.advance_low(ticks),
            TickUnit::HighRes => self.advance_high(ticks),
        }
    }
}

impl<W: TickWord> Default for SimClock<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: TickWord> TickSource<W> for SimClock<W> {
    fn poll_low_res(&mut self) -> W {
        self.low
    }

    fn poll_high_res(&mut self) -> W {
        self.high
    }
}
