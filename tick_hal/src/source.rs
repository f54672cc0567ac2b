//! Monotonic tick source trait.

use crate::unit::TickUnit;
use crate::word::TickWord;

/// A pair of monotonic tick counters at a single width.
///
/// Implementations expose a coarse and a fine counter (conventionally
/// milliseconds and microseconds since an arbitrary epoch such as
/// boot). Both counters share the width `W` and wrap silently to zero
/// at `W::MAX`.
///
/// # Implementation Notes
///
/// - Must advance monotonically between wraps; no drift-correction
///   jumps that move a counter backwards
/// - Must not block
/// - Tick rates are implementation-defined; only the low/high
///   convention is fixed
///
/// # Examples
///
/// ```
/// use tick_hal::{TickSource, TickUnit};
///
/// struct Uptime {
///     millis: u32,
///     micros: u32,
/// }
///
/// impl TickSource<u32> for Uptime {
///     fn poll_low_res(&mut self) -> u32 {
///         self.millis
///     }
///
///     fn poll_high_res(&mut self) -> u32 {
///         self.micros
///     }
/// }
///
/// let mut clock = Uptime { millis: 5, micros: 5_000 };
/// assert_eq!(clock.poll(TickUnit::LowRes), 5);
/// assert_eq!(clock.poll(TickUnit::HighRes), 5_000);
/// ```
pub trait TickSource<W: TickWord> {
    /// Samples the coarse counter.
    fn poll_low_res(&mut self) -> W;

    /// Samples the fine counter.
    fn poll_high_res(&mut self) -> W;

    /// Samples the counter selected by `unit`.
    fn poll(&mut self, unit: TickUnit) -> W {
        match unit {
            TickUnit::LowRes => self.poll_low_res(),
            TickUnit::HighRes => self.poll_high_res(),
        }
    }
}
