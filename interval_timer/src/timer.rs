//! The polled interval timer.

use tick_hal::{TickSource, TickUnit, TickWord};

use crate::config::TimerConfig;

/// A rollover-safe interval timer polled against a [`TickSource`].
///
/// The timer stores a requested delay, the unit it was armed in, and
/// the absolute tick value at which it expires. It holds no reference
/// to its clock; every query takes the tick source as an argument, so
/// the same timer can be checked from wherever the clock happens to be
/// reachable.
///
/// Expiry is decided by wrapped-difference sign, which stays correct
/// across counter wraparound as long as the timer is polled at least
/// once per half counter range (see the crate docs).
///
/// # Examples
///
/// ```
/// use interval_timer::IntervalTimer;
/// use tick_hal::TickUnit;
/// use tick_sim::SimClock;
///
/// let mut clock = SimClock::<u32>::new();
/// let mut timer = IntervalTimer::new(1_000, TickUnit::LowRes, &mut clock);
///
/// assert!(!timer.is_expired(&mut clock));
/// clock.advance_low(1_000);
/// assert!(timer.is_expired(&mut clock));
///
/// // Rearm from the previous scheduled expiry: no drift accumulates
/// // however late the poll was.
/// timer.repeat();
/// assert_eq!(timer.expiry(), 2_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer<W: TickWord = u32> {
    delay: W,
    unit: TickUnit,
    expiry: W,
}

impl<W: TickWord> IntervalTimer<W> {
    /// Creates a timer that is already expired.
    ///
    /// Delay is zero and the unit is low-res; the first `start` gives
    /// the timer its real interval.
    pub fn new_expired(src: &mut impl TickSource<W>) -> Self {
        Self {
            delay: W::ZERO,
            unit: TickUnit::LowRes,
            expiry: src.poll_low_res(),
        }
    }

    /// Creates a timer expiring `delay` ticks of `unit` from now.
    pub fn new(delay: W, unit: TickUnit, src: &mut impl TickSource<W>) -> Self {
        Self {
            delay,
            unit,
            expiry: src.poll(unit).wrapping_add(delay),
        }
    }

    /// Creates a timer armed from a [`TimerConfig`].
    pub fn from_config(config: TimerConfig<W>, src: &mut impl TickSource<W>) -> Self {
        Self::new(config.delay, config.unit, src)
    }

    pub(crate) fn from_parts(delay: W, unit: TickUnit, expiry: W) -> Self {
        Self { delay, unit, expiry }
    }

    /// Rearms with a new delay and unit, relative to the current tick
    /// sample. A zero delay arms the timer already expired.
    pub fn start(&mut self, delay: W, unit: TickUnit, src: &mut impl TickSource<W>) {
        self.delay = delay;
        self.unit = unit;
        self.expiry = src.poll(unit).wrapping_add(delay);
    }

    /// Rearms with the stored delay and unit, relative to the current
    /// tick sample.
    pub fn restart(&mut self, src: &mut impl TickSource<W>) {
        self.expiry = src.poll(self.unit).wrapping_add(self.delay);
    }

    /// Rearms from the previous scheduled expiry, without resampling.
    ///
    /// The next expiry lands exactly one delay after the last one, so a
    /// periodic caller does not drift by however long it took to notice
    /// the expiry. Called long after expiry, the schedule catches up
    /// with one immediate expiry per missed period.
    pub fn repeat(&mut self) {
        self.expiry = self.expiry.wrapping_add(self.delay);
    }

    /// Rearms from a [`TimerConfig`], relative to the current sample.
    pub fn start_from_config(&mut self, config: TimerConfig<W>, src: &mut impl TickSource<W>) {
        self.start(config.delay, config.unit, src);
    }

    /// Forces the timer to be expired now.
    ///
    /// The stored delay is untouched; a later `repeat` advances by the
    /// original delay from this forced point.
    pub fn expire(&mut self, src: &mut impl TickSource<W>) {
        self.expiry = src.poll(self.unit);
    }

    /// Returns whether the expiry tick has been reached.
    ///
    /// Correct across counter wraparound while the true overdue or
    /// remaining magnitude is under half the counter range; beyond that
    /// the answer silently inverts.
    pub fn is_expired(&self, src: &mut impl TickSource<W>) -> bool {
        src.poll(self.unit).has_reached(self.expiry)
    }

    /// Returns the wrapped tick count since the scheduled expiry.
    ///
    /// Before expiry this is the two's-complement encoding of the
    /// (negative) ticks remaining; reinterpret it at the signed width
    /// to read "ticks until expiry".
    pub fn elapsed(&self, src: &mut impl TickSource<W>) -> W {
        src.poll(self.unit).wrapping_sub(self.expiry)
    }

    /// Returns the delay the timer was last armed with.
    pub fn delay(&self) -> W {
        self.delay
    }

    /// Returns the unit the timer was last armed in.
    pub fn unit(&self) -> TickUnit {
        self.unit
    }

    /// Returns the delay and unit together.
    pub fn delay_and_unit(&self) -> (W, TickUnit) {
        (self.delay, self.unit)
    }

    /// Returns the absolute tick value the timer expires at.
    pub fn expiry(&self) -> W {
        self.expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tick_sim::SimClock;

    #[test]
    fn test_new_expired_is_expired_immediately() {
        let mut clock = SimClock::<u32>::at(5_000, 90_000);
        let timer = IntervalTimer::new_expired(&mut clock);

        assert!(timer.is_expired(&mut clock));
        assert_eq!(timer.delay(), 0);
        assert_eq!(timer.unit(), TickUnit::LowRes);
    }

    #[test]
    fn test_zero_delay_start_is_expired_immediately() {
        let mut clock = SimClock::<u32>::new();
        let mut timer = IntervalTimer::new(100, TickUnit::HighRes, &mut clock);
        timer.start(0, TickUnit::HighRes, &mut clock);

        assert!(timer.is_expired(&mut clock));
    }

    #[test]
    fn test_expires_after_delay_elapses() {
        let mut clock = SimClock::<u32>::at(5_000, 0);
        let timer = IntervalTimer::new(1_000, TickUnit::LowRes, &mut clock);

        assert_eq!(timer.expiry(), 6_000);
        assert!(!timer.is_expired(&mut clock));

        clock.advance_low(999);
        assert!(!timer.is_expired(&mut clock));

        clock.advance_low(1);
        assert!(timer.is_expired(&mut clock));
    }

    #[test]
    fn test_unit_selection_is_respected() {
        let mut clock = SimClock::<u32>::new();
        let timer = IntervalTimer::new(100, TickUnit::HighRes, &mut clock);

        // Advancing the other counter does nothing.
        clock.advance_low(1_000);
        assert!(!timer.is_expired(&mut clock));

        clock.advance_high(100);
        assert!(timer.is_expired(&mut clock));
    }

    #[test]
    fn test_repeat_advances_from_schedule_not_from_now() {
        let mut clock = SimClock::<u32>::at(5_000, 0);
        let mut timer = IntervalTimer::new(1_000, TickUnit::LowRes, &mut clock);

        // Notice the expiry 700 ticks late.
        clock.advance_low(1_700);
        assert!(timer.is_expired(&mut clock));

        timer.repeat();
        assert_eq!(timer.expiry(), 7_000);
        assert!(!timer.is_expired(&mut clock));
    }

    #[test]
    fn test_repeat_catches_up_after_long_gap() {
        let mut clock = SimClock::<u32>::new();
        let mut timer = IntervalTimer::new(10, TickUnit::LowRes, &mut clock);

        // Three whole periods go unobserved.
        clock.advance_low(35);
        let mut immediate = 0;
        while timer.is_expired(&mut clock) {
            timer.repeat();
            immediate += 1;
        }

        assert_eq!(immediate, 3);
        assert_eq!(timer.expiry(), 40);
    }

    #[test]
    fn test_restart_rebases_on_current_sample() {
        let mut clock = SimClock::<u32>::at(5_000, 0);
        let mut timer = IntervalTimer::new(1_000, TickUnit::LowRes, &mut clock);

        clock.advance_low(1_700);
        timer.restart(&mut clock);

        // Unlike repeat, the new expiry is measured from "now".
        assert_eq!(timer.expiry(), 7_700);
        assert!(!timer.is_expired(&mut clock));
    }

    #[test]
    fn test_expire_forces_expiry_and_keeps_delay() {
        let mut clock = SimClock::<u32>::at(5_000, 0);
        let mut timer = IntervalTimer::new(1_000, TickUnit::LowRes, &mut clock);

        timer.expire(&mut clock);
        assert!(timer.is_expired(&mut clock));
        assert_eq!(timer.delay(), 1_000);

        // A later repeat advances by the original delay from the
        // forced point.
        timer.repeat();
        assert_eq!(timer.expiry(), 6_000);
    }

    #[test]
    fn test_expiry_survives_counter_wraparound() {
        let mut clock = SimClock::<u16>::at(u16::MAX - 50, 0);
        let timer = IntervalTimer::new(100, TickUnit::LowRes, &mut clock);

        // Not spuriously expired at construction, even though the
        // expiry tick is numerically tiny.
        assert_eq!(timer.expiry(), 49);
        assert!(!timer.is_expired(&mut clock));

        clock.advance_low(99);
        assert!(!timer.is_expired(&mut clock));

        clock.advance_low(1);
        assert!(timer.is_expired(&mut clock));
    }

    #[test]
    fn test_elapsed_counts_from_expiry() {
        let mut clock = SimClock::<u32>::at(5_000, 0);
        let timer = IntervalTimer::new(1_000, TickUnit::LowRes, &mut clock);

        // 1000 ticks short of expiry reads as -1000 at the signed
        // width.
        assert_eq!(timer.elapsed(&mut clock) as i32, -1_000);

        clock.advance_low(1_250);
        assert_eq!(timer.elapsed(&mut clock), 250);
    }

    #[test]
    fn test_accessors_track_latest_arm() {
        let mut clock = SimClock::<u32>::at(5_000, 90_000);
        let mut timer = IntervalTimer::new_expired(&mut clock);

        timer.start(400, TickUnit::HighRes, &mut clock);
        assert_eq!(timer.delay(), 400);
        assert_eq!(timer.unit(), TickUnit::HighRes);
        assert_eq!(timer.delay_and_unit(), (400, TickUnit::HighRes));
        assert_eq!(timer.expiry(), 90_400);

        timer.repeat();
        assert_eq!(timer.expiry(), 90_800);
        assert_eq!(timer.delay(), 400);
    }

    #[test]
    fn test_from_config_matches_explicit_arm() {
        let config = TimerConfig {
            delay: 1_000u32,
            unit: TickUnit::LowRes,
        };

        let mut clock = SimClock::<u32>::at(5_000, 0);
        let timer = IntervalTimer::from_config(config, &mut clock);
        assert_eq!(timer.expiry(), 6_000);

        let mut rearmed = IntervalTimer::new_expired(&mut clock);
        rearmed.start_from_config(config, &mut clock);
        assert_eq!(rearmed.expiry(), 6_000);
    }

    #[test]
    fn test_overdue_beyond_half_range_reads_unexpired() {
        let mut clock = SimClock::<u16>::new();
        let timer = IntervalTimer::new(10, TickUnit::LowRes, &mut clock);

        // Leave the timer unpolled past half the counter range: the
        // wrapped sign flips and the timer silently reads as unexpired
        // again. Documented hazard, not an error.
        clock.advance_low(10 + u16::HALF_RANGE);
        assert!(timer.is_expired(&mut clock));

        clock.advance_low(1);
        assert!(!timer.is_expired(&mut clock));
    }
}
