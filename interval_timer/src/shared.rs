//! Interval timer for instances shared with interrupt handlers.

use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use tick_hal::{TickSource, TickUnit, TickWord};

use crate::config::TimerConfig;
use crate::timer::IntervalTimer;

/// An [`IntervalTimer`] whose fields live in atomic cells.
///
/// For the single-core case where a timer is touched both from normal
/// control flow and from an interrupt-style handler: every operation
/// takes `&self` and performs only individual atomic loads and stores
/// of the fields, with relaxed ordering. There are no critical
/// sections; the contract is field-level atomicity, which requires the
/// target to provide atomic load/store at the width `W`.
///
/// A handler that interrupts a rearm in progress can observe one field
/// already updated and another not yet. Each field it reads is still a
/// whole, valid word; torn reads of a single field cannot happen.
///
/// The timer logic itself is not duplicated here: the rollover
/// arithmetic lives in [`TickWord`] and the scheduling rules match
/// [`IntervalTimer`] field for field.
pub struct SharedIntervalTimer<W: TickWord = u32> {
    delay: W::Atomic,
    unit: AtomicU8,
    expiry: W::Atomic,
}

impl<W: TickWord> SharedIntervalTimer<W> {
    /// Creates a shared timer that is already expired.
    pub fn new_expired(src: &mut impl TickSource<W>) -> Self {
        Self {
            delay: W::new_atomic(W::ZERO),
            unit: AtomicU8::new(TickUnit::LowRes.as_raw()),
            expiry: W::new_atomic(src.poll_low_res()),
        }
    }

    /// Creates a shared timer expiring `delay` ticks of `unit` from
    /// now.
    pub fn new(delay: W, unit: TickUnit, src: &mut impl TickSource<W>) -> Self {
        Self {
            delay: W::new_atomic(delay),
            unit: AtomicU8::new(unit.as_raw()),
            expiry: W::new_atomic(src.poll(unit).wrapping_add(delay)),
        }
    }

    /// Rearms with a new delay and unit, relative to the current tick
    /// sample.
    pub fn start(&self, delay: W, unit: TickUnit, src: &mut impl TickSource<W>) {
        W::store(&self.delay, delay);
        self.unit.store(unit.as_raw(), Ordering::Relaxed);
        W::store(&self.expiry, src.poll(unit).wrapping_add(delay));
    }

    /// Rearms with the stored delay and unit, relative to the current
    /// tick sample.
    pub fn restart(&self, src: &mut impl TickSource<W>) {
        let unit = self.unit();
        W::store(&self.expiry, src.poll(unit).wrapping_add(self.delay()));
    }

    /// Rearms from the previous scheduled expiry, without resampling.
    pub fn repeat(&self) {
        W::store(&self.expiry, self.expiry().wrapping_add(self.delay()));
    }

    /// Rearms from a [`TimerConfig`], relative to the current sample.
    pub fn start_from_config(&self, config: TimerConfig<W>, src: &mut impl TickSource<W>) {
        self.start(config.delay, config.unit, src);
    }

    /// Forces the timer to be expired now. The stored delay is
    /// untouched.
    pub fn expire(&self, src: &mut impl TickSource<W>) {
        let unit = self.unit();
        W::store(&self.expiry, src.poll(unit));
    }

    /// Returns whether the expiry tick has been reached. Same
    /// half-range caveat as [`IntervalTimer::is_expired`].
    pub fn is_expired(&self, src: &mut impl TickSource<W>) -> bool {
        let unit = self.unit();
        src.poll(unit).has_reached(self.expiry())
    }

    /// Returns the wrapped tick count since the scheduled expiry.
    pub fn elapsed(&self, src: &mut impl TickSource<W>) -> W {
        let unit = self.unit();
        src.poll(unit).wrapping_sub(self.expiry())
    }

    /// Returns the delay the timer was last armed with.
    pub fn delay(&self) -> W {
        W::load(&self.delay)
    }

    /// Returns the unit the timer was last armed in.
    pub fn unit(&self) -> TickUnit {
        TickUnit::from_raw(self.unit.load(Ordering::Relaxed))
    }

    /// Returns the delay and unit together.
    pub fn delay_and_unit(&self) -> (W, TickUnit) {
        (self.delay(), self.unit())
    }

    /// Returns the absolute tick value the timer expires at.
    pub fn expiry(&self) -> W {
        W::load(&self.expiry)
    }

    /// Reads the fields into a plain value for inspection.
    pub fn snapshot(&self) -> IntervalTimer<W> {
        IntervalTimer::from_parts(self.delay(), self.unit(), self.expiry())
    }
}

impl<W: TickWord> fmt::Debug for SharedIntervalTimer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedIntervalTimer")
            .field("delay", &self.delay())
            .field("unit", &self.unit())
            .field("expiry", &self.expiry())
            .finish()
    }
}
