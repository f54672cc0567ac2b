//! Counter-width abstraction and rollover-safe ordering.
//!
//! A tick counter is a fixed-width unsigned integer that silently wraps
//! to zero at its maximum value. Comparing two counter values therefore
//! cannot use ordinary `<`/`>`: a sample taken just after a wrap is
//! numerically tiny but logically *later* than a sample taken just
//! before it. The classic fix is to subtract in wrapping unsigned
//! arithmetic and reinterpret the result as a signed value of the same
//! width; the sign then gives the correct ordering as long as the two
//! values are less than half the counter range apart.
//!
//! [`TickWord`] packages that idiom per width, so the half-range limit
//! is a property of the chosen type rather than a hardcoded platform
//! assumption.

use core::fmt;
use core::sync::atomic::{AtomicU16, AtomicU32, AtomicU64, Ordering};

/// An unsigned counter word with rollover-safe ordering.
///
/// Implemented for `u16`, `u32`, and `u64`. The associated
/// [`Atomic`](TickWord::Atomic) type is the matching atomic cell, used
/// for instances shared with interrupt-style contexts; targets must
/// support plain atomic load/store at this width (no read-modify-write
/// is required).
pub trait TickWord: Copy + Eq + Ord + fmt::Debug + fmt::Display {
    /// Width-matched atomic cell for shared storage.
    type Atomic: Send + Sync;

    /// The zero tick value.
    const ZERO: Self;
    /// The value the counter wraps after.
    const MAX: Self;
    /// Largest overdue or remaining magnitude the signed comparison can
    /// still order correctly. Beyond this the result silently inverts.
    const HALF_RANGE: Self;

    /// Wrapping addition at this width.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Wrapping subtraction at this width.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Rollover-safe "at or past": true when the wrapped difference
    /// `self - mark` is non-negative reinterpreted at this width's
    /// signed type.
    ///
    /// Valid while `self` and `mark` are less than
    /// [`Self::HALF_RANGE`] apart.
    fn has_reached(self, mark: Self) -> bool;

    /// Creates an atomic cell holding `value`.
    fn new_atomic(value: Self) -> Self::Atomic;

    /// Atomically loads the cell (relaxed).
    fn load(cell: &Self::Atomic) -> Self;

    /// Atomically stores into the cell (relaxed).
    fn store(cell: &Self::Atomic, value: Self);
}

macro_rules! impl_tick_word {
    ($word:ty, $signed:ty, $atomic:ty) => {
        impl TickWord for $word {
            type Atomic = $atomic;

            const ZERO: Self = 0;
            const MAX: Self = <$word>::MAX;
            const HALF_RANGE: Self = <$word>::MAX / 2;

            fn wrapping_add(self, rhs: Self) -> Self {
                <$word>::wrapping_add(self, rhs)
            }

            fn wrapping_sub(self, rhs: Self) -> Self {
                <$word>::wrapping_sub(self, rhs)
            }

            fn has_reached(self, mark: Self) -> bool {
                (<$word>::wrapping_sub(self, mark) as $signed) >= 0
            }

            fn new_atomic(value: Self) -> Self::Atomic {
                <$atomic>::new(value)
            }

            fn load(cell: &Self::Atomic) -> Self {
                cell.load(Ordering::Relaxed)
            }

            fn store(cell: &Self::Atomic, value: Self) {
                cell.store(value, Ordering::Relaxed)
            }
        }
    };
}

impl_tick_word!(u16, i16, AtomicU16);
impl_tick_word!(u32, i32, AtomicU32);
impl_tick_word!(u64, i64, AtomicU64);
