#![no_std]

//! # Interval Timer
//!
//! A non-blocking, rollover-safe interval timer for polled embedded
//! code.
//!
//! ## Philosophy
//!
//! **All waiting is cooperative.**
//!
//! A timer is three words of state and some wrapping arithmetic. It
//! never blocks, never sleeps, and never registers callbacks; the
//! caller polls [`IntervalTimer::is_expired`] whenever it gets around
//! to it. Whether the timer has expired is never stored, only
//! recomputed against the tick source on each query, so there is no
//! expired flag to go stale.
//!
//! ## Design Principles
//!
//! 1. **Rollover-safe**: comparisons survive the tick counter wrapping
//!    to zero, via wrapped-difference sign checks
//! 2. **Total API**: every operation accepts every input; nothing
//!    fails, throws, or returns a sentinel
//! 3. **Width-parameterized**: the counter width is a type parameter,
//!    so the wraparound horizon is the integrator's choice
//! 4. **One logic path**: the interrupt-shared variant stores the same
//!    state in atomics and reuses the same arithmetic
//!
//! ## The half-range limit
//!
//! The wrapped-sign comparison orders two counter values correctly only
//! while they are less than half the counter range apart. A timer left
//! unpolled for longer than that silently reads as unexpired again
//! (about 24.8 days overdue on a 32-bit millisecond counter before that
//! happens). This is a documented caller obligation, not a detected
//! error.

pub mod config;
pub mod shared;
pub mod timer;

pub use config::TimerConfig;
pub use shared::SharedIntervalTimer;
pub use timer::IntervalTimer;
