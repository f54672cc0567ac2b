#![no_std]

//! # Tick Hardware Abstraction Layer
//!
//! This crate defines the tick-counter abstraction traits.
//!
//! ## Philosophy
//!
//! **Time is a service, not a global variable.**
//!
//! Every operation that needs the current tick count receives a tick
//! source explicitly. This crate does NOT:
//! - Provide wall-clock time (no UTC, no timezones)
//! - Block or sleep (polling only)
//! - Assume any particular counter width or tick rate
//!
//! ## Design Principles
//!
//! 1. **Monotonic between wraps**: Counters advance until they silently
//!    wrap to zero at their maximum value
//! 2. **Non-blocking**: Sampling always returns immediately
//! 3. **Width-explicit**: The counter width is a type parameter, not an
//!    assumption; rollover arithmetic lives with the width
//! 4. **Testable**: Sources can be faked for deterministic tests

pub mod source;
pub mod unit;
pub mod word;

pub use source::TickSource;
pub use unit::TickUnit;
pub use word::TickWord;
