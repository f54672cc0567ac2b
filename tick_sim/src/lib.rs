//! # Simulated Tick Sources
//!
//! Deterministic [`TickSource`](tick_hal::TickSource) implementations
//! for tests and host-side demos.
//!
//! ## Implementations
//!
//! - **SimClock**: manually advanced counters, wrapping at the width
//! - **ScriptedClock**: replays scripted sample sequences
//! - **StdClock**: backed by `std::time::Instant` for host binaries
//!
//! All of them are polling-only and never block, matching the contract
//! real hardware sources have to meet.

pub mod host;
pub mod scripted;
pub mod sim;

pub use host::StdClock;
pub use scripted::{ScriptError, ScriptedClock};
pub use sim::SimClock;
