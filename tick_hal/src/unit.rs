//! Tick resolution selection.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two monotonic counters a timer reads.
///
/// Low resolution is conventionally a millisecond counter, high
/// resolution a microsecond counter. Both have the same width; only the
/// tick rate differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickUnit {
    /// Coarse counter (conventionally milliseconds since boot)
    LowRes,
    /// Fine counter (conventionally microseconds since boot)
    HighRes,
}

impl TickUnit {
    /// Encodes the unit as a single byte for atomic storage.
    pub fn as_raw(self) -> u8 {
        match self {
            TickUnit::LowRes => 0,
            TickUnit::HighRes => 1,
        }
    }

    /// Decodes a byte written by [`TickUnit::as_raw`].
    ///
    /// Unknown values decode as `LowRes` so that the decoding is total.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => TickUnit::HighRes,
            _ => TickUnit::LowRes,
        }
    }
}

impl fmt::Display for TickUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickUnit::LowRes => write!(f, "low-res"),
            TickUnit::HighRes => write!(f, "high-res"),
        }
    }
}
