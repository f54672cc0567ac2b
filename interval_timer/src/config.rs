//! Serializable timer settings.

use serde::{Deserialize, Serialize};
use tick_hal::TickUnit;

/// A delay and unit pair, as found in settings files.
///
/// Arming from a config is identical to arming with the same values
/// directly; the type exists so host tooling can ship polling cadences
/// as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig<W = u32> {
    /// Interval length in ticks of `unit`
    pub delay: W,
    /// Which counter the interval is measured against
    pub unit: TickUnit,
}
