//! Scripted tick source for step-by-step scenarios.

use thiserror::Error;
use tick_hal::{TickSource, TickUnit, TickWord};

/// Errors detected while validating a sample script.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScriptError {
    /// Consecutive samples moved backwards under wrapped comparison.
    #[error("{unit} script steps backwards at index {index}")]
    BackwardStep {
        /// Which counter's script is invalid
        unit: TickUnit,
        /// Index of the offending sample
        index: usize,
    },
}

/// One counter's replay state.
#[derive(Debug, Clone)]
struct Replay<W> {
    samples: Vec<W>,
    index: usize,
}

impl<W: TickWord> Replay<W> {
    fn validate(unit: TickUnit, samples: &[W]) -> Result<(), ScriptError> {
        for i in 1..samples.len() {
            // A wraparound step is a legal forward move; only a step
            // that reads as backwards at this width is rejected.
            if !samples[i].has_reached(samples[i - 1]) {
                return Err(ScriptError::BackwardStep { unit, index: i });
            }
        }
        Ok(())
    }

    fn next(&mut self) -> W {
        if self.index < self.samples.len() {
            let value = self.samples[self.index];
            self.index += 1;
            value
        } else {
            // Exhausted scripts hold their final sample.
            self.samples.last().copied().unwrap_or(W::ZERO)
        }
    }
}

/// A tick source that replays scripted sample sequences.
///
/// Each poll of a counter consumes the next scripted sample for that
/// counter; once a script runs out, further polls return its last
/// sample. Scripts may step across the wrap point, but may not step
/// backwards.
///
/// # Examples
///
/// ```
/// use tick_hal::{TickSource, TickUnit};
/// use tick_sim::ScriptedClock;
///
/// let mut clock = ScriptedClock::new(vec![0u32, 100, 250], vec![]).unwrap();
/// assert_eq!(clock.poll(TickUnit::LowRes), 0);
/// assert_eq!(clock.poll(TickUnit::LowRes), 100);
/// assert_eq!(clock.poll(TickUnit::LowRes), 250);
/// assert_eq!(clock.poll(TickUnit::LowRes), 250);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedClock<W: TickWord = u32> {
    low: Replay<W>,
    high: Replay<W>,
}

impl<W: TickWord> ScriptedClock<W> {
    /// Builds a scripted clock from per-counter sample sequences.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::BackwardStep`] if either script contains
    /// a sample that precedes the one before it under wrapped
    /// comparison.
    pub fn new(low: Vec<W>, high: Vec<W>) -> Result<Self, ScriptError> {
        Replay::validate(TickUnit::LowRes, &low)?;
        Replay::validate(TickUnit::HighRes, &high)?;
        Ok(Self {
            low: Replay { samples: low, index: 0 },
            high: Replay { samples: high, index: 0 },
        })
    }

    /// Returns how many scripted samples remain for `unit`.
    pub fn remaining(&self, unit: TickUnit) -> usize {
        let replay = match unit {
            TickUnit::LowRes => &self.low,
            TickUnit::HighRes => &self.high,
        };
        replay.samples.len().saturating_sub(replay.index)
    }
}

impl<W: TickWord> TickSource<W> for ScriptedClock<W> {
    fn poll_low_res(&mut self) -> W {
        self.low.next()
    }

    fn poll_high_res(&mut self) -> W {
        self.high.next()
    }
}
