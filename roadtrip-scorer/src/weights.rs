//! Tunable weights for preference scoring.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Points awarded by [`PreferenceScorer`](crate::PreferenceScorer).
///
/// Weights must be non-negative: a negative tag weight would make an extra
/// shared tag lower the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Points per shared pace tag.
    pub pace: i32,
    /// Points per shared style tag.
    pub style: i32,
    /// Points per shared transport tag.
    pub transport: i32,
    /// Flat bonus when any budget tag is shared.
    pub budget: i32,
    /// Bonus when the requested length fits the trip's day window.
    pub duration_fit: i32,
    /// Largest malus applied when the requested length misses the window.
    pub duration_malus_cap: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            pace: 2,
            style: 1,
            transport: 1,
            budget: 1,
            duration_fit: 2,
            duration_malus_cap: 2,
        }
    }
}

/// Errors raised when validating [`ScoreWeights`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreWeightsError {
    /// A weight was below zero.
    #[error("weight `{field}` must not be negative (got {value})")]
    Negative {
        /// Name of the offending weight.
        field: &'static str,
        /// Rejected value.
        value: i32,
    },
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError::Negative`] for the first negative weight.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        let fields = [
            ("pace", self.pace),
            ("style", self.style),
            ("transport", self.transport),
            ("budget", self.budget),
            ("duration_fit", self.duration_fit),
            ("duration_malus_cap", self.duration_malus_cap),
        ];
        match fields.into_iter().find(|&(_, value)| value < 0) {
            Some((field, value)) => Err(ScoreWeightsError::Negative { field, value }),
            None => Ok(self),
        }
    }
}
