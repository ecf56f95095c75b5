//! Score catalog trips against a traveller's answers.
//!
//! The `Scorer` trait assigns a match score to a [`Trip`](crate::Trip)
//! given the traveller's [`Answers`](crate::Answers).

use crate::{Answers, Trip};

/// Calculate a match score for a trip.
///
/// Higher scores indicate a better match. Scores are unbounded and may be
/// negative. Implementations must be thread-safe (`Send` + `Sync`), pure and
/// total: missing information contributes nothing rather than failing.
///
/// # Examples
///
/// ```rust
/// use roadtrip_core::{Answers, Scorer, Trip};
///
/// struct StageCountScorer;
///
/// impl Scorer for StageCountScorer {
///     fn score(&self, trip: &Trip, _answers: &Answers) -> i32 {
///         i32::try_from(trip.stages.len()).unwrap_or(i32::MAX)
///     }
/// }
///
/// let trip = Trip::new("empty");
/// assert_eq!(StageCountScorer.score(&trip, &Answers::new()), 0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `trip` according to `answers`.
    fn score(&self, trip: &Trip, answers: &Answers) -> i32;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, trip: &Trip, answers: &Answers) -> i32 {
        (**self).score(trip, answers)
    }
}
