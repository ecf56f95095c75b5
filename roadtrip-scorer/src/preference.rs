//! Fixed-weight preference scoring.
//!
//! Each shared tag earns points per category, a shared budget tag earns a
//! flat bonus, and when the traveller asked for a trip length the trip's day
//! window adds a fit bonus or a capped malus. The malus cap keeps a badly
//! sized trip from losing more than a couple of points to length alone.

#![forbid(unsafe_code)]

use roadtrip_core::{Answers, Scorer, TagCategory, Trip, TripDuration, overlap_count};

use crate::{ScoreWeights, ScoreWeightsError};

/// Scorer matching trip tags and duration against questionnaire answers.
///
/// # Examples
/// ```
/// use roadtrip_core::{Answers, Scorer, TagCategory, TagSet, Trip};
/// use roadtrip_scorer::PreferenceScorer;
///
/// let trip = Trip::new("t").with_tags(
///     TagSet::new()
///         .with_tag(TagCategory::Pace, "relaxed")
///         .with_tag(TagCategory::Style, "culture"),
/// );
/// let answers = Answers::new()
///     .with_tag(TagCategory::Pace, "relaxed")
///     .with_tag(TagCategory::Style, "culture")
///     .with_tag(TagCategory::Style, "foodie");
/// assert_eq!(PreferenceScorer::default().score(&trip, &answers), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceScorer {
    weights: ScoreWeights,
}

impl PreferenceScorer {
    /// Construct a scorer from custom weights.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a weight is negative.
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    fn tag_points(&self, trip: &Trip, answers: &Answers) -> i32 {
        let shared = |category| overlap_count(trip.tags.get(category), answers.get(category));
        let per_tag = |weight: i32, category| {
            let count = i32::try_from(shared(category)).unwrap_or(i32::MAX);
            weight.saturating_mul(count)
        };

        let budget = if shared(TagCategory::Budget) > 0 {
            self.weights.budget
        } else {
            0
        };
        per_tag(self.weights.pace, TagCategory::Pace)
            .saturating_add(per_tag(self.weights.style, TagCategory::Style))
            .saturating_add(per_tag(self.weights.transport, TagCategory::Transport))
            .saturating_add(budget)
    }

    fn duration_points(&self, duration: Option<TripDuration>, days: u32) -> i32 {
        let window = duration.unwrap_or_default();
        // A zero base carries no information.
        let base = window.base.filter(|&base| base > 0);
        let min = window.min.or(base).unwrap_or(days);
        let max = window.max.or(base).unwrap_or(days);

        if min <= days && days <= max {
            return self.weights.duration_fit;
        }
        let delta = if days < min { min - days } else { days - max };
        let malus = i32::try_from(delta)
            .unwrap_or(i32::MAX)
            .min(self.weights.duration_malus_cap);
        -malus
    }
}

impl Scorer for PreferenceScorer {
    fn score(&self, trip: &Trip, answers: &Answers) -> i32 {
        let mut score = self.tag_points(trip, answers);
        if let Some(days) = answers.preferred_days() {
            score = score.saturating_add(self.duration_points(trip.duration, days));
        }
        log::trace!("trip '{}' scored {score}", trip.id);
        score
    }
}
