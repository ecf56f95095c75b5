//! Test helpers: compact trip builders and a simple `Scorer` used by unit,
//! behaviour and property tests.
//!
//! Gated behind the `test-support` feature (and `cfg(test)`).

use geo::Coord;

use crate::{Answers, Scorer, Stage, TagCategory, Trip, overlap_count};

/// Build a stage with placeholder coordinates.
#[must_use]
pub fn stage(id: &str, days: u32) -> Stage {
    Stage::new(id, days, Coord { x: 0.0, y: 0.0 })
}

/// Build an active trip from `(stage id, days)` pairs.
#[must_use]
pub fn trip_with_stages(id: &str, stages: &[(&str, u32)]) -> Trip {
    stages
        .iter()
        .fold(Trip::new(id), |trip, &(stage_id, days)| {
            trip.with_stage(stage(stage_id, days))
        })
}

/// Test `Scorer` adding one point per shared tag in every category.
///
/// Durations are ignored.
#[derive(Debug, Copy, Clone, Default)]
pub struct TagCountScorer;

impl Scorer for TagCountScorer {
    fn score(&self, trip: &Trip, answers: &Answers) -> i32 {
        let shared: usize = TagCategory::ALL
            .iter()
            .map(|&category| overlap_count(trip.tags.get(category), answers.get(category)))
            .sum();
        i32::try_from(shared).unwrap_or(i32::MAX)
    }
}
