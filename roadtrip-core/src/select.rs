//! Rank catalog trips and pick a varied shortlist.
//!
//! Ranking scores every trip and sorts by descending score, breaking ties by
//! catalog position so equal scores keep the author's order. Picking then
//! walks the ranking twice:
//!
//! 1. keep a trip only if its [`diversity key`](crate::Trip::diversity_key)
//!    has not been seen yet;
//! 2. if the shortlist is still short, fill it from the same ranking with any
//!    trip not already picked.
//!
//! The best-scoring trip is therefore always included, and two picks share a
//! first stage only when there are too few distinct first stages to fill the
//! quota.

use std::collections::HashSet;

use crate::{Answers, Scorer, Trip};

/// Shortlist size used when the caller has no preference.
pub const DEFAULT_PICK_COUNT: usize = 3;

/// A catalog trip paired with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    /// The unmodified catalog trip.
    pub trip: &'a Trip,
    /// Score assigned by the scorer.
    pub score: i32,
    /// Position of the trip in the catalog slice.
    pub index: usize,
}

/// Score every trip and sort best first.
///
/// Ties keep catalog order.
///
/// # Examples
/// ```
/// use roadtrip_core::{Answers, Trip, rank};
/// use roadtrip_core::test_support::TagCountScorer;
///
/// let trips = [Trip::new("a"), Trip::new("b")];
/// let ranked = rank(&trips, &Answers::new(), &TagCountScorer);
/// let ids: Vec<_> = ranked.iter().map(|c| c.trip.id.as_str()).collect();
/// assert_eq!(ids, ["a", "b"]);
/// ```
pub fn rank<'a, S>(trips: &'a [Trip], answers: &Answers, scorer: &S) -> Vec<ScoredCandidate<'a>>
where
    S: Scorer + ?Sized,
{
    let mut ranked: Vec<ScoredCandidate<'a>> = trips
        .iter()
        .enumerate()
        .map(|(index, trip)| ScoredCandidate {
            trip,
            score: scorer.score(trip, answers),
            index,
        })
        .collect();
    ranked.sort_by(|lhs, rhs| {
        rhs.score
            .cmp(&lhs.score)
            .then_with(|| lhs.index.cmp(&rhs.index))
    });
    ranked
}

/// Pick up to `count` scored trips, favouring distinct first stages.
///
/// Returns `min(count, trips.len())` candidates in ranking order of
/// selection: diversified picks first, then any fill-ins.
pub fn pick_scored<'a, S>(
    trips: &'a [Trip],
    answers: &Answers,
    scorer: &S,
    count: usize,
) -> Vec<ScoredCandidate<'a>>
where
    S: Scorer + ?Sized,
{
    let ranked = rank(trips, answers, scorer);
    let mut picked: Vec<ScoredCandidate<'a>> = Vec::with_capacity(count.min(ranked.len()));
    let mut taken: HashSet<usize> = HashSet::new();
    let mut seen_keys: HashSet<&'a str> = HashSet::new();

    for candidate in &ranked {
        if picked.len() >= count {
            break;
        }
        if seen_keys.insert(candidate.trip.diversity_key()) {
            taken.insert(candidate.index);
            picked.push(*candidate);
        }
    }
    let diversified = picked.len();

    for candidate in &ranked {
        if picked.len() >= count {
            break;
        }
        if taken.insert(candidate.index) {
            picked.push(*candidate);
        }
    }

    log::debug!(
        "picked {} of {} trips ({diversified} with distinct first stages)",
        picked.len(),
        trips.len()
    );
    picked
}

/// Pick up to `count` catalog trips, favouring distinct first stages.
///
/// The returned references point at the caller's unmodified trips.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roadtrip_core::{Answers, Stage, Trip, pick};
/// use roadtrip_core::test_support::TagCountScorer;
///
/// let paris = || Stage::new("paris", 2, Coord { x: 2.35, y: 48.85 });
/// let lyon = Stage::new("lyon", 2, Coord { x: 4.83, y: 45.76 });
/// let trips = [
///     Trip::new("a").with_stage(paris()),
///     Trip::new("b").with_stage(paris()),
///     Trip::new("c").with_stage(lyon),
/// ];
/// let picked = pick(&trips, &Answers::new(), &TagCountScorer, 2);
/// let ids: Vec<_> = picked.iter().map(|t| t.id.as_str()).collect();
/// assert_eq!(ids, ["a", "c"]);
/// ```
pub fn pick<'a, S>(trips: &'a [Trip], answers: &Answers, scorer: &S, count: usize) -> Vec<&'a Trip>
where
    S: Scorer + ?Sized,
{
    pick_scored(trips, answers, scorer, count)
        .into_iter()
        .map(|candidate| candidate.trip)
        .collect()
}
