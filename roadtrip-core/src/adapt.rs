//! Reshape a trip to a requested number of days.
//!
//! Adaptation makes a single forward pass over the stages:
//!
//! - stages that still fit are kept unchanged;
//! - the first stage that overflows is truncated to the remaining days and
//!   every later stage is dropped;
//! - if the stages run out before the request is met, the last kept stage is
//!   stretched with the missing days.
//!
//! The result owns its stages and carries a duration of
//! `{min: sum(days), base: wanted, max: wanted}`. The input is never touched.

use std::num::NonZeroU32;

use thiserror::Error;

use crate::{Trip, TripDuration};

/// Errors returned by [`adapt`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdaptationError {
    /// The trip has no stage to truncate or stretch.
    #[error("trip '{trip_id}' has no stages to adapt")]
    NoStages {
        /// Identifier of the rejected trip.
        trip_id: String,
    },
}

/// Adapt `trip` so its stages cover exactly `days_wanted` days.
///
/// # Errors
/// Returns [`AdaptationError::NoStages`] when `trip` has no stages, since no
/// itinerary of the requested length can be built from it.
///
/// # Examples
/// ```
/// use std::num::NonZeroU32;
/// use roadtrip_core::{TripDuration, adapt};
/// use roadtrip_core::test_support::trip_with_stages;
///
/// # fn main() -> Result<(), roadtrip_core::AdaptationError> {
/// let trip = trip_with_stages("t", &[("a", 3), ("b", 4)]);
/// let days = NonZeroU32::new(5).unwrap_or(NonZeroU32::MIN);
/// let adapted = adapt(&trip, days)?;
/// let stages: Vec<_> = adapted.stages.iter().map(|s| (s.id.as_str(), s.days)).collect();
/// assert_eq!(stages, [("a", 3), ("b", 2)]);
/// assert_eq!(adapted.duration, Some(TripDuration::fixed(5)));
/// # Ok(())
/// # }
/// ```
pub fn adapt(trip: &Trip, days_wanted: NonZeroU32) -> Result<Trip, AdaptationError> {
    if trip.stages.is_empty() {
        return Err(AdaptationError::NoStages {
            trip_id: trip.id.clone(),
        });
    }
    Ok(adapt_unchecked(trip, days_wanted.get()))
}

/// Adapt `trip` without rejecting degenerate input.
///
/// A stageless trip comes back with no stages and the inconsistent duration
/// `{min: 0, base: days_wanted, max: days_wanted}`. Callers that hand the
/// result to a renderer should prefer [`adapt`].
#[must_use]
pub fn adapt_unchecked(trip: &Trip, days_wanted: u32) -> Trip {
    let mut clone = trip.clone();
    let stages = std::mem::take(&mut clone.stages);

    let mut used = 0_u32;
    let mut out_stages = Vec::with_capacity(stages.len());
    for mut stage in stages {
        if used >= days_wanted {
            break;
        }
        let remain = days_wanted - used;
        if stage.days <= remain {
            used += stage.days;
        } else {
            stage.days = remain;
            used += remain;
        }
        out_stages.push(stage);
    }

    if used < days_wanted
        && let Some(last) = out_stages.last_mut()
    {
        let extra = days_wanted - used;
        log::debug!(
            "stretching stage '{}' of trip '{}' by {extra} day(s)",
            last.id,
            trip.id
        );
        last.days += extra;
    }

    let min = out_stages
        .iter()
        .fold(0_u32, |total, stage| total.saturating_add(stage.days));
    clone.stages = out_stages;
    clone.duration = Some(TripDuration::new(
        Some(min),
        Some(days_wanted),
        Some(days_wanted),
    ));
    clone
}
