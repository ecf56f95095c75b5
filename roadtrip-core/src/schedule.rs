//! Day-by-day schedule of an itinerary.
//!
//! Numbers each stage with the inclusive, 1-based days it covers.

use std::fmt;

use crate::Stage;

/// Inclusive day span covered by one stage.
///
/// # Examples
/// ```
/// use roadtrip_core::DayRange;
///
/// assert_eq!(DayRange::new(4, 4).to_string(), "4");
/// assert_eq!(DayRange::new(1, 3).to_string(), "1–3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    /// First day, counting from 1.
    pub first: u32,
    /// Last day, inclusive.
    pub last: u32,
}

impl DayRange {
    /// Construct a range from its inclusive bounds.
    #[must_use]
    pub const fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.last > self.first {
            write!(f, "{}–{}", self.first, self.last)
        } else {
            write!(f, "{}", self.first)
        }
    }
}

/// Compute the day range of every stage, in order.
///
/// A zero-day stage is reported on the current day and does not advance the
/// schedule.
///
/// # Examples
/// ```
/// use roadtrip_core::{DayRange, day_ranges};
/// use roadtrip_core::test_support::trip_with_stages;
///
/// let trip = trip_with_stages("t", &[("a", 3), ("b", 1), ("c", 2)]);
/// assert_eq!(
///     day_ranges(&trip.stages),
///     [DayRange::new(1, 3), DayRange::new(4, 4), DayRange::new(5, 6)]
/// );
/// ```
#[must_use]
pub fn day_ranges(stages: &[Stage]) -> Vec<DayRange> {
    let mut cursor = 1_u32;
    stages
        .iter()
        .map(|stage| {
            let first = cursor;
            let last = first.saturating_add(stage.days.saturating_sub(1));
            cursor = cursor.saturating_add(stage.days);
            DayRange::new(first, last)
        })
        .collect()
}
