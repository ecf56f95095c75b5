//! Catalog trips.
//!
//! A trip is a pre-authored itinerary: ordered stages plus the tags and
//! duration window used for matching. Catalog authors are expected to keep
//! `sum(stage.days) == duration.base`, but nothing here enforces that on
//! input; only adaptation guarantees a consistent duration on its output.

use geo::{BoundingRect, MultiPoint, Point, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{LocalizedText, Stage, TagSet};

/// Day window a trip is designed for.
///
/// Any bound may be missing; scoring falls back to `base` and then to the
/// traveller's own request.
///
/// # Examples
/// ```
/// use roadtrip_core::TripDuration;
///
/// let duration = TripDuration::fixed(5);
/// assert_eq!((duration.min, duration.base, duration.max), (Some(5), Some(5), Some(5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TripDuration {
    /// Shortest sensible length in days.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min: Option<u32>,
    /// Length the stages were authored for.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub base: Option<u32>,
    /// Longest sensible length in days.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max: Option<u32>,
}

impl TripDuration {
    /// Construct a window with explicit bounds.
    #[must_use]
    pub const fn new(min: Option<u32>, base: Option<u32>, max: Option<u32>) -> Self {
        Self { min, base, max }
    }

    /// Construct a window where `min == base == max == days`.
    #[must_use]
    pub const fn fixed(days: u32) -> Self {
        Self::new(Some(days), Some(days), Some(days))
    }
}

/// A catalog itinerary.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roadtrip_core::{Stage, Trip};
///
/// let trip = Trip::new("loire")
///     .with_stage(Stage::new("tours", 2, Coord { x: 0.69, y: 47.39 }))
///     .with_stage(Stage::new("blois", 1, Coord { x: 1.33, y: 47.59 }));
/// assert_eq!(trip.total_days(), 3);
/// assert_eq!(trip.diversity_key(), "tours");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trip {
    /// Catalog identifier.
    pub id: String,
    /// Display title.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "LocalizedText::is_empty")
    )]
    pub title: LocalizedText,
    /// Short description.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "LocalizedText::is_empty")
    )]
    pub summary: LocalizedText,
    /// Matching tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: TagSet,
    /// Designed day window, when the author provided one.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub duration: Option<TripDuration>,
    /// Chronologically ordered stops.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stages: Vec<Stage>,
    /// Inactive trips are dropped by the catalog loader.
    #[cfg_attr(feature = "serde", serde(default = "active_by_default"))]
    pub active: bool,
}

#[cfg(feature = "serde")]
const fn active_by_default() -> bool {
    true
}

impl Trip {
    /// Construct an active trip with no stages, tags or duration.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: LocalizedText::new(),
            summary: LocalizedText::new(),
            tags: TagSet::new(),
            duration: None,
            stages: Vec::new(),
            active: true,
        }
    }

    /// Append a stage while returning `self` for chaining.
    #[must_use]
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Replace the tags while returning `self` for chaining.
    #[must_use]
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Replace the duration window while returning `self` for chaining.
    #[must_use]
    pub const fn with_duration(mut self, duration: TripDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sum of the stage day counts.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.stages
            .iter()
            .fold(0_u32, |total, stage| total.saturating_add(stage.days))
    }

    /// Key used to keep shortlists varied: the first stage id, or the trip
    /// id when the trip has no stages.
    #[must_use]
    pub fn diversity_key(&self) -> &str {
        self.stages.first().map_or(self.id.as_str(), |stage| stage.id.as_str())
    }

    /// Title shown for this trip, falling back to English and then the id.
    #[must_use]
    pub fn display_title(&self, lang: &str) -> &str {
        self.title.resolve(lang).unwrap_or(&self.id)
    }

    /// Summary shown for this trip, falling back to English and then empty.
    #[must_use]
    pub fn display_summary(&self, lang: &str) -> &str {
        self.summary.resolve(lang).unwrap_or_default()
    }

    /// Smallest rectangle containing every stage, for fitting a map view.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let points: MultiPoint<f64> = self
            .stages
            .iter()
            .map(|stage| Point::from(stage.location))
            .collect();
        points.bounding_rect()
    }
}
