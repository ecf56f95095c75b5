//! Facade crate for the Roadtrip recommendation engine.
//!
//! This crate re-exports the core domain types and engines, and exposes the
//! preference scorer and catalog loaders behind feature flags.
//!
//! # Examples
//! ```
//! use roadtrip_engine::{Answers, PreferenceScorer, TagCategory, TagSet, Trip, pick};
//!
//! let catalog = vec![
//!     Trip::new("coast"),
//!     Trip::new("castles").with_tags(TagSet::new().with_tag(TagCategory::Style, "culture")),
//! ];
//! let answers = Answers::new().with_tag(TagCategory::Style, "culture");
//! let picked = pick(&catalog, &answers, &PreferenceScorer::default(), 1);
//! assert_eq!(picked.first().map(|trip| trip.id.as_str()), Some("castles"));
//! ```

#![forbid(unsafe_code)]

pub use roadtrip_core::{
    AdaptationError, Answers, DayRange, LocalizedText, ScoredCandidate, Scorer, Stage,
    TagCategory, TagSet, Trip, TripDuration, adapt, adapt_unchecked, day_ranges, pick,
    pick_scored, rank,
};

#[cfg(feature = "test-support")]
pub use roadtrip_core::test_support;

#[cfg(feature = "scorer")]
pub use roadtrip_scorer::{PreferenceScorer, ScoreWeights, ScoreWeightsError};

#[cfg(feature = "catalog")]
pub use roadtrip_data::{
    AnswersError, Catalog, CatalogError, catalog_path, load_answers, load_catalog, parse_answers,
};
