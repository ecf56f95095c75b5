//! Core domain types and engines for the Roadtrip recommender.
//!
//! The crate models catalog [`Trip`]s, their [`Stage`]s and the traveller's
//! [`Answers`], and provides the two pure engines that operate on them:
//! [`pick`] ranks a catalog through a [`Scorer`] and returns a varied
//! shortlist, and [`adapt`] reshapes one trip to a requested day count.
//! Nothing here performs I/O or mutates its inputs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adapt;
pub mod answers;
pub mod schedule;
pub mod scorer;
pub mod select;
pub mod stage;
pub mod tags;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod text;
pub mod trip;

pub use adapt::{AdaptationError, adapt, adapt_unchecked};
pub use answers::Answers;
pub use schedule::{DayRange, day_ranges};
pub use scorer::Scorer;
pub use select::{DEFAULT_PICK_COUNT, ScoredCandidate, pick, pick_scored, rank};
pub use stage::Stage;
pub use tags::{TagCategory, TagSet, overlap_count};
pub use text::{FALLBACK_LANGUAGE, LocalizedText};
pub use trip::{Trip, TripDuration};
