//! Preference scoring for Roadtrip catalog trips.
//!
//! [`PreferenceScorer`] implements the [`Scorer`](roadtrip_core::Scorer)
//! trait with additive, integer weights:
//!
//! - points per shared `pace`, `style` and `transport` tag;
//! - a flat bonus when any `budget` tag is shared;
//! - when the traveller asked for a length, a bonus if it fits the trip's
//!   day window, otherwise a malus capped by
//!   [`ScoreWeights::duration_malus_cap`].
//!
//! # Examples
//!
//! ```
//! use roadtrip_core::{Answers, Scorer, Trip, TripDuration};
//! use roadtrip_scorer::PreferenceScorer;
//!
//! let trip = Trip::new("t").with_duration(TripDuration::new(Some(5), None, Some(7)));
//! let scorer = PreferenceScorer::default();
//! assert_eq!(scorer.score(&trip, &Answers::new().with_days(6)), 2);
//! assert_eq!(scorer.score(&trip, &Answers::new().with_days(3)), -2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod preference;
mod weights;

pub use preference::PreferenceScorer;
pub use weights::{ScoreWeights, ScoreWeightsError};
