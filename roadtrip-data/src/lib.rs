//! Catalog and questionnaire loading for the roadtrip engine.
//!
//! Responsibilities:
//! - Read per-country trip catalogs from JSON files.
//! - Read questionnaire snapshots, tolerating partial or malformed input.
//!
//! Boundaries:
//! - Do not encode scoring or selection rules (live in `roadtrip-core` and
//!   `roadtrip-scorer`).
//! - All file access goes through `roadtrip-fs`.
#![forbid(unsafe_code)]

mod answers;
mod catalog;

pub use answers::{AnswersError, load_answers, parse_answers, read_answers};
pub use catalog::{Catalog, CatalogError, catalog_path, load_catalog};
