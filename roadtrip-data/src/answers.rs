//! Questionnaire snapshots.
//!
//! The questionnaire front end stores whatever the traveller has filled in so
//! far, so snapshots are routinely partial and occasionally malformed. Each
//! tag category may be a list of strings or a lone string, and the day count
//! may be a number or a numeric string. Anything else reads as "no
//! preference".

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::warn;
use roadtrip_core::{Answers, TagCategory};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors returned by the strict answers readers.
#[derive(Debug, Error)]
pub enum AnswersError {
    /// The snapshot file could not be read.
    #[error("failed to read answers at {path}")]
    Open {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Path that was read.
        path: Utf8PathBuf,
    },
    /// The snapshot is not valid JSON.
    #[error("failed to parse answers JSON")]
    Parse {
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The snapshot is valid JSON but not an object.
    #[error("answers must be a JSON object")]
    NotAnObject,
}

/// Parse a questionnaire snapshot, leniently reading each field.
///
/// # Errors
/// Returns [`AnswersError::Parse`] for malformed JSON and
/// [`AnswersError::NotAnObject`] when the document is not an object.
///
/// # Examples
/// ```
/// use roadtrip_core::TagCategory;
/// use roadtrip_data::parse_answers;
///
/// let answers = parse_answers(r#"{"pace": "relaxed", "style": ["culture", 3], "days": "7"}"#)?;
/// assert_eq!(answers.get(TagCategory::Pace), ["relaxed".to_owned()]);
/// assert_eq!(answers.get(TagCategory::Style), ["culture".to_owned()]);
/// assert_eq!(answers.days, Some(7));
/// # Ok::<(), roadtrip_data::AnswersError>(())
/// ```
pub fn parse_answers(json: &str) -> Result<Answers, AnswersError> {
    let document: Value =
        serde_json::from_str(json).map_err(|source| AnswersError::Parse { source })?;
    let Value::Object(fields) = document else {
        return Err(AnswersError::NotAnObject);
    };
    Ok(answers_from_fields(&fields))
}

/// Read and parse the snapshot stored at `path`.
///
/// # Errors
/// Returns [`AnswersError::Open`] when the file cannot be read, otherwise the
/// errors of [`parse_answers`].
pub fn read_answers(path: &Utf8Path) -> Result<Answers, AnswersError> {
    let contents = roadtrip_fs::read_utf8_file(path).map_err(|source| AnswersError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    parse_answers(&contents)
}

/// Read the snapshot at `path`, falling back to empty answers.
///
/// Recommendation still works without a questionnaire, so an unreadable or
/// malformed snapshot is logged and treated as "no preferences".
#[must_use]
pub fn load_answers(path: &Utf8Path) -> Answers {
    read_answers(path).unwrap_or_else(|err| {
        warn!("ignoring questionnaire answers at {path}: {err}");
        Answers::default()
    })
}

fn answers_from_fields(fields: &Map<String, Value>) -> Answers {
    let mut answers = Answers {
        days: fields.get("days").and_then(day_count),
        ..Answers::default()
    };
    for category in TagCategory::ALL {
        if let Some(value) = fields.get(category.as_str()) {
            answers = tag_values(value)
                .into_iter()
                .fold(answers, |acc, tag| acc.with_tag(category, tag));
        }
    }
    answers
}

fn tag_values(value: &Value) -> Vec<String> {
    match value {
        Value::String(tag) => vec![tag.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

fn day_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number.as_u64().map_or_else(
            || whole_days(&number.to_string()),
            |days| u32::try_from(days).ok(),
        ),
        Value::String(text) => whole_days(text),
        _ => None,
    }
}

/// Parse a non-negative whole day count, accepting a `.0` suffix.
fn whole_days(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    trimmed.strip_suffix(".0").unwrap_or(trimmed).parse().ok()
}
