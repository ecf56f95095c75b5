//! The traveller's questionnaire answers.
//!
//! Answers are produced elsewhere and treated as read-only input. Every
//! category defaults to empty and a missing or zero day count means the
//! traveller has no length preference.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TagCategory;

/// Preference snapshot used to score trips.
///
/// # Examples
/// ```
/// use roadtrip_core::{Answers, TagCategory};
///
/// let answers = Answers::new()
///     .with_tag(TagCategory::Pace, "relaxed")
///     .with_days(7);
/// assert_eq!(answers.get(TagCategory::Pace), ["relaxed".to_owned()]);
/// assert_eq!(answers.preferred_days(), Some(7));
/// assert_eq!(Answers::new().with_days(0).preferred_days(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Answers {
    /// Wanted pace tags.
    pub pace: Vec<String>,
    /// Wanted style tags.
    pub style: Vec<String>,
    /// Wanted transport tags.
    pub transport: Vec<String>,
    /// Wanted budget tags.
    pub budget: Vec<String>,
    /// Requested trip length in days; `None` or `Some(0)` means no preference.
    pub days: Option<u32>,
}

impl Answers {
    /// Construct answers with no preferences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the wanted tags for `category`.
    #[must_use]
    pub fn get(&self, category: TagCategory) -> &[String] {
        match category {
            TagCategory::Pace => &self.pace,
            TagCategory::Style => &self.style,
            TagCategory::Transport => &self.transport,
            TagCategory::Budget => &self.budget,
        }
    }

    /// Add a wanted tag while returning `self` for chaining.
    #[must_use]
    pub fn with_tag(mut self, category: TagCategory, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        match category {
            TagCategory::Pace => self.pace.push(tag),
            TagCategory::Style => self.style.push(tag),
            TagCategory::Transport => self.transport.push(tag),
            TagCategory::Budget => self.budget.push(tag),
        }
        self
    }

    /// Set the requested trip length while returning `self` for chaining.
    #[must_use]
    pub const fn with_days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self
    }

    /// Return the requested day count when it is a positive number.
    #[must_use]
    pub fn preferred_days(&self) -> Option<u32> {
        self.days.filter(|&days| days > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(0), None)]
    #[case(Some(1), Some(1))]
    #[case(Some(14), Some(14))]
    fn preferred_days_ignores_zero(#[case] days: Option<u32>, #[case] expected: Option<u32>) {
        let answers = Answers {
            days,
            ..Answers::default()
        };
        assert_eq!(answers.preferred_days(), expected);
    }

    #[rstest]
    fn with_tag_targets_category() {
        let answers = Answers::new()
            .with_tag(TagCategory::Budget, "mid")
            .with_tag(TagCategory::Style, "culture");
        assert_eq!(answers.budget, vec!["mid".to_owned()]);
        assert_eq!(answers.style, vec!["culture".to_owned()]);
        assert!(answers.pace.is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn missing_keys_deserialize_as_empty() {
        let answers: Answers =
            serde_json::from_str(r#"{"pace":["relaxed"]}"#).expect("valid answers");
        assert_eq!(answers.pace, vec!["relaxed".to_owned()]);
        assert!(answers.transport.is_empty());
        assert_eq!(answers.days, None);
    }
}
