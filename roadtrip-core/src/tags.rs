//! Preference tag categories shared by trips and answers.
//!
//! Both sides carry the same four categories. Each category is an ordered
//! list of free-form tag strings which may be empty but is never absent.
//!
//! # Examples
//! ```
//! use roadtrip_core::TagCategory;
//!
//! assert_eq!(TagCategory::Pace.as_str(), "pace");
//! assert_eq!(TagCategory::Budget.to_string(), "budget");
//! ```

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A preference dimension used to match trips against answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagCategory {
    /// How intense the trip feels (`relaxed`, `balanced`, ...).
    Pace,
    /// What the trip is about (`culture`, `foodie`, ...).
    Style,
    /// How the traveller moves around (`car`, `train`, ...).
    Transport,
    /// Spending level (`budget`, `premium`, ...).
    Budget,
}

impl TagCategory {
    /// Every category in declaration order.
    pub const ALL: [Self; 4] = [Self::Pace, Self::Style, Self::Transport, Self::Budget];

    /// Return the category as the lowercase key used in catalog payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pace => "pace",
            Self::Style => "style",
            Self::Transport => "transport",
            Self::Budget => "budget",
        }
    }
}

impl std::fmt::Display for TagCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TagCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pace" => Ok(Self::Pace),
            "style" => Ok(Self::Style),
            "transport" => Ok(Self::Transport),
            "budget" => Ok(Self::Budget),
            _ => Err(format!("unknown tag category '{s}'")),
        }
    }
}

/// Tags attached to a catalog trip, one list per [`TagCategory`].
///
/// # Examples
/// ```
/// use roadtrip_core::{TagCategory, TagSet};
///
/// let tags = TagSet::new()
///     .with_tag(TagCategory::Pace, "relaxed")
///     .with_tag(TagCategory::Style, "culture");
/// assert_eq!(tags.get(TagCategory::Pace), ["relaxed".to_owned()]);
/// assert!(tags.get(TagCategory::Budget).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TagSet {
    /// Pace tags.
    pub pace: Vec<String>,
    /// Style tags.
    pub style: Vec<String>,
    /// Transport tags.
    pub transport: Vec<String>,
    /// Budget tags.
    pub budget: Vec<String>,
}

impl TagSet {
    /// Construct a tag set with every category empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the tags for `category`.
    #[must_use]
    pub fn get(&self, category: TagCategory) -> &[String] {
        match category {
            TagCategory::Pace => &self.pace,
            TagCategory::Style => &self.style,
            TagCategory::Transport => &self.transport,
            TagCategory::Budget => &self.budget,
        }
    }

    /// Mutable access to the tags for `category`.
    pub fn get_mut(&mut self, category: TagCategory) -> &mut Vec<String> {
        match category {
            TagCategory::Pace => &mut self.pace,
            TagCategory::Style => &mut self.style,
            TagCategory::Transport => &mut self.transport,
            TagCategory::Budget => &mut self.budget,
        }
    }

    /// Append a tag while returning `self` for chaining.
    #[must_use]
    pub fn with_tag(mut self, category: TagCategory, tag: impl Into<String>) -> Self {
        self.get_mut(category).push(tag.into());
        self
    }
}

/// Count the distinct `wanted` tags that also appear in `offered`.
///
/// Both sides are treated as sets: a tag repeated in `wanted` is counted once.
///
/// # Examples
/// ```
/// use roadtrip_core::overlap_count;
///
/// let offered = ["culture".to_owned(), "nature".to_owned()];
/// let wanted = ["culture".to_owned(), "foodie".to_owned()];
/// assert_eq!(overlap_count(&offered, &wanted), 1);
/// ```
#[must_use]
pub fn overlap_count(offered: &[String], wanted: &[String]) -> usize {
    wanted
        .iter()
        .map(String::as_str)
        .filter(|tag| offered.iter().any(|candidate| candidate == tag))
        .collect::<BTreeSet<_>>()
        .len()
}
