//! Localized catalog text.
//!
//! Catalog authors provide titles, summaries and stage descriptions as maps
//! from language code to text. Lookups fall back to English, mirroring what
//! the presentation layer shows when a translation is missing.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Language used when the requested translation is missing.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Text keyed by language code.
///
/// # Examples
/// ```
/// use roadtrip_core::LocalizedText;
///
/// let text = LocalizedText::new()
///     .with("en", "Loire castles")
///     .with("fr", "Châteaux de la Loire");
/// assert_eq!(text.resolve("fr"), Some("Châteaux de la Loire"));
/// assert_eq!(text.resolve("de"), Some("Loire castles"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Construct an empty text map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(lang, text);
        self
    }

    /// Insert or replace a translation.
    pub fn insert(&mut self, lang: impl Into<String>, text: impl Into<String>) {
        self.0.insert(lang.into(), text.into());
    }

    /// Return the text for `lang`, else the English text.
    ///
    /// Empty strings count as missing.
    #[must_use]
    pub fn resolve(&self, lang: &str) -> Option<&str> {
        self.get(lang).or_else(|| self.get(FALLBACK_LANGUAGE))
    }

    /// Return `true` when no translation is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn get(&self, lang: &str) -> Option<&str> {
        self.0
            .get(lang)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedText
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(lang, text)| (lang.into(), text.into()))
                .collect(),
        )
    }
}
