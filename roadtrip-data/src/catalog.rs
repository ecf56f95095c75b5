//! Per-country trip catalogs.
//!
//! A catalog file holds `{ "trips": [...] }`. Files live side by side in one
//! directory and are named `<country>.itins.json` with a lower-case country
//! code. Trips flagged `"active": false` are retired and never reach callers.

use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use roadtrip_core::Trip;
use serde_json::Value;
use thiserror::Error;

/// Errors returned when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog at {path}")]
    Open {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Path that was read.
        path: Utf8PathBuf,
    },
    /// The payload is not valid JSON.
    #[error("failed to parse catalog JSON")]
    Parse {
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A `trips` entry does not describe a trip.
    #[error(
        "catalog entry {index} ({}) is not a valid trip",
        .id.as_deref().unwrap_or("no id")
    )]
    InvalidTrip {
        /// Position of the entry in the `trips` array.
        index: usize,
        /// Identifier of the entry, when it has one.
        id: Option<String>,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Active trips of one country, in authoring order.
///
/// # Examples
/// ```
/// use roadtrip_data::Catalog;
///
/// let catalog = Catalog::from_json_str(
///     r#"{"trips": [
///         {"id": "loire", "stages": [{"id": "tours", "days": 2}]},
///         {"id": "retired", "active": false}
///     ]}"#,
/// )?;
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.find("retired").is_none());
/// # Ok::<(), roadtrip_data::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    trips: Vec<Trip>,
}

impl Catalog {
    /// Build a catalog from trips, dropping inactive ones.
    #[must_use]
    pub fn new(trips: Vec<Trip>) -> Self {
        let authored = trips.len();
        let active: Vec<Trip> = trips.into_iter().filter(|trip| trip.active).collect();
        let retired = authored.saturating_sub(active.len());
        if retired > 0 {
            debug!("dropped {retired} inactive trip(s) out of {authored}");
        }
        Self { trips: active }
    }

    /// Parse a catalog from any JSON reader.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed JSON and
    /// [`CatalogError::InvalidTrip`] for entries that are not trips.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: Value =
            serde_json::from_reader(reader).map_err(|source| CatalogError::Parse { source })?;
        Self::from_document(document)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    /// See [`Catalog::from_reader`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: Value =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse { source })?;
        Self::from_document(document)
    }

    fn from_document(document: Value) -> Result<Self, CatalogError> {
        let entries = match document {
            Value::Object(mut root) => match root.remove("trips") {
                Some(Value::Array(entries)) => entries,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        let trips = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let id = entry.get("id").and_then(Value::as_str).map(str::to_owned);
                serde_json::from_value(entry)
                    .map_err(|source| CatalogError::InvalidTrip { index, id, source })
            })
            .collect::<Result<Vec<Trip>, _>>()?;
        Ok(Self::new(trips))
    }

    /// Active trips in authoring order.
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Look up an active trip by identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    /// Number of active trips.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the catalog has no active trips.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Consume the catalog, returning its trips.
    #[must_use]
    pub fn into_trips(self) -> Vec<Trip> {
        self.trips
    }
}

/// Path of the catalog file for `country_code` inside `dir`.
///
/// # Examples
/// ```
/// use camino::Utf8Path;
/// use roadtrip_data::catalog_path;
///
/// assert_eq!(
///     catalog_path(Utf8Path::new("data/itins"), "FR"),
///     Utf8Path::new("data/itins/fr.itins.json")
/// );
/// ```
#[must_use]
pub fn catalog_path(dir: &Utf8Path, country_code: &str) -> Utf8PathBuf {
    dir.join(format!("{}.itins.json", country_code.to_ascii_lowercase()))
}

/// Read and parse the catalog stored at `path`.
///
/// # Errors
/// Returns [`CatalogError::Open`] when the file cannot be read, otherwise the
/// errors of [`Catalog::from_json_str`].
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, CatalogError> {
    let contents = roadtrip_fs::read_utf8_file(path).map_err(|source| CatalogError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    let catalog = Catalog::from_json_str(&contents)?;
    debug!("loaded {} trip(s) from {path}", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast on bad fixtures")]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE: &str = r#"{
        "country": "fr",
        "trips": [
            {
                "id": "loire-castles",
                "title": {"en": "Loire castles", "fr": "Châteaux de la Loire"},
                "tags": {"pace": ["relaxed"], "style": ["culture"]},
                "duration": {"min": 5, "base": 6, "max": 8},
                "stages": [
                    {"id": "tours", "days": 3, "lat": 47.39, "lng": 0.69},
                    {"id": "blois", "days": 3, "lat": 47.59, "lng": 1.33, "zoom": 11}
                ]
            },
            {"id": "old-riviera", "active": false, "stages": [{"id": "nice", "days": 2}]},
            {"id": "alps", "active": true, "stages": [{"id": "annecy", "days": 4}]}
        ]
    }"#;

    #[rstest]
    fn drops_inactive_trips_and_keeps_order() {
        let catalog = Catalog::from_json_str(SAMPLE).expect("valid catalog");
        let ids: Vec<&str> = catalog.trips().iter().map(|trip| trip.id.as_str()).collect();
        assert_eq!(ids, ["loire-castles", "alps"]);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "coordinate comparison needs a delta")]
    fn decodes_trip_fields() {
        let catalog = Catalog::from_json_str(SAMPLE).expect("valid catalog");
        let trip = catalog.find("loire-castles").expect("trip present");
        assert_eq!(trip.display_title("fr"), "Châteaux de la Loire");
        assert_eq!(trip.tags.pace, ["relaxed"]);
        assert_eq!(trip.duration.and_then(|d| d.base), Some(6));
        assert_eq!(trip.total_days(), 6);
        let blois = trip.stages.get(1).expect("second stage");
        assert_eq!(blois.zoom, Some(11));
        assert!((blois.location.x - 1.33).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case::no_trips_key(r#"{"country": "fr"}"#)]
    #[case::trips_not_array(r#"{"trips": {"id": "x"}}"#)]
    #[case::root_is_array(r#"[{"id": "x"}]"#)]
    #[case::empty_array(r#"{"trips": []}"#)]
    fn tolerates_missing_trip_list(#[case] json: &str) {
        let catalog = Catalog::from_json_str(json).expect("tolerated payload");
        assert!(catalog.is_empty());
    }

    #[rstest]
    fn rejects_malformed_json() {
        let err = Catalog::from_json_str("{\"trips\": [").expect_err("malformed");
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[rstest]
    fn reports_invalid_entry_position_and_id() {
        let err = Catalog::from_json_str(r#"{"trips": [{"id": "ok"}, {"id": "bad", "stages": 3}]}"#)
            .expect_err("invalid entry");
        assert!(matches!(
            &err,
            CatalogError::InvalidTrip { index: 1, id: Some(id), .. } if id == "bad"
        ));
        assert_eq!(err.to_string(), "catalog entry 1 (bad) is not a valid trip");
    }

    #[rstest]
    fn entry_without_id_is_named_in_error() {
        let err = Catalog::from_json_str(r#"{"trips": [{"stages": []}]}"#).expect_err("no id");
        assert_eq!(err.to_string(), "catalog entry 0 (no id) is not a valid trip");
    }

    #[rstest]
    fn reads_from_reader() {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes()).expect("valid catalog");
        assert_eq!(catalog.len(), 2);
    }

    #[rstest]
    #[case("fr", "itins/fr.itins.json")]
    #[case("IT", "itins/it.itins.json")]
    fn builds_catalog_path(#[case] code: &str, #[case] expected: &str) {
        assert_eq!(catalog_path(Utf8Path::new("itins"), code), Utf8Path::new(expected));
    }

    #[rstest]
    fn missing_file_reports_path() {
        let path = Utf8Path::new("definitely/not/here.itins.json");
        let err = load_catalog(path).expect_err("missing file");
        assert!(matches!(&err, CatalogError::Open { path: p, .. } if p == path));
    }
}
