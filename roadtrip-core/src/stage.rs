//! Itinerary stages.
//!
//! A stage is one stop of a trip: the traveller spends `days` nights there
//! before moving on. Coordinates are WGS84 with `x = longitude` and
//! `y = latitude`; catalog payloads spell them `lng` and `lat`.

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::LocalizedText;

/// One leg of an itinerary.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roadtrip_core::Stage;
///
/// let stage = Stage::new("paris", 3, Coord { x: 2.35, y: 48.85 });
/// assert_eq!(stage.days, 3);
/// assert_eq!(stage.display_name("fr"), "paris");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StageRecord", into = "StageRecord"))]
pub struct Stage {
    /// Stage identifier, unique within its trip.
    pub id: String,
    /// Localized display name.
    pub name: LocalizedText,
    /// Localized description.
    pub desc: LocalizedText,
    /// Nights spent at this stop.
    pub days: u32,
    /// Position with `x = lng` and `y = lat`.
    pub location: Coord<f64>,
    /// Map zoom hint for the presentation layer.
    pub zoom: Option<u8>,
}

impl Stage {
    /// Construct a stage without localized text or zoom hint.
    #[must_use]
    pub fn new(id: impl Into<String>, days: u32, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: LocalizedText::new(),
            desc: LocalizedText::new(),
            days,
            location,
            zoom: None,
        }
    }

    /// Name shown for this stage, falling back to English and then the id.
    #[must_use]
    pub fn display_name(&self, lang: &str) -> &str {
        self.name.resolve(lang).unwrap_or(&self.id)
    }
}

/// Wire shape of a stage as found in catalog payloads.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StageRecord {
    id: String,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    name: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    desc: LocalizedText,
    #[serde(default)]
    days: u32,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zoom: Option<u8>,
}

#[cfg(feature = "serde")]
impl From<StageRecord> for Stage {
    fn from(record: StageRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            desc: record.desc,
            days: record.days,
            location: Coord {
                x: record.lng,
                y: record.lat,
            },
            zoom: record.zoom,
        }
    }
}

#[cfg(feature = "serde")]
impl From<Stage> for StageRecord {
    fn from(stage: Stage) -> Self {
        Self {
            id: stage.id,
            name: stage.name,
            desc: stage.desc,
            days: stage.days,
            lat: stage.location.y,
            lng: stage.location.x,
            zoom: stage.zoom,
        }
    }
}
