//! Test helpers for building catalog workspaces on disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// A French catalog with two trips starting in Paris, one retired trip and
/// one trip without stages.
pub(super) const CATALOG_JSON: &str = r#"{
  "trips": [
    {
      "id": "paris-loire",
      "title": {"en": "Paris and the Loire", "fr": "Paris et la Loire"},
      "summary": {"en": "Capital then castles."},
      "tags": {"pace": ["relaxed"], "style": ["culture"], "transport": ["car"]},
      "duration": {"min": 5, "base": 6, "max": 7},
      "stages": [
        {"id": "paris", "name": {"en": "Paris"}, "days": 3, "lat": 48.857, "lng": 2.352},
        {"id": "tours", "name": {"en": "Tours", "fr": "Tours"}, "days": 3, "lat": 47.394, "lng": 0.684}
      ]
    },
    {
      "id": "paris-normandy",
      "title": {"en": "Paris and Normandy"},
      "tags": {"pace": ["relaxed"], "style": ["culture", "history"]},
      "duration": {"base": 6},
      "stages": [
        {"id": "paris", "days": 2, "lat": 48.857, "lng": 2.352},
        {"id": "bayeux", "days": 4, "lat": 49.276, "lng": -0.703}
      ]
    },
    {
      "id": "provence",
      "title": {"en": "Provence villages"},
      "tags": {"pace": ["relaxed"], "style": ["foodie"]},
      "duration": {"min": 4, "max": 6},
      "stages": [
        {"id": "avignon", "days": 2, "lat": 43.949, "lng": 4.806},
        {"id": "gordes", "days": 2, "lat": 43.911, "lng": 5.2}
      ]
    },
    {
      "id": "retired-alps",
      "active": false,
      "tags": {"pace": ["relaxed"], "style": ["culture"]},
      "stages": [{"id": "annecy", "days": 3}]
    },
    {
      "id": "open-road",
      "title": {"en": "Open road"}
    }
  ]
}"#;

pub(super) const ANSWERS_JSON: &str =
    r#"{"pace": "relaxed", "style": ["culture", "history"], "days": "5"}"#;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents)
        .unwrap_or_else(|err| panic!("failed to write {path}: {err}"));
}

/// Temporary directory holding a catalog and a questionnaire snapshot.
pub(super) struct Workspace {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) catalog: Utf8PathBuf,
    pub(super) answers: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("fr.itins.json");
        let answers = root.join("answers.json");
        write_utf8(&catalog, CATALOG_JSON.as_bytes());
        write_utf8(&answers, ANSWERS_JSON.as_bytes());
        Self {
            _tmp: tmp,
            root,
            catalog,
            answers,
        }
    }
}
