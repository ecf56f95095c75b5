//! Error types emitted by the roadtrip CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use roadtrip_core::AdaptationError;
use roadtrip_data::CatalogError;
use thiserror::Error;

/// Errors emitted by the roadtrip CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A day count option was zero where a length is required.
    #[error("--{field} must be at least 1")]
    ZeroDays { field: &'static str },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Loading the trip catalog failed.
    #[error("failed to load catalog {path:?}: {source}")]
    Catalog {
        path: Utf8PathBuf,
        #[source]
        source: CatalogError,
    },
    /// The requested trip is not an active entry of the catalog.
    #[error("trip {id:?} is not in catalog {path:?}")]
    UnknownTrip { id: String, path: Utf8PathBuf },
    /// The trip could not be adapted to the requested length.
    #[error("failed to adapt trip: {0}")]
    Adapt(#[from] AdaptationError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
