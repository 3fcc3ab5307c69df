//! Error types emitted by the nearby CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nearby_core::CoordinateError;
use nearby_scorer::ConvenienceError;
use thiserror::Error;

/// Errors emitted by the nearby CLI.
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
    /// The search origin is not a usable `lat,lng` pair.
    #[error("invalid location {value:?}: {source}")]
    InvalidLocation {
        value: String,
        #[source]
        source: CoordinateError,
    },
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
    /// Opening the places payload failed.
    #[error("failed to open places payload at {path:?}: {source}")]
    OpenPlaces {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The places payload JSON could not be decoded.
    #[error("failed to parse places payload at {path:?}: {source}")]
    ParsePlaces {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Scoring the places failed.
    #[error("failed to score places: {source}")]
    Score {
        #[source]
        source: ConvenienceError,
    },
    /// Serializing the output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
