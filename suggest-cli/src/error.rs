//! Error types emitted by the suggestion CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use suggest_scorer::ScoreError;
use thiserror::Error;

/// Errors emitted by the suggestion CLI.
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
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the score request file failed.
    #[error("failed to open score request at {path:?}: {source}")]
    OpenScoreRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Score request JSON could not be decoded.
    #[error("failed to parse score request JSON at {path:?}: {source}")]
    ParseScoreRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Decoding failure from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Configured weights or limits were rejected by the scorer.
    #[error("invalid scoring configuration: {0}")]
    BuildScorer(#[from] ScoreError),
    /// Serialising the score response failed.
    #[error("failed to serialise score response: {0}")]
    SerialiseScoreResponse(#[source] serde_json::Error),
    /// Writing the score output failed.
    #[error("failed to write score output: {0}")]
    WriteScoreOutput(#[source] std::io::Error),
}
