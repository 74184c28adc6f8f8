//! Command-line interface for scoring location suggestions.
//!
//! The `score` subcommand reads a JSON request holding one query and its
//! candidates, scores each candidate with weights layered from configuration
//! files, `SUGGEST_*` environment variables, and CLI flags, and prints the
//! scores as JSON.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod score;

pub use error::CliError;
use score::{ScoreArgs, run_score_with};

pub(crate) const ARG_SCORE_REQUEST: &str = "request-path";
pub(crate) const ARG_MATCHING_WEIGHT: &str = "matching-weight";
pub(crate) const ARG_GEO_DISTANCE_WEIGHT: &str = "geo-distance-weight";
pub(crate) const ARG_MAX_DISTANCE_KM: &str = "max-distance-km";
pub(crate) const ARG_MAX_QUERY_CHARS: &str = "max-query-chars";
pub(crate) const ENV_SCORE_REQUEST: &str = "SUGGEST_CMDS_SCORE_REQUEST_PATH";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, or the request file
/// are unusable, or when writing the output fails.
pub fn run() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_with(std::env::args_os(), &mut stdout)
}

/// Run the CLI with explicit arguments, writing command output to `writer`.
///
/// # Errors
/// Returns [`CliError`] under the same conditions as [`run`].
pub fn run_with<I, T>(args: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "suggest",
    about = "Score location suggestions against a search query",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every candidate in a JSON request.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
