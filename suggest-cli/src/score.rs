//! Score command implementation for the suggestion CLI.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{self, BufReader, Write};
use suggest_core::{Candidate, Query};
use suggest_scorer::{GeoDistanceScorer, ScoringWeights, StringMatchScorer, SuggestionScorer};

use crate::{
    ARG_GEO_DISTANCE_WEIGHT, ARG_MATCHING_WEIGHT, ARG_MAX_DISTANCE_KM, ARG_MAX_QUERY_CHARS,
    ARG_SCORE_REQUEST, CliError, ENV_SCORE_REQUEST,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score candidate locations against a query. The request is \
                 a JSON file holding a `query` (text plus optional latitude \
                 and longitude) and a list of `candidates` (name, latitude, \
                 longitude). Weights default to 0.7 for name matching and 0.3 \
                 for geographic proximity.",
    about = "Score candidate locations against a query"
)]
#[ortho_config(prefix = "SUGGEST")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the query and its candidates.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Weight applied to the name similarity.
    #[arg(long = ARG_MATCHING_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) matching_weight: Option<f64>,
    /// Weight applied to the geographic proximity.
    #[arg(long = ARG_GEO_DISTANCE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) geo_distance_weight: Option<f64>,
    /// Distance in kilometres at which proximity reaches zero.
    #[arg(long = ARG_MAX_DISTANCE_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) max_distance_km: Option<f64>,
    /// Reject query terms and names longer than this many characters.
    #[arg(long = ARG_MAX_QUERY_CHARS, value_name = "chars")]
    #[serde(default)]
    pub(crate) max_query_chars: Option<usize>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Weights for the two signals.
    pub(crate) weights: ScoringWeights,
    /// Reference distance for proximity decay, when overridden.
    pub(crate) max_distance_km: Option<f64>,
    /// Character cap for text inputs, when set.
    pub(crate) max_query_chars: Option<usize>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_SCORE_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Build the scorer described by this configuration.
    pub(crate) fn build_scorer(&self) -> Result<SuggestionScorer, CliError> {
        let text = self
            .max_query_chars
            .map_or_else(StringMatchScorer::new, |limit| {
                StringMatchScorer::new().with_max_chars(limit)
            });
        let geo = match self.max_distance_km {
            Some(km) => GeoDistanceScorer::new().with_max_distance_km(km)?,
            None => GeoDistanceScorer::new(),
        };
        Ok(SuggestionScorer::with_scorers(self.weights, text, geo)?)
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_REQUEST,
            env: ENV_SCORE_REQUEST,
        })?;

        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            matching: args.matching_weight.unwrap_or(defaults.matching),
            geo_distance: args.geo_distance_weight.unwrap_or(defaults.geo_distance),
        };

        Ok(Self {
            request_path,
            weights,
            max_distance_km: args.max_distance_km,
            max_query_chars: args.max_query_chars,
        })
    }
}

/// JSON payload accepted by the `score` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ScoreRequest {
    /// Query every candidate is scored against.
    pub(crate) query: Query,
    /// Candidates in caller order.
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
}

/// JSON payload printed by the `score` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ScoreResponse {
    /// One entry per candidate, in request order.
    pub(crate) results: Vec<ScoredCandidate>,
}

/// Outcome for a single candidate: a score or the reason it has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ScoredCandidate {
    /// Candidate name, echoed for readability.
    pub(crate) name: String,
    /// Weighted relevance score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) score: Option<f64>,
    /// Scoring failure, when the candidate could not be scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let response = execute_score(args)?;
    write_score_response(writer, &response)
}

fn execute_score(args: ScoreArgs) -> Result<ScoreResponse, CliError> {
    let config = resolve_score_config(args)?;
    let scorer = config.build_scorer()?;
    let request = load_score_request(&config.request_path)?;
    Ok(score_request(&scorer, &request))
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`ScoreRequest`] from disk.
pub(crate) fn load_score_request(path: &Utf8Path) -> Result<ScoreRequest, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenScoreRequest {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseScoreRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Score every candidate, recording failures in place of scores.
pub(crate) fn score_request(scorer: &SuggestionScorer, request: &ScoreRequest) -> ScoreResponse {
    let outcomes = scorer.score_candidates(&request.query, &request.candidates);
    let results = request
        .candidates
        .iter()
        .zip(outcomes)
        .map(|(candidate, outcome)| match outcome {
            Ok(score) => ScoredCandidate {
                name: candidate.name.clone(),
                score: Some(score),
                error: None,
            },
            Err(err) => {
                log::warn!("skipping candidate {:?}: {err}", candidate.name);
                ScoredCandidate {
                    name: candidate.name.clone(),
                    score: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();
    ScoreResponse { results }
}

fn write_score_response(writer: &mut dyn Write, response: &ScoreResponse) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialiseScoreResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteScoreOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteScoreOutput)?;
    Ok(())
}

/// Return whether a path exists and is a regular file using capability-based IO.
fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
