//! Error types raised while scoring suggestions.
#![forbid(unsafe_code)]

use suggest_core::CoordinateError;
use thiserror::Error;

/// Which side of a scoring call supplied an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRole {
    /// The caller's query (or the first coordinate pair).
    Query,
    /// The candidate record (or the second coordinate pair).
    Candidate,
}

impl InputRole {
    /// Return the role as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Candidate => "candidate",
        }
    }
}

impl std::fmt::Display for InputRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while configuring a scorer or scoring a candidate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A latitude or longitude was outside its valid range.
    #[error("{role} coordinates are invalid: {source}")]
    InvalidCoordinate {
        /// Input that carried the coordinate.
        role: InputRole,
        /// Range violation reported by `suggest_core`.
        #[source]
        source: CoordinateError,
    },
    /// A text input exceeded the configured character cap.
    #[error("{role} text has {chars} characters, above the limit of {limit}")]
    InputTooLong {
        /// Input that carried the text.
        role: InputRole,
        /// Length of the rejected text in characters.
        chars: usize,
        /// Configured maximum length.
        limit: usize,
    },
    /// Provided weights were unusable.
    #[error("weights must be finite and non-negative")]
    InvalidWeights,
    /// The reference distance for geographic decay was unusable.
    #[error("maximum distance {value} km must be finite and positive")]
    InvalidMaxDistance {
        /// Rejected distance in kilometres.
        value: f64,
    },
}

impl ScoreError {
    pub(crate) const fn invalid_coordinate(role: InputRole, source: CoordinateError) -> Self {
        Self::InvalidCoordinate { role, source }
    }
}
