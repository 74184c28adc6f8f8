//! Selects how a distance-based scorer reports its result.
//!
//! # Examples
//! ```
//! use suggest_core::ScoreType;
//!
//! assert_eq!(ScoreType::default(), ScoreType::Normalised);
//! assert_eq!(ScoreType::Raw.to_string(), "raw");
//! ```

/// Output scale of a sub-scorer measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum ScoreType {
    /// Similarity in `0.0..=1.0`, where `1.0` is a perfect match.
    #[default]
    Normalised,
    /// The underlying distance in its natural unit.
    Raw,
}

impl ScoreType {
    /// Return the score type as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normalised => "normalised",
            Self::Raw => "raw",
        }
    }
}

impl std::fmt::Display for ScoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
