//! Weighted combination of textual match and geographic proximity.
//!
//! The name similarity always contributes. Proximity contributes only when
//! the query carries both coordinates; a query without a location adds
//! exactly `0.0` instead of a neutral default, so geo-less queries rank on
//! text alone.

#![forbid(unsafe_code)]

use suggest_core::{Candidate, Query, Scorer};

use crate::{GeoDistanceScorer, ScoreError, ScoringWeights, StringMatchScorer};

/// Scores candidate locations against a search query.
///
/// # Examples
/// ```
/// use suggest_core::{Candidate, Query};
/// use suggest_scorer::{ScoringWeights, SuggestionScorer};
///
/// # fn main() -> Result<(), suggest_scorer::ScoreError> {
/// let scorer = SuggestionScorer::new(ScoringWeights {
///     matching: 0.7,
///     geo_distance: 0.3,
/// })?;
/// let query = Query::new("cafe").with_location(1.0, 1.0);
/// let candidate = Candidate::new("cafe", 1.0, 1.0);
/// assert!((scorer.calculate_score(&query, &candidate)? - 1.0).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionScorer {
    weights: ScoringWeights,
    text: StringMatchScorer,
    geo: GeoDistanceScorer,
}

impl SuggestionScorer {
    /// Construct a scorer with default sub-scorers.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidWeights`] when the weights fail
    /// validation.
    pub fn new(weights: ScoringWeights) -> Result<Self, ScoreError> {
        Self::with_scorers(weights, StringMatchScorer::new(), GeoDistanceScorer::new())
    }

    /// Construct a scorer from weights and configured sub-scorers.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidWeights`] when the weights fail
    /// validation.
    pub fn with_scorers(
        weights: ScoringWeights,
        text: StringMatchScorer,
        geo: GeoDistanceScorer,
    ) -> Result<Self, ScoreError> {
        let validated_weights = weights.validate()?;
        Ok(Self {
            weights: validated_weights,
            text,
            geo,
        })
    }

    /// Weights applied to each signal.
    #[must_use]
    pub const fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Score `candidate` against `query`.
    ///
    /// The candidate's coordinates are only validated when the query has a
    /// location.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidCoordinate`] when the geographic branch
    /// runs on out-of-range coordinates, and [`ScoreError::InputTooLong`]
    /// when a string exceeds the text scorer's cap. No partial score is
    /// produced.
    #[expect(
        clippy::float_arithmetic,
        reason = "the final score is a weighted sum of sub-scores"
    )]
    pub fn calculate_score(&self, query: &Query, candidate: &Candidate) -> Result<f64, ScoreError> {
        let matching = self.weights.matching * self.text.score(&query.text, &candidate.name)?;

        let geo_distance = match query.location() {
            Some((latitude, longitude)) => {
                let proximity =
                    self.geo
                        .score(latitude, longitude, candidate.latitude, candidate.longitude)?;
                self.weights.geo_distance * proximity
            }
            None => 0.0,
        };

        let score = matching + geo_distance;
        log::debug!(
            "scored {:?} for {:?}: {score} (matching {matching}, geo {geo_distance})",
            candidate.name,
            query.text,
        );
        Ok(score)
    }

    /// Score each candidate independently, preserving order.
    ///
    /// A failing candidate yields its own error without affecting the rest.
    #[must_use]
    pub fn score_candidates(
        &self,
        query: &Query,
        candidates: &[Candidate],
    ) -> Vec<Result<f64, ScoreError>> {
        candidates
            .iter()
            .map(|candidate| self.calculate_score(query, candidate))
            .collect()
    }
}

impl Scorer for SuggestionScorer {
    type Error = ScoreError;

    fn score(&self, query: &Query, candidate: &Candidate) -> Result<f64, ScoreError> {
        self.calculate_score(query, candidate).map(Self::sanitise)
    }
}
