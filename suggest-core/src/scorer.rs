//! Score candidates against a query.
//!
//! The `Scorer` trait assigns a relevance score to a
//! [`Candidate`](crate::Candidate) given the caller's
//! [`Query`](crate::Query).

use crate::{Candidate, Query};

/// Calculate a relevance score for a candidate.
///
/// Higher scores indicate a better match. Implementations must be
/// thread-safe (`Send` + `Sync`) so one scorer can serve concurrent requests,
/// and must be deterministic: identical inputs yield identical scores.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
///
/// Use [`Scorer::sanitise`] to apply these guards to a computed score.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use suggest_core::{Candidate, Query, Scorer};
///
/// struct ExactNameScorer;
///
/// impl Scorer for ExactNameScorer {
///     type Error = Infallible;
///
///     fn score(&self, query: &Query, candidate: &Candidate) -> Result<f64, Infallible> {
///         Ok(if query.text == candidate.name { 1.0 } else { 0.0 })
///     }
/// }
///
/// let query = Query::new("Toronto");
/// let candidate = Candidate::new("Toronto", 43.7, -79.4);
/// assert_eq!(ExactNameScorer.score(&query, &candidate), Ok(1.0));
/// ```
pub trait Scorer: Send + Sync {
    /// Failure raised when a pair cannot be scored.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return a score for `candidate` according to `query`.
    ///
    /// # Errors
    /// Implementations return `Self::Error` when the inputs cannot be scored,
    /// for example because a coordinate is out of range.
    fn score(&self, query: &Query, candidate: &Candidate) -> Result<f64, Self::Error>;

    /// Guard a raw score.
    ///
    /// Returns `0.0` for non-finite values and floors negatives at `0.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}

/// Clamp a sub-score into `0.0..=1.0`, mapping non-finite values to `0.0`.
///
/// # Examples
/// ```
/// use suggest_core::scorer::clamp_unit;
///
/// assert_eq!(clamp_unit(1.5), 1.0);
/// assert_eq!(clamp_unit(-0.5), 0.0);
/// assert_eq!(clamp_unit(f64::NAN), 0.0);
/// ```
#[must_use]
pub const fn clamp_unit(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
