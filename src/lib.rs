//! Facade crate for the suggestion scoring engine.
//!
//! This crate re-exports the domain types from `suggest-core` and the scorers
//! from `suggest-scorer` so callers depend on a single crate.

#![forbid(unsafe_code)]

pub use suggest_core::scorer::clamp_unit;
pub use suggest_core::{Candidate, CoordinateError, GeoPoint, Query, ScoreType, Scorer};
pub use suggest_scorer::{
    EARTH_RADIUS_KM, GeoDistanceScorer, InputRole, MAX_GREAT_CIRCLE_KM, ScoreError,
    ScoringWeights, StringMatchScorer, SuggestionScorer, edit_distance, haversine_km, similarity,
};
