//! Relevance scoring for location suggestions.
//!
//! The crate combines two heterogeneous signals into one rankable number:
//! - **Name similarity** from Levenshtein edit distance, normalised by the
//!   longer string's length ([`StringMatchScorer`]).
//! - **Geographic proximity** from haversine great-circle distance, decayed
//!   linearly towards a reference maximum ([`GeoDistanceScorer`]).
//!
//! [`SuggestionScorer`] weights and sums the two. It implements the
//! [`Scorer`](suggest_core::Scorer) trait so ranking layers can hold it
//! behind a trait object. Every scorer is immutable after construction and
//! safe to share across threads.
//!
//! # Examples
//!
//! ```
//! use suggest_core::{Candidate, Query};
//! use suggest_scorer::{ScoringWeights, SuggestionScorer, similarity};
//!
//! # fn main() -> Result<(), suggest_scorer::ScoreError> {
//! let scorer = SuggestionScorer::new(ScoringWeights::default())?;
//! let query = Query::new("pizza hut");
//! let candidate = Candidate::new("Pizza Hut", 43.65, -79.38);
//!
//! let score = scorer.calculate_score(&query, &candidate)?;
//! assert_eq!(score, 0.7 * similarity("pizza hut", "Pizza Hut"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod error;
mod suggestion;
mod text;
mod types;

pub use distance::{EARTH_RADIUS_KM, GeoDistanceScorer, MAX_GREAT_CIRCLE_KM, haversine_km};
pub use error::{InputRole, ScoreError};
pub use suggestion::SuggestionScorer;
pub use text::{StringMatchScorer, edit_distance, similarity};
pub use types::ScoringWeights;
