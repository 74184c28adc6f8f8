//! Public configuration types for suggestion scoring.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::ScoreError;

/// Relative weighting between textual match and geographic proximity.
///
/// Set once at startup from configuration and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Multiplier applied to the name similarity.
    pub matching: f64,
    /// Multiplier applied to the geographic proximity.
    pub geo_distance: f64,
}

impl ScoringWeights {
    /// Validate the weights and return a copy.
    ///
    /// A weight of zero disables its signal.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidWeights`] when either value is negative
    /// or not finite.
    pub fn validate(self) -> Result<Self, ScoreError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScoreError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values()
    }

    const fn has_finite_values(self) -> bool {
        self.matching.is_finite() && self.geo_distance.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.matching >= 0.0 && self.geo_distance >= 0.0
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            matching: 0.7,
            geo_distance: 0.3,
        }
    }
}
