//! Core domain types for the suggestion scoring engine.
//!
//! A [`Query`] carries the user's search term and, optionally, their
//! location. A [`Candidate`] is one location record to be ranked against it.
//! Coordinates are validated through [`GeoPoint`] before any distance is
//! computed, and every scorer reports through the [`Scorer`] trait.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod point;
pub mod query;
pub mod score_type;
pub mod scorer;

pub use point::{CoordinateError, GeoPoint};
pub use query::{Candidate, Query};
pub use score_type::ScoreType;
pub use scorer::Scorer;
