//! Scoring inputs: the user's query and the candidate record.

use crate::{CoordinateError, GeoPoint};

/// A search request reduced to what scoring needs.
///
/// The location is optional: a purely textual search leaves both coordinates
/// unset. A query carrying only one of the two coordinates is treated as
/// having no location.
///
/// # Examples
/// ```
/// use suggest_core::Query;
///
/// let textual = Query::new("pizza hut");
/// assert!(textual.location().is_none());
///
/// let located = Query::new("cafe").with_location(1.0, 1.0);
/// assert_eq!(located.location(), Some((1.0, 1.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    /// Search term, possibly empty.
    #[cfg_attr(feature = "serde", serde(alias = "q", default))]
    pub text: String,
    /// Latitude of the searcher in decimal degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub latitude: Option<f64>,
    /// Longitude of the searcher in decimal degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub longitude: Option<f64>,
}

impl Query {
    /// Construct a query without a location.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// Attach a location while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Return `(latitude, longitude)` when both coordinates are present.
    #[must_use]
    pub const fn location(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some((latitude, longitude)),
            _ => None,
        }
    }

    /// Validate the query location, if any.
    ///
    /// Returns `None` when the query has no complete location.
    ///
    /// # Examples
    /// ```
    /// use suggest_core::Query;
    ///
    /// assert!(Query::new("museum").point().is_none());
    /// let invalid = Query::new("museum").with_location(200.0, 0.0);
    /// assert!(matches!(invalid.point(), Some(Err(_))));
    /// ```
    #[must_use]
    pub fn point(&self) -> Option<Result<GeoPoint, CoordinateError>> {
        self.location()
            .map(|(latitude, longitude)| GeoPoint::new(latitude, longitude))
    }
}

/// One location record being ranked against a [`Query`].
///
/// Unlike the query, a candidate always carries coordinates.
///
/// # Examples
/// ```
/// use suggest_core::Candidate;
///
/// let candidate = Candidate::new("Pizza Hut", 43.70, -79.42);
/// assert_eq!(candidate.name, "Pizza Hut");
/// assert!(candidate.point().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Display name of the location.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Candidate {
    /// Construct a candidate from its name and coordinates.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Validate the candidate's coordinates.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either coordinate is out of range.
    pub fn point(&self) -> Result<GeoPoint, CoordinateError> {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
