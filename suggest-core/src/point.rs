//! Validated WGS84 coordinates.
//!
//! Distances are only meaningful for coordinates on the globe, so
//! [`GeoPoint::new`] rejects anything outside the decimal-degree ranges
//! instead of wrapping it.

use std::ops::RangeInclusive;

use geo::Point;
use thiserror::Error;

/// Valid latitudes in decimal degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitudes in decimal degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was outside `-90..=90` or not finite.
    #[error("latitude {value} is outside the range -90..=90 degrees")]
    LatitudeOutOfRange {
        /// Rejected latitude.
        value: f64,
    },
    /// Longitude was outside `-180..=180` or not finite.
    #[error("longitude {value} is outside the range -180..=180 degrees")]
    LongitudeOutOfRange {
        /// Rejected longitude.
        value: f64,
    },
}

/// A coordinate pair known to lie on the globe.
///
/// Stored as a [`geo::Point`] with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use suggest_core::GeoPoint;
///
/// # fn main() -> Result<(), suggest_core::CoordinateError> {
/// let point = GeoPoint::new(51.5, -0.12)?;
/// assert_eq!(point.latitude(), 51.5);
/// assert_eq!(point.longitude(), -0.12);
/// assert!(GeoPoint::new(200.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint(Point<f64>);

impl GeoPoint {
    /// Validate and construct a [`GeoPoint`] from decimal degrees.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either value is out of range or not
    /// finite. Latitude is checked first.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange { value: latitude });
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange { value: longitude });
        }
        Ok(Self(Point::new(longitude, latitude)))
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub fn latitude(self) -> f64 {
        self.0.y()
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub fn longitude(self) -> f64 {
        self.0.x()
    }

    /// Borrow the underlying `geo` point.
    #[must_use]
    pub const fn as_point(&self) -> &Point<f64> {
        &self.0
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        point.0
    }
}

impl TryFrom<Point<f64>> for GeoPoint {
    type Error = CoordinateError;

    fn try_from(point: Point<f64>) -> Result<Self, Self::Error> {
        Self::new(point.y(), point.x())
    }
}
