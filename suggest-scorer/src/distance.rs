//! Geographic proximity derived from great-circle distance.
//!
//! Distances come from the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Proximity decays linearly from `1.0` for coincident
//! points to `0.0` at the scorer's reference distance, which defaults to
//! [`MAX_GREAT_CIRCLE_KM`], the distance between antipodes. Any two points
//! on the globe therefore score within `0.0..=1.0` without clamping; a
//! shorter custom reference clamps everything beyond it to `0.0`.

#![forbid(unsafe_code)]

use geo::Point;
use suggest_core::scorer::clamp_unit;
use suggest_core::{GeoPoint, ScoreType};

use crate::{InputRole, ScoreError};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Longest possible great-circle distance: half the Earth's circumference.
#[expect(
    clippy::float_arithmetic,
    reason = "half the circumference is pi times the radius"
)]
pub const MAX_GREAT_CIRCLE_KM: f64 = std::f64::consts::PI * EARTH_RADIUS_KM;

/// Great-circle distance between two points in kilometres.
///
/// # Examples
/// ```
/// use suggest_core::GeoPoint;
/// use suggest_scorer::haversine_km;
///
/// # fn main() -> Result<(), suggest_core::CoordinateError> {
/// let london = GeoPoint::new(51.5074, -0.1278)?;
/// let paris = GeoPoint::new(48.8566, 2.3522)?;
/// let km = haversine_km(london, paris);
/// assert!((km - 343.556).abs() < 0.01);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let origin = Point::from(from).to_radians();
    let destination = Point::from(to).to_radians();
    let half_dlat = (destination.y() - origin.y()) / 2.0;
    let half_dlon = (destination.x() - origin.x()) / 2.0;
    let h = half_dlat.sin().powi(2)
        + origin.y().cos() * destination.y().cos() * half_dlon.sin().powi(2);
    // Rounding can push `h` marginally above 1 for near-antipodal points.
    let central_angle = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * central_angle
}

/// Scores how close a candidate lies to the query location.
///
/// Out-of-range coordinates are rejected rather than wrapped.
///
/// # Examples
/// ```
/// use suggest_scorer::GeoDistanceScorer;
///
/// # fn main() -> Result<(), suggest_scorer::ScoreError> {
/// let scorer = GeoDistanceScorer::new();
/// assert_eq!(scorer.score(1.0, 1.0, 1.0, 1.0)?, 1.0);
/// assert!(scorer.score(0.0, 0.0, 0.0, 180.0)? < 1e-9);
/// assert!(scorer.score(200.0, 0.0, 0.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoDistanceScorer {
    max_distance_km: f64,
}

impl Default for GeoDistanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoDistanceScorer {
    /// Construct a scorer that decays over the whole globe.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_distance_km: MAX_GREAT_CIRCLE_KM,
        }
    }

    /// Decay to `0.0` at `max_distance_km` instead of at the antipode.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidMaxDistance`] unless the distance is
    /// finite and positive.
    pub fn with_max_distance_km(mut self, max_distance_km: f64) -> Result<Self, ScoreError> {
        if !max_distance_km.is_finite() || max_distance_km <= 0.0 {
            return Err(ScoreError::InvalidMaxDistance {
                value: max_distance_km,
            });
        }
        self.max_distance_km = max_distance_km;
        Ok(self)
    }

    /// Distance at which proximity reaches `0.0`.
    #[must_use]
    pub const fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    /// Return the normalised proximity of two coordinate pairs.
    ///
    /// The first pair is reported as the query and the second as the
    /// candidate when validation fails.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidCoordinate`] when a latitude is outside
    /// `-90..=90`, a longitude is outside `-180..=180`, or a value is not
    /// finite.
    pub fn score(
        &self,
        latitude_a: f64,
        longitude_a: f64,
        latitude_b: f64,
        longitude_b: f64,
    ) -> Result<f64, ScoreError> {
        let from = validated(latitude_a, longitude_a, InputRole::Query)?;
        let to = validated(latitude_b, longitude_b, InputRole::Candidate)?;
        Ok(self.measure(from, to, ScoreType::Normalised))
    }

    /// Great-circle distance between two validated points in kilometres.
    #[must_use]
    pub fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        haversine_km(from, to)
    }

    /// Compare two validated points on the requested scale.
    ///
    /// [`ScoreType::Raw`] yields the distance in kilometres; every other scale
    /// is normalised.
    #[must_use]
    pub fn measure(&self, from: GeoPoint, to: GeoPoint, score_type: ScoreType) -> f64 {
        let distance = self.distance_km(from, to);
        match score_type {
            ScoreType::Raw => distance,
            _ => self.normalise(distance),
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "linear decay divides the distance by the reference maximum"
    )]
    fn normalise(&self, distance_km: f64) -> f64 {
        clamp_unit(1.0 - distance_km / self.max_distance_km)
    }
}

fn validated(latitude: f64, longitude: f64, role: InputRole) -> Result<GeoPoint, ScoreError> {
    GeoPoint::new(latitude, longitude).map_err(|source| {
        log::debug!("rejecting {role} coordinate ({latitude}, {longitude}): {source}");
        ScoreError::invalid_coordinate(role, source)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use suggest_core::CoordinateError;

    const TOLERANCE_KM: f64 = 0.01;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).expect("test coordinates are valid")
    }

    #[rstest]
    #[case((51.5074, -0.1278), (48.8566, 2.3522), 343.556)]
    #[case((43.6532, -79.3832), (45.5017, -73.5673), 504.262)]
    #[case((0.0, 0.0), (0.0, 180.0), MAX_GREAT_CIRCLE_KM)]
    #[case((90.0, 0.0), (-90.0, 0.0), MAX_GREAT_CIRCLE_KM)]
    #[case((12.5, 45.0), (12.5, 45.0), 0.0)]
    fn haversine_matches_reference_distances(
        #[case] from: (f64, f64),
        #[case] to: (f64, f64),
        #[case] expected_km: f64,
    ) {
        let km = haversine_km(point(from.0, from.1), point(to.0, to.1));
        assert!(
            (km - expected_km).abs() < TOLERANCE_KM,
            "expected {expected_km} km, got {km} km"
        );
    }

    #[rstest]
    fn coincident_points_score_one() {
        let scorer = GeoDistanceScorer::new();
        let score = scorer.score(-33.86, 151.21, -33.86, 151.21).expect("valid");
        assert_eq!(score, 1.0);
    }

    #[rstest]
    fn custom_reference_clamps_beyond_maximum() {
        let scorer = GeoDistanceScorer::new()
            .with_max_distance_km(100.0)
            .expect("positive reference");
        // London to Paris is well beyond 100 km.
        let score = scorer
            .score(51.5074, -0.1278, 48.8566, 2.3522)
            .expect("valid coordinates");
        assert_eq!(score, 0.0);
    }

    #[rstest]
    fn custom_reference_decays_linearly() {
        let scorer = GeoDistanceScorer::new()
            .with_max_distance_km(1000.0)
            .expect("positive reference");
        let score = scorer
            .score(51.5074, -0.1278, 48.8566, 2.3522)
            .expect("valid coordinates");
        assert!((score - 0.656_444).abs() < 1e-5, "got {score}");
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_reference_distance(#[case] value: f64) {
        let err = GeoDistanceScorer::new()
            .with_max_distance_km(value)
            .expect_err("reference must be finite and positive");
        assert!(matches!(err, ScoreError::InvalidMaxDistance { .. }));
    }

    #[rstest]
    #[case((200.0, 0.0, 0.0, 0.0), InputRole::Query, CoordinateError::LatitudeOutOfRange { value: 200.0 })]
    #[case((0.0, 0.0, 0.0, -181.0), InputRole::Candidate, CoordinateError::LongitudeOutOfRange { value: -181.0 })]
    fn invalid_coordinates_name_the_offending_side(
        #[case] coordinates: (f64, f64, f64, f64),
        #[case] role: InputRole,
        #[case] source: CoordinateError,
    ) {
        let (lat_a, lon_a, lat_b, lon_b) = coordinates;
        let err = GeoDistanceScorer::new()
            .score(lat_a, lon_a, lat_b, lon_b)
            .expect_err("coordinates out of range");
        assert_eq!(err, ScoreError::InvalidCoordinate { role, source });
    }

    #[rstest]
    fn measure_raw_reports_kilometres() {
        let scorer = GeoDistanceScorer::new();
        let km = scorer.measure(point(0.0, 0.0), point(0.0, 1.0), ScoreType::Raw);
        assert!((km - 111.195).abs() < TOLERANCE_KM, "got {km}");
    }

    #[rstest]
    #[case((0.0, 0.0), (0.0, 1.0), 111.195)]
    #[case((51.5074, -0.1278), (48.8566, 2.3522), 343.556)]
    #[case((-33.86, 151.21), (-33.86, 151.21), 0.0)]
    fn distance_km_ignores_the_reference_distance(
        #[case] from: (f64, f64),
        #[case] to: (f64, f64),
        #[case] expected_km: f64,
    ) {
        let scorer = GeoDistanceScorer::new()
            .with_max_distance_km(100.0)
            .expect("positive reference");
        let (a, b) = (point(from.0, from.1), point(to.0, to.1));

        let km = scorer.distance_km(a, b);

        assert!((km - expected_km).abs() < TOLERANCE_KM, "got {km}");
        assert_eq!(km, scorer.measure(a, b, ScoreType::Raw));
    }
}
