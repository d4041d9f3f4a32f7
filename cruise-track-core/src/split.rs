//! Split a travelled path wherever it crosses the antimeridian.
//!
//! Joining consecutive fixes with straight lines in lon/lat space draws a
//! wrong-way line around the globe whenever the track jumps from `+180` to
//! `-180`. [`AntimeridianSplitter`] detects those jumps and closes the current
//! polyline on the meridian, opening the next one on the far side.

use geo::{Coord, LineString, MultiLineString};
use thiserror::Error;

use crate::normalise_longitude;

/// Default slack subtracted from 180° when testing for a crossing.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Largest tolerance accepted by [`AntimeridianSplitter::new`].
///
/// The tolerance absorbs floating-point noise around a half-turn. Wider
/// windows would flag ordinary long hops as crossings.
pub const MAX_TOLERANCE: f64 = 1.0;

const ANTIMERIDIAN: f64 = 180.0;

/// Errors returned by [`AntimeridianSplitter::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ToleranceError {
    /// The tolerance was NaN or infinite.
    #[error("crossing tolerance must be finite, got {0}")]
    NonFinite(f64),
    /// The tolerance was negative or above [`MAX_TOLERANCE`].
    #[error("crossing tolerance must lie within [0, 1], got {0}")]
    OutOfRange(f64),
}

/// Reconstructs a multi-polyline path from ordered fixes.
///
/// A hop between two consecutive points is treated as an antimeridian
/// crossing when its longitude delta exceeds `180 - tolerance`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use cruise_track_core::AntimeridianSplitter;
///
/// let splitter = AntimeridianSplitter::default();
/// let path = splitter.split(&[
///     Coord { x: 10.0, y: 0.0 },
///     Coord { x: 20.0, y: 1.0 },
/// ]);
/// assert_eq!(path.0.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntimeridianSplitter {
    tolerance: f64,
}

impl Default for AntimeridianSplitter {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl AntimeridianSplitter {
    /// Construct a splitter with a custom crossing tolerance in degrees.
    ///
    /// # Errors
    /// Returns [`ToleranceError`] when `tolerance` is not finite or falls
    /// outside `[0, MAX_TOLERANCE]`. A tolerance `t` flags every hop whose
    /// longitude delta exceeds `180 - t`.
    ///
    /// # Examples
    /// ```
    /// use cruise_track_core::{AntimeridianSplitter, ToleranceError};
    ///
    /// assert!(AntimeridianSplitter::new(0.5).is_ok());
    /// assert_eq!(
    ///     AntimeridianSplitter::new(170.0),
    ///     Err(ToleranceError::OutOfRange(170.0)),
    /// );
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ToleranceError> {
        if !tolerance.is_finite() {
            return Err(ToleranceError::NonFinite(tolerance));
        }
        if !(0.0..=MAX_TOLERANCE).contains(&tolerance) {
            return Err(ToleranceError::OutOfRange(tolerance));
        }
        Ok(Self { tolerance })
    }

    /// Tolerance in degrees.
    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Longitude delta above which a hop counts as a crossing.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        ANTIMERIDIAN - self.tolerance
    }

    /// Return whether the hop `from -> to` crosses the antimeridian.
    #[must_use]
    pub fn crosses(&self, from: Coord<f64>, to: Coord<f64>) -> bool {
        (from.x - to.x).abs() > self.threshold()
    }

    /// Split an ordered sequence of fixes into antimeridian-safe polylines.
    ///
    /// Fewer than two points yield an empty [`MultiLineString`]. Otherwise the
    /// result always holds at least one polyline, even when nothing crosses.
    ///
    /// At each crossing the current polyline is closed at `(±180, y)` and the
    /// next one opens at `(normalise(∓180), y)` followed by the arrival point.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use cruise_track_core::AntimeridianSplitter;
    ///
    /// let path = AntimeridianSplitter::default().split(&[
    ///     Coord { x: 170.0, y: 10.0 },
    ///     Coord { x: -170.0, y: 12.0 },
    /// ]);
    /// let first = &path.0[0];
    /// let second = &path.0[1];
    /// assert_eq!(first.0.last().map(|c| c.x), Some(180.0));
    /// assert_eq!(second.0.first().map(|c| c.x), Some(-180.0));
    /// ```
    #[must_use]
    pub fn split(&self, points: &[Coord<f64>]) -> MultiLineString<f64> {
        if points.len() < 2 {
            return MultiLineString::new(Vec::new());
        }

        let mut lines = Vec::new();
        let mut current: Vec<Coord<f64>> = points.iter().take(1).copied().collect();
        for (from, to) in points.iter().zip(points.iter().skip(1)) {
            if !self.crosses(*from, *to) {
                current.push(*to);
                continue;
            }

            let meridian = if from.x > 0.0 {
                ANTIMERIDIAN
            } else {
                -ANTIMERIDIAN
            };
            let lat = crossing_latitude(*from, *to, meridian);
            log::debug!("antimeridian crossing from {from:?} to {to:?} at ({meridian}, {lat})");

            current.push(Coord { x: meridian, y: lat });
            lines.push(LineString::new(std::mem::take(&mut current)));
            current.push(Coord {
                x: normalise_longitude(-meridian),
                y: lat,
            });
            current.push(*to);
        }
        lines.push(LineString::new(current));
        MultiLineString::new(lines)
    }

    /// Split an existing line geometry, as [`Self::split`] does for points.
    #[must_use]
    pub fn split_line_string(&self, line: &LineString<f64>) -> MultiLineString<f64> {
        self.split(&line.0)
    }
}

/// Latitude at which the hop `from -> to` meets `meridian`.
///
/// The arrival longitude is carried onto the departure side of the meridian
/// so the interpolation runs along the short hop and stays between the two
/// endpoint latitudes.
fn crossing_latitude(from: Coord<f64>, to: Coord<f64>, meridian: f64) -> f64 {
    if from.x == to.x {
        log::warn!(
            "crossing flagged between equal longitudes {}; using departure latitude {}",
            from.x,
            from.y
        );
        debug_assert!(
            false,
            "crossing flagged between equal longitudes {}",
            from.x
        );
        return from.y;
    }
    let arrival = to.x + 2.0 * meridian;
    let span = arrival - from.x;
    if span == 0.0 {
        // Both fixes sit on the antimeridian itself.
        return from.y;
    }
    from.y + (to.y - from.y) * (meridian - from.x) / span
}

/// Split `points` with the [`DEFAULT_TOLERANCE`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use cruise_track_core::split_at_antimeridian;
///
/// assert!(split_at_antimeridian(&[Coord { x: 5.0, y: 5.0 }]).0.is_empty());
/// ```
#[must_use]
pub fn split_at_antimeridian(points: &[Coord<f64>]) -> MultiLineString<f64> {
    AntimeridianSplitter::default().split(points)
}

/// Split `points` with a caller-supplied tolerance.
///
/// # Errors
/// Returns [`ToleranceError`] when the tolerance is rejected by
/// [`AntimeridianSplitter::new`].
pub fn split_at_antimeridian_with_tolerance(
    points: &[Coord<f64>],
    tolerance: f64,
) -> Result<MultiLineString<f64>, ToleranceError> {
    Ok(AntimeridianSplitter::new(tolerance)?.split(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn coords(points: &[(f64, f64)]) -> Vec<Coord<f64>> {
        points.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    #[fixture]
    fn splitter() -> AntimeridianSplitter {
        AntimeridianSplitter::default()
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::single(&[(5.0, 5.0)])]
    fn short_input_yields_empty_path(splitter: AntimeridianSplitter, #[case] input: &[(f64, f64)]) {
        assert!(splitter.split(&coords(input)).0.is_empty());
    }

    #[rstest]
    fn path_without_crossing_is_kept_verbatim(splitter: AntimeridianSplitter) {
        let points = coords(&[(10.0, 0.0), (20.0, 1.0), (30.0, 2.0)]);
        let path = splitter.split(&points);
        assert_eq!(path.0, vec![LineString::new(points)]);
    }

    #[rstest]
    fn eastward_crossing_splits_at_the_meridian(splitter: AntimeridianSplitter) {
        let path = splitter.split(&coords(&[(170.0, 10.0), (-170.0, 12.0)]));
        assert_eq!(
            path.0,
            vec![
                LineString::new(coords(&[(170.0, 10.0), (180.0, 11.0)])),
                LineString::new(coords(&[(-180.0, 11.0), (-170.0, 12.0)])),
            ]
        );
    }

    #[rstest]
    fn westward_crossing_closes_on_negative_meridian(splitter: AntimeridianSplitter) {
        let path = splitter.split(&coords(&[(-175.0, -4.0), (175.0, -2.0)]));
        let [first, second] = path.0.as_slice() else {
            panic!("expected two polylines, got {}", path.0.len());
        };
        assert_eq!(first.0, coords(&[(-175.0, -4.0), (-180.0, -3.0)]));
        assert_eq!(
            second.0,
            coords(&[(normalise_longitude(180.0), -3.0), (175.0, -2.0)])
        );
    }

    #[rstest]
    fn duplicate_points_never_cross(splitter: AntimeridianSplitter) {
        let points = coords(&[(179.0, 1.0), (179.0, 1.0), (179.0, 1.0)]);
        assert_eq!(splitter.split(&points).0.len(), 1);
    }

    #[rstest]
    fn exact_half_turn_counts_as_crossing(splitter: AntimeridianSplitter) {
        let path = splitter.split(&coords(&[(90.0, 0.0), (-90.0, 0.0)]));
        assert_eq!(path.0.len(), 2);
    }

    #[rstest]
    fn delta_just_below_threshold_does_not_cross() {
        let splitter = AntimeridianSplitter::new(1.0).expect("valid tolerance");
        let path = splitter.split(&coords(&[(89.0, 0.0), (-89.5, 0.0)]));
        assert_eq!(path.0.len(), 1);
    }

    #[rstest]
    fn tolerance_widens_the_crossing_window() {
        let splitter = AntimeridianSplitter::new(1.0).expect("valid tolerance");
        let path = splitter.split(&coords(&[(89.5, 0.0), (-89.75, 0.0)]));
        assert_eq!(path.0.len(), 2);
    }

    #[rstest]
    fn both_endpoints_on_the_meridian_keep_departure_latitude(splitter: AntimeridianSplitter) {
        let path = splitter.split(&coords(&[(180.0, 3.0), (-180.0, 4.0)]));
        let closing = path.0.first().and_then(|line| line.0.last()).copied();
        assert_eq!(closing, Some(Coord { x: 180.0, y: 3.0 }));
    }

    #[rstest]
    fn split_line_string_matches_point_split(splitter: AntimeridianSplitter) {
        let points = coords(&[(160.0, 0.0), (-170.0, 3.0), (-160.0, 4.0), (170.0, 6.0)]);
        let line = LineString::new(points.clone());
        assert_eq!(splitter.split_line_string(&line), splitter.split(&points));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_non_finite_tolerance(#[case] tolerance: f64) {
        assert!(matches!(
            AntimeridianSplitter::new(tolerance),
            Err(ToleranceError::NonFinite(_))
        ));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(170.0)]
    #[case(180.0)]
    #[case(500.0)]
    fn rejects_out_of_range_tolerance(#[case] tolerance: f64) {
        assert_eq!(
            AntimeridianSplitter::new(tolerance),
            Err(ToleranceError::OutOfRange(tolerance))
        );
    }

    #[rstest]
    fn accepts_largest_tolerance() {
        let splitter = AntimeridianSplitter::new(MAX_TOLERANCE).expect("bound is inclusive");
        assert_eq!(splitter.threshold(), 179.0);
    }

    #[rstest]
    fn crossing_latitude_interpolates_along_the_short_hop() {
        let lat = crossing_latitude(Coord { x: 170.0, y: 10.0 }, Coord { x: -170.0, y: 12.0 }, 180.0);
        assert_eq!(lat, 11.0);
    }

    #[cfg(not(debug_assertions))]
    #[rstest]
    fn equal_longitudes_fall_back_to_departure_latitude() {
        let lat = crossing_latitude(Coord { x: 170.0, y: 1.0 }, Coord { x: 170.0, y: 5.0 }, 180.0);
        assert_eq!(lat, 1.0);
    }

    #[cfg(debug_assertions)]
    #[rstest]
    #[should_panic(expected = "crossing flagged between equal longitudes")]
    fn equal_longitudes_trip_the_debug_assertion() {
        let _ = crossing_latitude(Coord { x: 170.0, y: 1.0 }, Coord { x: 170.0, y: 5.0 }, 180.0);
    }

    #[rstest]
    fn free_function_uses_default_tolerance() {
        let points = coords(&[(170.0, 10.0), (-170.0, 12.0)]);
        assert_eq!(
            split_at_antimeridian(&points),
            split_at_antimeridian_with_tolerance(&points, DEFAULT_TOLERANCE)
                .expect("default tolerance is valid")
        );
    }
}
