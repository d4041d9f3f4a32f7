//! Whole-cruise route reconstruction.
//!
//! [`CruiseRoute::rebuild`] recomputes a cruise's route from scratch each time
//! its fixes change. Callers invoke it explicitly after writing fixes and
//! persist the result themselves; [`CruiseRoute::refresh`] wraps it for write
//! paths where a failed rebuild must never block the write.

use geo::{Coord, MultiLineString};
use thiserror::Error;
use uuid::Uuid;

use crate::{AntimeridianSplitter, Leg, Position, Segment, build_segments};

/// Errors returned by [`CruiseRoute::rebuild`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteBuildError {
    /// A coordinate was NaN or infinite.
    #[error("position {id} has a non-finite coordinate ({lon}, {lat})")]
    NonFiniteCoordinate {
        /// Offending position.
        id: Uuid,
        /// Recorded longitude.
        lon: f64,
        /// Recorded latitude.
        lat: f64,
    },
    /// Latitude lay outside `[-90, 90]`.
    #[error("position {id} latitude {lat} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Offending position.
        id: Uuid,
        /// Recorded latitude.
        lat: f64,
    },
    /// Longitude lay outside `[-180, 180]`.
    #[error("position {id} longitude {lon} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Offending position.
        id: Uuid,
        /// Recorded longitude.
        lon: f64,
    },
}

/// The reconstructed track of one cruise.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use uuid::Uuid;
/// use cruise_track_core::{AntimeridianSplitter, CruiseRoute, Position};
///
/// let day = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
/// let fixes = [
///     Position::at(Uuid::from_u128(2), day.and_hms_opt(6, 0, 0).unwrap(), Coord { x: -170.0, y: 12.0 }),
///     Position::at(Uuid::from_u128(1), day.and_hms_opt(0, 0, 0).unwrap(), Coord { x: 170.0, y: 10.0 }),
/// ];
/// let route = CruiseRoute::rebuild(&fixes, &[], &AntimeridianSplitter::default())?;
/// assert_eq!(route.path().0.len(), 2);
/// assert_eq!(route.segments().len(), 1);
/// # Ok::<(), cruise_track_core::RouteBuildError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CruiseRoute {
    path: MultiLineString<f64>,
    segments: Vec<Segment>,
}

impl CruiseRoute {
    /// A route with no polylines and no segments.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            path: MultiLineString(Vec::new()),
            segments: Vec::new(),
        }
    }

    /// Reconstruct a route from a cruise's fixes.
    ///
    /// Fixes missing a coordinate are dropped, the rest are ordered by
    /// acquisition date and time, split at the antimeridian and paired into
    /// segments. Fewer than two located fixes yield an empty route.
    ///
    /// # Errors
    /// Returns [`RouteBuildError`] when a located fix has a non-finite or
    /// out-of-range coordinate.
    pub fn rebuild(
        positions: &[Position],
        legs: &[Leg],
        splitter: &AntimeridianSplitter,
    ) -> Result<Self, RouteBuildError> {
        let mut located = Vec::with_capacity(positions.len());
        for position in positions {
            if let Some(location) = position.coordinates() {
                validate(position.id, location)?;
                located.push((position, location));
            }
        }
        located.sort_by_key(|(position, _)| position.timestamp());

        if located.len() < 2 {
            log::warn!(
                "cruise route needs at least two located fixes, found {}",
                located.len()
            );
        }

        let points: Vec<Coord<f64>> = located.iter().map(|(_, location)| *location).collect();
        let path = splitter.split(&points);
        let segments = build_segments(located.iter().map(|(position, _)| *position), legs);
        log::debug!(
            "rebuilt cruise route: {} fixes, {} polylines, {} segments",
            points.len(),
            path.0.len(),
            segments.len()
        );
        Ok(Self { path, segments })
    }

    /// Rebuild in place, logging instead of propagating failures.
    ///
    /// On error the previous route is kept and `false` is returned, so a
    /// failed reconstruction only degrades what is displayed.
    pub fn refresh(
        &mut self,
        positions: &[Position],
        legs: &[Leg],
        splitter: &AntimeridianSplitter,
    ) -> bool {
        match Self::rebuild(positions, legs, splitter) {
            Ok(route) => {
                *self = route;
                true
            }
            Err(err) => {
                log::error!("failed to rebuild cruise route, keeping previous route: {err}");
                false
            }
        }
    }

    /// Antimeridian-safe polylines in travel order.
    #[must_use]
    pub const fn path(&self) -> &MultiLineString<f64> {
        &self.path
    }

    /// Raw hops between consecutive fixes.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Return whether the route has no polylines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.0.is_empty()
    }
}

impl Default for CruiseRoute {
    fn default() -> Self {
        Self::empty()
    }
}

fn validate(id: Uuid, location: Coord<f64>) -> Result<(), RouteBuildError> {
    let Coord { x: lon, y: lat } = location;
    if !lon.is_finite() || !lat.is_finite() {
        return Err(RouteBuildError::NonFiniteCoordinate { id, lon, lat });
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(RouteBuildError::LatitudeOutOfRange { id, lat });
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(RouteBuildError::LongitudeOutOfRange { id, lon });
    }
    Ok(())
}
