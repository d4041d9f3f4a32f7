//! Per-hop segments joining consecutive fixes.
//!
//! Segments are rendered and selected independently of the overall route,
//! so each one is a raw two-point line between the original fixes and is
//! never split at the antimeridian.

use geo::LineString;
use uuid::Uuid;

use crate::{Leg, Position};

/// A single hop between two consecutive fixes.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Fix the hop departs from.
    pub start_position: Uuid,
    /// Fix the hop arrives at.
    pub end_position: Uuid,
    /// Two-point line joining the fixes.
    pub path: LineString<f64>,
    /// Leg covering both fixes, if any.
    pub leg: Option<Uuid>,
}

/// Build one [`Segment`] per consecutive pair of located fixes.
///
/// Fixes without coordinates are skipped, so a hop may bridge a fix with a
/// missing latitude or longitude. Input order is preserved; callers supply
/// fixes already sorted by acquisition time.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use uuid::Uuid;
/// use cruise_track_core::{Position, build_segments};
///
/// let at = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .and_then(|d| d.and_hms_opt(0, 0, 0))
///     .unwrap();
/// let fixes = [
///     Position::at(Uuid::from_u128(1), at, Coord { x: 0.0, y: 0.0 }),
///     Position::at(Uuid::from_u128(2), at, Coord { x: 1.0, y: 1.0 }),
/// ];
/// let segments = build_segments(&fixes, &[]);
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].end_position, Uuid::from_u128(2));
/// ```
pub fn build_segments<'a, I>(positions: I, legs: &[Leg]) -> Vec<Segment>
where
    I: IntoIterator<Item = &'a Position>,
{
    let located: Vec<_> = positions
        .into_iter()
        .filter_map(|p| p.coordinates().map(|c| (p, c)))
        .collect();

    located
        .iter()
        .zip(located.iter().skip(1))
        .map(|((start, from), (end, to))| Segment {
            start_position: start.id,
            end_position: end.id,
            path: LineString::new(vec![*from, *to]),
            leg: Leg::resolve(legs, start.date, end.date).map(|leg| leg.id),
        })
        .collect()
}
