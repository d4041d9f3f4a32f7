//! Timestamped position fixes recorded during a cruise.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use geo::Coord;
use uuid::Uuid;

/// A recorded fix of a vessel's position.
///
/// Either coordinate may be missing; such fixes are kept for bookkeeping
/// but never contribute to a route. Coordinates are WGS84 degrees.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use uuid::Uuid;
/// use cruise_track_core::Position;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let time = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// let fix = Position::new(Uuid::from_u128(1), date, time, Some(170.0), None);
/// assert!(fix.coordinates().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Unique identifier.
    pub id: Uuid,
    /// Acquisition date.
    pub date: NaiveDate,
    /// Acquisition time of day.
    pub time: NaiveTime,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon: Option<f64>,
    /// Latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
}

impl Position {
    /// Construct a fix from its raw fields.
    #[must_use]
    pub const fn new(
        id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
        lon: Option<f64>,
        lat: Option<f64>,
    ) -> Self {
        Self {
            id,
            date,
            time,
            lon,
            lat,
        }
    }

    /// Construct a fully populated fix at `timestamp`.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use geo::Coord;
    /// use uuid::Uuid;
    /// use cruise_track_core::Position;
    ///
    /// let at = NaiveDate::from_ymd_opt(2024, 3, 1)
    ///     .and_then(|d| d.and_hms_opt(12, 30, 0))
    ///     .unwrap();
    /// let fix = Position::at(Uuid::from_u128(7), at, Coord { x: -150.0, y: 20.0 });
    /// assert_eq!(fix.coordinates(), Some(Coord { x: -150.0, y: 20.0 }));
    /// assert_eq!(fix.timestamp(), at);
    /// ```
    #[must_use]
    pub fn at(id: Uuid, timestamp: NaiveDateTime, location: Coord<f64>) -> Self {
        Self::new(
            id,
            timestamp.date(),
            timestamp.time(),
            Some(location.x),
            Some(location.y),
        )
    }

    /// Longitude/latitude pair, if both are recorded.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coord<f64>> {
        Some(Coord {
            x: self.lon?,
            y: self.lat?,
        })
    }

    /// Acquisition date and time combined.
    #[must_use]
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
