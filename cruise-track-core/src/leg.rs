//! Legs: port-to-port date ranges grouping a cruise's fixes.

use chrono::NaiveDate;
use uuid::Uuid;

/// One leg of a multi-leg cruise.
///
/// The date range is inclusive at both ends.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use uuid::Uuid;
/// use cruise_track_core::Leg;
///
/// let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
/// let leg = Leg::new(Uuid::from_u128(1), 1, start, end).with_ports("Suva", "Apia");
/// assert!(leg.contains(end));
/// assert_eq!(leg.departure_port, "Suva");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Unique identifier.
    pub id: Uuid,
    /// Position of the leg within its cruise.
    pub number: u32,
    /// Port the leg departs from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub departure_port: String,
    /// Port the leg returns to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub return_port: String,
    /// First day of the leg.
    pub start_date: NaiveDate,
    /// Last day of the leg.
    pub end_date: NaiveDate,
}

impl Leg {
    /// Construct a leg without port names.
    #[must_use]
    pub const fn new(id: Uuid, number: u32, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id,
            number,
            departure_port: String::new(),
            return_port: String::new(),
            start_date,
            end_date,
        }
    }

    /// Attach departure and return ports.
    #[must_use]
    pub fn with_ports(mut self, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.departure_port = departure.into();
        self.return_port = arrival.into();
        self
    }

    /// Return whether `date` falls within the leg.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start_date..=self.end_date).contains(&date)
    }

    /// Find the first leg covering both `start` and `end`.
    ///
    /// Legs are scanned in slice order. A hop whose endpoints fall in
    /// different legs belongs to neither.
    #[must_use]
    pub fn resolve(legs: &[Self], start: NaiveDate, end: NaiveDate) -> Option<&Self> {
        legs.iter()
            .find(|leg| leg.contains(start) && leg.contains(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).expect("valid July date")
    }

    #[fixture]
    fn legs() -> Vec<Leg> {
        vec![
            Leg::new(Uuid::from_u128(1), 1, day(1), day(10)),
            Leg::new(Uuid::from_u128(2), 2, day(12), day(20)),
        ]
    }

    #[rstest]
    #[case(day(1), day(1), Some(1))]
    #[case(day(3), day(10), Some(1))]
    #[case(day(12), day(19), Some(2))]
    #[case(day(10), day(12), None)]
    #[case(day(11), day(11), None)]
    #[case(day(25), day(26), None)]
    fn resolves_leg_covering_both_dates(
        legs: Vec<Leg>,
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
        #[case] expected: Option<u32>,
    ) {
        let found = Leg::resolve(&legs, start, end).map(|leg| leg.number);
        assert_eq!(found, expected);
    }

    #[rstest]
    fn overlapping_legs_prefer_the_first() {
        let legs = vec![
            Leg::new(Uuid::from_u128(5), 5, day(1), day(15)),
            Leg::new(Uuid::from_u128(6), 6, day(5), day(20)),
        ];
        let found = Leg::resolve(&legs, day(6), day(7)).map(|leg| leg.id);
        assert_eq!(found, Some(Uuid::from_u128(5)));
    }
}
