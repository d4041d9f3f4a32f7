//! Longitude folding into the canonical `[-180, 180)` range.

/// Fold a longitude of any magnitude into `[-180, 180)`.
///
/// Uses `((lon + 180) mod 360) - 180` with a Euclidean remainder, so the
/// result is never `+180`: the antimeridian is always reported as `-180`.
///
/// # Examples
/// ```
/// use cruise_track_core::normalise_longitude;
///
/// assert_eq!(normalise_longitude(180.0), -180.0);
/// assert_eq!(normalise_longitude(190.0), -170.0);
/// assert_eq!(normalise_longitude(-540.0), -180.0);
/// ```
#[must_use]
pub fn normalise_longitude(lon: f64) -> f64 {
    let folded = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // `rem_euclid` rounds up to the modulus for tiny negative remainders.
    if folded >= 180.0 { -180.0 } else { folded }
}
