//! Core route reconstruction for research-vessel cruises.
//!
//! A cruise records a time-ordered series of position fixes. This crate turns
//! those fixes into a [`CruiseRoute`]: a multi-polyline path that is split
//! wherever the track crosses the antimeridian, plus one raw [`Segment`] per
//! consecutive pair of fixes.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`.
//!
//! # Examples
//! ```
//! use geo::Coord;
//! use cruise_track_core::split_at_antimeridian;
//!
//! let path = split_at_antimeridian(&[
//!     Coord { x: 170.0, y: 10.0 },
//!     Coord { x: -170.0, y: 12.0 },
//! ]);
//! assert_eq!(path.0.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "serde")]
pub mod geojson;
mod leg;
mod longitude;
mod position;
mod route;
mod segment;
mod split;

pub use leg::Leg;
pub use longitude::normalise_longitude;
pub use position::Position;
pub use route::{CruiseRoute, RouteBuildError};
pub use segment::{Segment, build_segments};
pub use split::{
    AntimeridianSplitter, DEFAULT_TOLERANCE, MAX_TOLERANCE, ToleranceError, split_at_antimeridian,
    split_at_antimeridian_with_tolerance,
};
