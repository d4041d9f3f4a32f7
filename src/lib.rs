//! Facade crate for cruise route reconstruction.
//!
//! This crate re-exports the core types: antimeridian splitting, segment
//! reconstruction and whole-route rebuilds, plus GeoJSON interchange behind
//! the `serde` feature.

#![forbid(unsafe_code)]

pub use cruise_track_core::{
    AntimeridianSplitter, CruiseRoute, DEFAULT_TOLERANCE, Leg, MAX_TOLERANCE, Position,
    RouteBuildError, Segment, ToleranceError, build_segments, normalise_longitude, split_at_antimeridian,
    split_at_antimeridian_with_tolerance,
};

#[cfg(feature = "serde")]
pub use cruise_track_core::geojson;
