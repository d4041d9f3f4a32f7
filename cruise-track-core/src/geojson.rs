//! GeoJSON interchange for route geometries.
//!
//! Routes are exchanged with map clients as GeoJSON `MultiLineString`
//! geometries and segments as `LineString` geometries. Positions are
//! `[longitude, latitude]` pairs, matching the crate's `x`/`y` convention.

use geo::{Coord, LineString, MultiLineString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::{CruiseRoute, Segment};

/// A GeoJSON line geometry.
///
/// # Examples
/// ```
/// use geo::{LineString, MultiLineString};
/// use cruise_track_core::geojson::GeoJsonGeometry;
///
/// let path = MultiLineString::new(vec![LineString::from(vec![(1.0, 2.0), (3.0, 4.0)])]);
/// let json = serde_json::to_string(&GeoJsonGeometry::from(&path)).unwrap();
/// assert_eq!(json, r#"{"type":"MultiLineString","coordinates":[[[1.0,2.0],[3.0,4.0]]]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    /// A single polyline.
    LineString {
        /// `[lon, lat]` positions.
        coordinates: Vec<[f64; 2]>,
    },
    /// An ordered collection of polylines.
    MultiLineString {
        /// One `[lon, lat]` array per polyline.
        coordinates: Vec<Vec<[f64; 2]>>,
    },
}

/// Errors converting a [`GeoJsonGeometry`] back into `geo` types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoJsonError {
    /// A `MultiLineString` did not hold exactly one polyline.
    #[error("expected a single line, found a MultiLineString with {parts} parts")]
    NotASingleLine {
        /// Number of polylines found.
        parts: usize,
    },
}

impl GeoJsonGeometry {
    /// Convert into a [`MultiLineString`].
    ///
    /// A `LineString` becomes a one-part multi-line so consumers always see
    /// the same shape.
    #[must_use]
    pub fn into_multi_line_string(self) -> MultiLineString<f64> {
        match self {
            Self::LineString { coordinates } => MultiLineString::new(vec![to_line(coordinates)]),
            Self::MultiLineString { coordinates } => {
                MultiLineString::new(coordinates.into_iter().map(to_line).collect())
            }
        }
    }

    /// Convert into a single [`LineString`].
    ///
    /// # Errors
    /// Returns [`GeoJsonError::NotASingleLine`] for a `MultiLineString` that
    /// does not contain exactly one polyline.
    pub fn into_line_string(self) -> Result<LineString<f64>, GeoJsonError> {
        match self {
            Self::LineString { coordinates } => Ok(to_line(coordinates)),
            Self::MultiLineString { coordinates } => {
                let parts = coordinates.len();
                let mut lines = coordinates.into_iter();
                match (lines.next(), lines.next()) {
                    (Some(only), None) => Ok(to_line(only)),
                    _ => Err(GeoJsonError::NotASingleLine { parts }),
                }
            }
        }
    }
}

impl From<&LineString<f64>> for GeoJsonGeometry {
    fn from(line: &LineString<f64>) -> Self {
        Self::LineString {
            coordinates: from_line(line),
        }
    }
}

impl From<&MultiLineString<f64>> for GeoJsonGeometry {
    fn from(path: &MultiLineString<f64>) -> Self {
        Self::MultiLineString {
            coordinates: path.0.iter().map(from_line).collect(),
        }
    }
}

fn from_line(line: &LineString<f64>) -> Vec<[f64; 2]> {
    line.0.iter().map(|c| [c.x, c.y]).collect()
}

fn to_line(coordinates: Vec<[f64; 2]>) -> LineString<f64> {
    LineString::new(
        coordinates
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect(),
    )
}

/// A GeoJSON feature with free-form properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    /// Feature geometry.
    pub geometry: GeoJsonGeometry,
    /// Arbitrary JSON properties.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// An ordered list of features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    /// Features in order.
    pub features: Vec<Feature>,
}

impl From<&Segment> for Feature {
    fn from(segment: &Segment) -> Self {
        let mut properties = Map::new();
        properties.insert("kind".into(), json!("segment"));
        properties.insert(
            "start_position".into(),
            json!(segment.start_position.to_string()),
        );
        properties.insert(
            "end_position".into(),
            json!(segment.end_position.to_string()),
        );
        properties.insert(
            "leg".into(),
            segment
                .leg
                .map_or(Value::Null, |leg| json!(leg.to_string())),
        );
        Self {
            geometry: GeoJsonGeometry::from(&segment.path),
            properties,
        }
    }
}

impl CruiseRoute {
    /// Render the route and its segments as a feature collection.
    ///
    /// The first feature is the whole route (`kind = "route"`), followed by
    /// one `kind = "segment"` feature per hop.
    ///
    /// # Examples
    /// ```
    /// use cruise_track_core::CruiseRoute;
    ///
    /// let collection = CruiseRoute::empty().to_feature_collection();
    /// assert_eq!(collection.features.len(), 1);
    /// ```
    #[must_use]
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let mut properties = Map::new();
        properties.insert("kind".into(), json!("route"));
        let route = Feature {
            geometry: GeoJsonGeometry::from(self.path()),
            properties,
        };
        let features = std::iter::once(route)
            .chain(self.segments().iter().map(Feature::from))
            .collect();
        FeatureCollection { features }
    }
}
