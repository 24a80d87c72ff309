// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::distance::DistanceDetails;
use crate::types::bounds::Bounds;
use crate::types::line_string::LineString;
use crate::types::point::Point;
use crate::types::polygon::{vertex_mean, Polygon};

/// Any of the supported shapes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "coordinates")
)]
pub enum Geometry {
    /// A single location.
    Point(Point),
    /// An open polyline.
    LineString(LineString),
    /// A closed area.
    Polygon(Polygon),
}

impl Geometry {
    /// Bounds of the shape, or `None` for empty line strings and rings.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Point(p) => Some(Bounds::at(*p)),
            Self::LineString(l) => l.bounds(),
            Self::Polygon(p) => p.bounds(),
        }
    }

    /// Representative centre point.
    ///
    /// Points are their own centroid, polygons use the area-weighted
    /// centroid, and line strings use the mean of their vertices.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        match self {
            Self::Point(p) => Some(*p),
            Self::LineString(l) => vertex_mean(l.points()),
            Self::Polygon(p) => p.centroid(),
        }
    }

    /// Returns `true` for the point variant.
    #[must_use]
    pub fn is_point(&self) -> bool {
        matches!(self, Self::Point(_))
    }

    /// Minimum distance from `query` to the outline of the shape.
    #[must_use]
    pub fn distance_to(&self, query: &Point) -> Option<DistanceDetails> {
        match self {
            Self::Point(p) => Some(DistanceDetails::between(query, *p)),
            Self::LineString(l) => l.distance_to(query),
            Self::Polygon(p) => {
                let mut ring = p.ring().to_vec();
                if let (Some(first), Some(last)) = (ring.first().copied(), ring.last()) {
                    if first != *last {
                        ring.push(first);
                    }
                }
                LineString::new(ring).distance_to(query)
            }
        }
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<LineString> for Geometry {
    fn from(l: LineString) -> Self {
        Self::LineString(l)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}
