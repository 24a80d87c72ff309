// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::point::Point;

/// Result of a point-to-geometry distance query.
///
/// `nearest` lies on the queried geometry; `distance` is the Euclidean
/// distance between it and the query point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DistanceDetails {
    /// Minimum distance from the query point to the geometry.
    pub distance: f64,
    /// Closest point on the geometry.
    pub nearest: Point,
}

impl DistanceDetails {
    /// Distance details for `query` measured against `nearest`.
    #[must_use]
    pub fn between(query: &Point, nearest: Point) -> Self {
        Self {
            distance: query.distance(&nearest),
            nearest,
        }
    }
}

/// Returns the point on the closed segment `a..=b` closest to `p`.
///
/// A zero-length segment collapses to `a`.
#[must_use]
pub fn closest_point_on_segment(p: &Point, a: &Point, b: &Point) -> Point {
    let ab = b.sub(a);
    let len2 = ab.dot(&ab);
    if len2 == 0.0 {
        return *a;
    }
    let t = (p.sub(a).dot(&ab) / len2).clamp(0.0, 1.0);
    a.add(&ab.scale(t))
}
