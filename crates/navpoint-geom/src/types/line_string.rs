// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::distance::{closest_point_on_segment, DistanceDetails};
use crate::types::bounds::Bounds;
use crate::types::point::Point;

/// Ordered polyline of vertices.
///
/// A single vertex is treated as a point; an empty line string has no
/// distance and no bounds.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Wraps `points` as a polyline.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns `true` when there are no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total length along the vertices.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }

    /// Bounds of the vertices, or `None` if empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    /// Minimum distance from `query` to this polyline plus the nearest point on it.
    ///
    /// Sub-segments are visited in vertex order and only a strictly smaller
    /// distance replaces the current best, so the earliest sub-segment wins
    /// ties. Returns `None` for an empty line string.
    #[must_use]
    pub fn distance_to(&self, query: &Point) -> Option<DistanceDetails> {
        match self.points.as_slice() {
            [] => None,
            [only] => Some(DistanceDetails::between(query, *only)),
            pts => {
                let mut best: Option<DistanceDetails> = None;
                for w in pts.windows(2) {
                    let nearest = closest_point_on_segment(query, &w[0], &w[1]);
                    let candidate = DistanceDetails::between(query, nearest);
                    if best.is_none_or(|b| candidate.distance < b.distance) {
                        best = Some(candidate);
                    }
                }
                best
            }
        }
    }
}

impl From<Vec<Point>> for LineString {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> LineString {
        LineString::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ])
    }

    #[test]
    fn nearest_point_on_second_leg() {
        let d = l_shape().distance_to(&Point::new(13.0, 6.0));
        assert_eq!(
            d,
            Some(DistanceDetails {
                distance: 3.0,
                nearest: Point::new(10.0, 6.0),
            })
        );
    }

    #[test]
    fn shared_vertex_tie_prefers_first_leg() {
        // (13, -3) is equidistant to both legs through the corner.
        let d = l_shape().distance_to(&Point::new(13.0, -3.0));
        assert_eq!(d.map(|d| d.nearest), Some(Point::new(10.0, 0.0)));
    }

    #[test]
    fn empty_has_no_distance() {
        assert!(LineString::default().distance_to(&Point::ORIGIN).is_none());
        assert!(LineString::default().bounds().is_none());
    }

    #[test]
    fn single_vertex_acts_as_point() {
        let l = LineString::new(vec![Point::new(3.0, 4.0)]);
        let d = l.distance_to(&Point::ORIGIN);
        assert_eq!(d.map(|d| d.distance), Some(5.0));
    }

    #[test]
    fn length_sums_legs() {
        assert_eq!(l_shape().length(), 20.0);
    }
}
