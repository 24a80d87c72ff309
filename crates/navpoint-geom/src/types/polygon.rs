// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::bounds::Bounds;
use crate::types::point::Point;

/// Simple polygon described by its outer ring.
///
/// The ring may be given open or closed (first vertex repeated at the end);
/// both forms describe the same polygon.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Polygon {
    ring: Vec<Point>,
}

impl Polygon {
    /// Wraps `ring` as a polygon outline.
    #[must_use]
    pub fn new(ring: Vec<Point>) -> Self {
        Self { ring }
    }

    /// Ring vertices as given.
    #[must_use]
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// Ring vertices without the closing duplicate, if any.
    fn open_ring(&self) -> &[Point] {
        match self.ring.as_slice() {
            [first, .., last] if first == last => &self.ring[..self.ring.len() - 1],
            ring => ring,
        }
    }

    /// Signed area (positive for counter-clockwise rings).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let ring = self.open_ring();
        let n = ring.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = ring[i];
                let b = ring[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice * 0.5
    }

    /// Bounds of the ring, or `None` if empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.ring)
    }

    /// Area-weighted centroid of the ring.
    ///
    /// Zero-area rings (fewer than three distinct vertices, collinear
    /// vertices) fall back to the mean of their vertices. Returns `None`
    /// for an empty ring.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        let ring = self.open_ring();
        if ring.is_empty() {
            return None;
        }
        let area = self.signed_area();
        if area.abs() <= f64::EPSILON {
            return vertex_mean(ring);
        }
        // Accumulate relative to the first vertex to keep large projected
        // coordinates from swamping the cross products.
        let origin = ring[0];
        let n = ring.len();
        let (mut cx, mut cy) = (0.0, 0.0);
        for i in 0..n {
            let a = ring[i].sub(&origin);
            let b = ring[(i + 1) % n].sub(&origin);
            let cross = a.x * b.y - b.x * a.y;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }
        let k = 1.0 / (6.0 * area);
        Some(Point::new(cx * k, cy * k).add(&origin))
    }
}

pub(crate) fn vertex_mean(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let sum = points.iter().fold(Point::ORIGIN, |acc, p| acc.add(p));
    Some(sum.scale(1.0 / n))
}

impl From<Vec<Point>> for Polygon {
    fn from(ring: Vec<Point>) -> Self {
        Self::new(ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(closed: bool) -> Polygon {
        let mut ring = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        if closed {
            ring.push(Point::new(0.0, 0.0));
        }
        Polygon::new(ring)
    }

    #[test]
    fn square_centroid_is_centre() {
        assert_eq!(square(false).centroid(), Some(Point::new(2.0, 2.0)));
        assert_eq!(square(true).centroid(), Some(Point::new(2.0, 2.0)));
        assert_eq!(square(true).signed_area(), 16.0);
    }

    #[test]
    fn centroid_is_area_weighted_not_vertex_mean() {
        // L-shaped hexagon: two 2x1 strips stacked into an L.
        let l = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
        ]);
        let c = l.centroid().unwrap_or_default();
        assert!((c.x - 5.0 / 6.0).abs() < 1e-12);
        assert!((c.y - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_ring_falls_back_to_mean() {
        let line = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(6.0, 0.0)]);
        assert_eq!(line.centroid(), Some(Point::new(3.0, 0.0)));
        assert!(Polygon::default().centroid().is_none());
    }
}
