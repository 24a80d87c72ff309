// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::point::Point;
use core::fmt;

/// Axis-aligned bounds in map units.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Serialized as `{ left, bottom, right, top }`; inverted input is rejected.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoundsRepr", into = "BoundsRepr")
)]
pub struct Bounds {
    min: Point,
    max: Point,
}

/// Error returned when `min` exceeds `max` on either axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidBounds {
    /// Offending minimum corner.
    pub min: Point,
    /// Offending maximum corner.
    pub max: Point,
}

impl fmt::Display for InvalidBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid bounds: min ({}, {}) exceeds max ({}, {})",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

impl std::error::Error for InvalidBounds {}

impl Bounds {
    /// Constructs bounds from their minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    #[must_use]
    pub fn new(min: Point, max: Point) -> Self {
        assert!(min.x <= max.x && min.y <= max.y, "invalid bounds: min > max");
        Self { min, max }
    }

    /// Fallible variant of [`Bounds::new`].
    pub fn try_new(min: Point, max: Point) -> Result<Self, InvalidBounds> {
        if min.x <= max.x && min.y <= max.y {
            Ok(Self { min, max })
        } else {
            Err(InvalidBounds { min, max })
        }
    }

    /// Bounds from OpenLayers-style edges.
    pub fn from_edges(left: f64, bottom: f64, right: f64, top: f64) -> Result<Self, InvalidBounds> {
        Self::try_new(Point::new(left, bottom), Point::new(right, top))
    }

    /// Degenerate bounds covering a single point.
    #[must_use]
    pub fn at(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Point {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point {
        self.max
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Returns `true` if these bounds overlap `other` (inclusive on edges).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    /// Returns `true` if `p` lies inside or on the edge.
    #[must_use]
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns the union of two bounds.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Inflates the bounds by a uniform margin `m` in all directions.
    #[must_use]
    pub fn inflate(&self, m: f64) -> Self {
        let delta = Point::new(m, m);
        Self {
            min: self.min.sub(&delta),
            max: self.max.add(&delta),
        }
    }

    /// Scales width and height by `ratio` about the centre.
    ///
    /// Non-positive or non-finite ratios leave the bounds unchanged.
    #[must_use]
    pub fn scale(&self, ratio: f64) -> Self {
        if !(ratio.is_finite() && ratio > 0.0) {
            return *self;
        }
        let c = self.center();
        let half = Point::new(self.width() * ratio * 0.5, self.height() * ratio * 0.5);
        Self {
            min: c.sub(&half),
            max: c.add(&half),
        }
    }

    /// Builds the minimal bounds containing all `points`, or `None` if empty.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::at(*first), |acc, p| {
            acc.union(&Self::at(*p))
        }))
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
struct BoundsRepr {
    left: f64,
    bottom: f64,
    right: f64,
    top: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<BoundsRepr> for Bounds {
    type Error = InvalidBounds;

    fn try_from(r: BoundsRepr) -> Result<Self, Self::Error> {
        Self::from_edges(r.left, r.bottom, r.right, r.top)
    }
}

#[cfg(feature = "serde")]
impl From<Bounds> for BoundsRepr {
    fn from(b: Bounds) -> Self {
        Self {
            left: b.min.x,
            bottom: b.min.y,
            right: b.max.x,
            top: b.max.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Bounds {
        Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 4.0))
    }

    #[test]
    fn touching_edges_overlap() {
        let other = Bounds::new(Point::new(10.0, 4.0), Point::new(12.0, 6.0));
        assert!(unit().overlaps(&other));
        let apart = Bounds::new(Point::new(10.5, 0.0), Point::new(12.0, 6.0));
        assert!(!unit().overlaps(&apart));
    }

    #[test]
    fn scale_doubles_about_centre() {
        let s = unit().scale(2.0);
        assert_eq!(s.min(), Point::new(-5.0, -2.0));
        assert_eq!(s.max(), Point::new(15.0, 6.0));
        assert_eq!(s.center(), unit().center());
    }

    #[test]
    fn scale_ignores_nonsense_ratio() {
        assert_eq!(unit().scale(0.0), unit());
        assert_eq!(unit().scale(f64::NAN), unit());
    }

    #[test]
    fn inverted_edges_are_rejected() {
        assert!(Bounds::from_edges(5.0, 0.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn from_points_handles_empty_and_many() {
        assert!(Bounds::from_points(&[]).is_none());
        let b = Bounds::from_points(&[
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(1.0, 1.0),
        ]);
        assert_eq!(
            b,
            Some(Bounds::new(Point::new(-2.0, -1.0), Point::new(3.0, 4.0)))
        );
    }
}
