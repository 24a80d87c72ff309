// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Planar geometry for the place navpoint overlay.

This crate provides:
- Points in projected map units (`Point`).
- Axis-aligned bounds with inclusive overlap and centre scaling (`Bounds`).
- Line strings with nearest-point queries (`LineString`, `DistanceDetails`).
- Polygons with area-weighted centroids (`Polygon`).
- A `Geometry` sum type over the three shapes.

Design notes:
- Float64 throughout; coordinates are projected (Euclidean) map units.
- Nearest-point queries are deterministic: the first sub-segment wins ties.
"]

/// Point-to-segment helpers shared by the shape types.
pub mod distance;
/// Foundational geometric types.
pub mod types;

pub use distance::{closest_point_on_segment, DistanceDetails};
pub use types::bounds::Bounds;
pub use types::geometry::Geometry;
pub use types::line_string::LineString;
pub use types::point::Point;
pub use types::polygon::Polygon;
