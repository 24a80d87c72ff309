// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types (point, bounds, line string, polygon).
//!
//! Notes:
//! - Overlap semantics are inclusive on edges so places touching the
//!   viewport border are still drawn.
//! - Degenerate inputs (empty rings, zero-length segments) never panic; the
//!   queries that cannot answer return `None`.

#[doc = "Axis-aligned bounds in map units."]
pub mod bounds;
#[doc = "Sum type over the supported shapes."]
pub mod geometry;
#[doc = "Polylines and nearest-point queries."]
pub mod line_string;
#[doc = "Planar points."]
pub mod point;
#[doc = "Simple polygons (outer ring only)."]
pub mod polygon;
