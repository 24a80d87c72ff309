// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Drawable primitives handed to the host's rendering layer.
//!
//! These are plain domain values; how they become vector features is the
//! render adapter's business.

use core::fmt;
use navpoint_geom::Point;
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 0xFF])
    }

    /// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.0;
        if a == 0xFF {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Stroke dash pattern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind", content = "pattern")]
pub enum DashStyle {
    /// Continuous stroke.
    #[default]
    Solid,
    /// Alternating dash/gap lengths in pixels (e.g. `[6, 4]`).
    Dashed(Vec<f32>),
}

impl DashStyle {
    /// Dashed pattern from dash/gap lengths.
    pub fn dashed(pattern: &[f32]) -> Self {
        Self::Dashed(pattern.to_vec())
    }

    /// Returns `true` for any dashed pattern.
    pub fn is_dashed(&self) -> bool {
        matches!(self, Self::Dashed(_))
    }
}

impl fmt::Display for DashStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => f.write_str("solid"),
            Self::Dashed(pattern) => {
                let parts: Vec<String> = pattern.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(" "))
            }
        }
    }
}

/// Outline parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Width in pixels.
    pub width: f32,
    /// Dash pattern.
    pub dash: DashStyle,
}

/// Area fill parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// Fill color.
    pub color: Color,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f32,
}

/// What a marker stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    /// Closest point on the chosen road segment.
    StopPoint,
    /// The place's entry/exit point.
    EntryExit,
    /// Standalone marker for a residential place without an entry/exit point.
    ResidentialAddress,
}

/// Polyline primitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Line style.
    pub stroke: Stroke,
}

/// Point marker primitive (drawn as a circle).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    /// Marker centre.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f32,
    /// Interior fill; `None` draws an outline only.
    pub fill: Option<Fill>,
    /// Outline.
    pub stroke: Stroke,
    /// Semantic role.
    pub role: MarkerRole,
}

/// Anything the overlay draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "primitive")]
pub enum Primitive {
    /// A connector polyline.
    Line(LinePrimitive),
    /// A point marker.
    Marker(MarkerPrimitive),
}

impl Primitive {
    /// Returns the line, if this is one.
    pub fn as_line(&self) -> Option<&LinePrimitive> {
        match self {
            Self::Line(l) => Some(l),
            Self::Marker(_) => None,
        }
    }

    /// Returns the marker, if this is one.
    pub fn as_marker(&self) -> Option<&MarkerPrimitive> {
        match self {
            Self::Marker(m) => Some(m),
            Self::Line(_) => None,
        }
    }
}
