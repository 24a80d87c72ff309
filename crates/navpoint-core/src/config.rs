// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Non-persisted overlay configuration: gate thresholds, rule flags, styles.
//!
//! Hosts normally take [`OverlayConfig::default`]. Only the two user switches
//! in [`OverlaySettings`](navpoint_app_core::OverlaySettings) are persisted.

use crate::finder::SegmentRules;
use crate::primitives::{Color, DashStyle, Fill, Stroke};
use serde::{Deserialize, Serialize};

/// Lowest zoom level at which connectors are drawn.
pub const DEFAULT_MIN_ZOOM: u32 = 6;

/// Factor the viewport is grown by (about its centre) before culling places.
pub const DEFAULT_BOUNDS_SCALE: f64 = 2.0;

/// Colors, widths and radii for every primitive the overlay emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Connector color for places with a street.
    pub line_color: Color,
    /// Connector color for places without a street.
    pub missing_street_color: Color,
    /// Connector width in pixels.
    pub line_width: f32,
    /// Connector dash pattern.
    pub line_dash: Vec<f32>,
    /// Stop-point marker radius.
    pub stop_radius: f32,
    /// Stop-point marker fill.
    pub stop_fill: Color,
    /// Entry/exit marker radius.
    pub entry_exit_radius: f32,
    /// Entry/exit marker fill.
    pub entry_exit_fill: Color,
    /// Outline width of both connector markers.
    pub marker_stroke_width: f32,
    /// Residential address circle radius.
    pub residential_radius: f32,
    /// Residential address circle outline color.
    pub residential_color: Color,
    /// Residential address circle outline width.
    pub residential_stroke_width: f32,
    /// Residential address circle dash pattern.
    pub residential_dash: Vec<f32>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_color: Color::rgb(0x00, 0xFF, 0xFF),
            missing_street_color: Color::rgb(0xFF, 0x80, 0x00),
            line_width: 2.0,
            line_dash: vec![6.0, 4.0],
            stop_radius: 4.0,
            stop_fill: Color::rgb(0xAA, 0x00, 0x00),
            entry_exit_radius: 4.0,
            entry_exit_fill: Color::rgb(0x00, 0xAA, 0x00),
            marker_stroke_width: 2.0,
            residential_radius: 15.0,
            residential_color: Color::rgb(0x00, 0xFF, 0xFF),
            residential_stroke_width: 2.0,
            residential_dash: vec![3.0, 3.0],
        }
    }
}

impl StyleConfig {
    /// Dashed connector stroke in `color`.
    pub fn line_stroke(&self, color: Color) -> Stroke {
        Stroke {
            color,
            width: self.line_width,
            dash: DashStyle::dashed(&self.line_dash),
        }
    }

    /// Solid marker outline in `color`.
    pub fn marker_stroke(&self, color: Color) -> Stroke {
        Stroke {
            color,
            width: self.marker_stroke_width,
            dash: DashStyle::Solid,
        }
    }

    /// Opaque fill in `color`.
    pub fn solid_fill(color: Color) -> Fill {
        Fill {
            color,
            opacity: 1.0,
        }
    }

    /// Dashed outline of the residential address circle.
    pub fn residential_stroke(&self) -> Stroke {
        Stroke {
            color: self.residential_color,
            width: self.residential_stroke_width,
            dash: DashStyle::dashed(&self.residential_dash),
        }
    }
}

/// Everything about the overlay's behaviour that is not a user switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Connectors are drawn at this zoom level and above.
    pub min_zoom: u32,
    /// Viewport growth factor used when culling places.
    pub bounds_scale: f64,
    /// Draw residential address circles below `min_zoom` too, so address
    /// points can be found at any zoom.
    pub show_residential_outside_zoom: bool,
    /// Optional segment eligibility rules.
    pub rules: SegmentRules,
    /// Primitive styling.
    pub style: StyleConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            bounds_scale: DEFAULT_BOUNDS_SCALE,
            show_residential_outside_zoom: true,
            rules: SegmentRules::default(),
            style: StyleConfig::default(),
        }
    }
}
