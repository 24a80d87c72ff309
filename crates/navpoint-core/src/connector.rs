// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-place connector planning: visibility gate, shape and color.

use crate::config::{OverlayConfig, StyleConfig};
use crate::finder::find_closest_segment;
use crate::model::{Place, PlaceId, Segment, SegmentId};
use crate::ports::{StreetNames, ViewportState};
use crate::primitives::{LinePrimitive, MarkerPrimitive, MarkerRole, Primitive};
use navpoint_app_core::OverlaySettings;
use navpoint_geom::{Bounds, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a connector is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorStyle {
    /// Line in the normal color; the place has a street.
    Normal,
    /// Line in the missing-street color; the place has no street.
    MissingStreet,
    /// Standalone dashed circle for a residential place without an entry/exit point.
    ResidentialCircle,
}

/// Planned connector for one place.
///
/// The drawn point sequence is always `centroid`, then `entry_exit` if
/// present, then `stop` if present. Residential circles carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Place the connector belongs to.
    pub place_id: PlaceId,
    /// Place centroid; first point of the sequence.
    pub centroid: Point,
    /// First entry/exit point of the place, if any.
    pub entry_exit: Option<Point>,
    /// Closest point on the chosen segment.
    pub stop: Option<Point>,
    /// Segment the stop point lies on.
    pub segment_id: Option<SegmentId>,
    /// Classification.
    pub style: ConnectorStyle,
}

impl Connector {
    /// Point sequence from the centroid to the stop point.
    pub fn points(&self) -> Vec<Point> {
        core::iter::once(self.centroid)
            .chain(self.entry_exit)
            .chain(self.stop)
            .collect()
    }

    /// Drawable primitives for this connector.
    ///
    /// Lines emit the dashed polyline, then the stop marker, then the
    /// entry/exit marker when there is one. Residential circles emit one
    /// marker and nothing else.
    pub fn primitives(&self, style: &StyleConfig) -> Vec<Primitive> {
        let color = match self.style {
            ConnectorStyle::ResidentialCircle => {
                return vec![Primitive::Marker(MarkerPrimitive {
                    center: self.centroid,
                    radius: style.residential_radius,
                    fill: None,
                    stroke: style.residential_stroke(),
                    role: MarkerRole::ResidentialAddress,
                })];
            }
            ConnectorStyle::Normal => style.line_color,
            ConnectorStyle::MissingStreet => style.missing_street_color,
        };
        let Some(stop) = self.stop else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(3);
        out.push(Primitive::Line(LinePrimitive {
            points: self.points(),
            stroke: style.line_stroke(color),
        }));
        out.push(Primitive::Marker(MarkerPrimitive {
            center: stop,
            radius: style.stop_radius,
            fill: Some(StyleConfig::solid_fill(style.stop_fill)),
            stroke: style.marker_stroke(color),
            role: MarkerRole::StopPoint,
        }));
        if let Some(entry) = self.entry_exit {
            out.push(Primitive::Marker(MarkerPrimitive {
                center: entry,
                radius: style.entry_exit_radius,
                fill: Some(StyleConfig::solid_fill(style.entry_exit_fill)),
                stroke: style.marker_stroke(color),
                role: MarkerRole::EntryExit,
            }));
        }
        out
    }
}

/// Inputs shared by every place in one redraw.
#[derive(Clone, Copy)]
pub struct ConnectorContext<'a> {
    /// Visible extent and zoom.
    pub viewport: ViewportState,
    /// User switches.
    pub settings: OverlaySettings,
    /// Thresholds, rules and styles.
    pub config: &'a OverlayConfig,
    /// Candidate set for the nearest-segment search.
    pub segments: &'a [Segment],
    /// Street name resolver.
    pub streets: &'a dyn StreetNames,
}

impl ConnectorContext<'_> {
    /// Viewport grown by the configured factor; places outside are culled.
    pub fn search_bounds(&self) -> Bounds {
        self.viewport.bounds.scale(self.config.bounds_scale)
    }

    fn zoom_allows(&self, place: &Place) -> bool {
        self.viewport.zoom >= self.config.min_zoom
            || (self.config.show_residential_outside_zoom && place.is_unanchored_residential())
    }
}

/// Visibility gate: parking-lot switch, viewport culling, zoom threshold.
///
/// Residential places without an entry/exit point pass the zoom check at any
/// zoom when `show_residential_outside_zoom` is set.
pub fn is_visible(place: &Place, ctx: &ConnectorContext<'_>) -> bool {
    if place.is_parking_lot() && !ctx.settings.parking_lots_visible {
        return false;
    }
    let in_view = place
        .bounds()
        .is_some_and(|b| b.overlaps(&ctx.search_bounds()));
    in_view && ctx.zoom_allows(place)
}

/// Plans the connector for `place`, or `None` when nothing should be drawn.
pub fn plan_connector(place: &Place, ctx: &ConnectorContext<'_>) -> Option<Connector> {
    if !is_visible(place, ctx) {
        return None;
    }
    let Some(centroid) = place.centroid() else {
        debug!(place = %place.id, "place has no centroid");
        return None;
    };
    if place.is_unanchored_residential() {
        return Some(Connector {
            place_id: place.id.clone(),
            centroid,
            entry_exit: None,
            stop: None,
            segment_id: None,
            style: ConnectorStyle::ResidentialCircle,
        });
    }
    let entry_exit = place.entry_exit_point();
    let reference = entry_exit.unwrap_or(centroid);
    let Some(closest) = find_closest_segment(
        &reference,
        ctx.segments,
        &ctx.config.rules,
        ctx.streets,
        place,
    ) else {
        debug!(place = %place.id, "no eligible segment");
        return None;
    };
    let style = if place.street_id.is_some() {
        ConnectorStyle::Normal
    } else {
        ConnectorStyle::MissingStreet
    };
    Some(Connector {
        place_id: place.id.clone(),
        centroid,
        entry_exit,
        stop: Some(closest.point),
        segment_id: Some(closest.segment.id),
        style,
    })
}

/// Drawable primitives for `place`; empty when the place is gated out or
/// has no eligible segment.
pub fn build_connector(place: &Place, ctx: &ConnectorContext<'_>) -> Vec<Primitive> {
    plan_connector(place, ctx)
        .map(|c| c.primitives(&ctx.config.style))
        .unwrap_or_default()
}
