// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One full redraw as a pure function of map data, viewport and settings.

use crate::config::OverlayConfig;
use crate::connector::{plan_connector, Connector, ConnectorContext};
use crate::model::{Place, Segment};
use crate::ports::{StreetNames, ViewportState};
use crate::primitives::Primitive;
use navpoint_app_core::OverlaySettings;

/// Plans connectors for every visible place, in place order.
///
/// Returns nothing while the overlay is switched off.
pub fn plan_nav_points(
    places: &[Place],
    segments: &[Segment],
    streets: &dyn StreetNames,
    viewport: &ViewportState,
    settings: &OverlaySettings,
    config: &OverlayConfig,
) -> Vec<Connector> {
    if !settings.visible {
        return Vec::new();
    }
    let ctx = ConnectorContext {
        viewport: *viewport,
        settings: *settings,
        config,
        segments,
        streets,
    };
    places
        .iter()
        .filter_map(|place| plan_connector(place, &ctx))
        .collect()
}

/// Flat primitive batch for one redraw; see [`plan_nav_points`].
pub fn draw_nav_points(
    places: &[Place],
    segments: &[Segment],
    streets: &dyn StreetNames,
    viewport: &ViewportState,
    settings: &OverlaySettings,
    config: &OverlayConfig,
) -> Vec<Primitive> {
    plan_nav_points(places, segments, streets, viewport, settings, config)
        .iter()
        .flat_map(|c| c.primitives(&config.style))
        .collect()
}
