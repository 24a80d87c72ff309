// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Place navpoint overlay core.
//!
//! For every place near the viewport the overlay draws a short connector from
//! the place to the nearest usable road segment, with markers for the stop
//! point and the place's entry/exit point. Residential address points without
//! an entry/exit point get a standalone circle instead.
//!
//! # Layout
//!
//! - [`model`]: read-only views of host places, segments and road types.
//! - [`ports`]: data-source traits the host implements, plus [`MapEvent`].
//! - [`finder`]: eligibility rules and the nearest-segment scan.
//! - [`connector`]: visibility gate and per-place connector planning.
//! - [`draw`]: the pure `(places, segments, viewport, settings) -> primitives` pass.
//! - [`overlay`]: the event dispatcher that owns settings and feeds a [`RenderPort`].
//!
//! The core never mutates host data and keeps no state between redraws beyond
//! the two persisted switches.

pub mod config;
pub mod connector;
pub mod draw;
pub mod finder;
pub mod model;
pub mod overlay;
pub mod ports;
pub mod primitives;
pub mod render_port;
pub mod snapshot;

pub use config::{OverlayConfig, StyleConfig};
pub use connector::{
    build_connector, is_visible, plan_connector, Connector, ConnectorContext, ConnectorStyle,
};
pub use draw::{draw_nav_points, plan_nav_points};
pub use finder::{find_closest_segment, is_candidate, ClosestSegment, SegmentRules};
pub use model::{Place, PlaceId, RoadType, Segment, SegmentId, StreetId};
pub use navpoint_app_core::OverlaySettings;
pub use navpoint_geom::{Bounds, Point};
pub use overlay::{NavPointOverlay, OverlayError};
pub use ports::{
    MapEvent, MapModel, PlaceSource, SegmentSource, SourceError, StreetNames, ViewportSource,
    ViewportState,
};
pub use primitives::{
    Color, DashStyle, Fill, LinePrimitive, MarkerPrimitive, MarkerRole, Primitive, Stroke,
};
pub use render_port::RenderPort;
pub use snapshot::MapSnapshot;
