// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Data-source ports the host implements, and the events that trigger a redraw.

use crate::model::{Place, Segment, StreetId};
use navpoint_geom::Bounds;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

/// Failure reported by a host data source.
///
/// These are unexpected at the overlay's level: the dispatcher logs them and
/// skips the redraw instead of propagating them into the host's event loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The host model is not ready yet (still loading, mid-merge).
    #[error("{0} not available")]
    Unavailable(&'static str),
    /// Any other host-side failure.
    #[error("host error: {0}")]
    Host(String),
}

/// Enumerates the places currently loaded in the host model.
pub trait PlaceSource {
    /// All loaded places, in host order.
    fn places(&self) -> Result<Cow<'_, [Place]>, SourceError>;
}

/// Enumerates the road segments currently loaded in the host model.
pub trait SegmentSource {
    /// All loaded segments, in host order. This is the candidate set the
    /// nearest-segment search scans.
    fn segments(&self) -> Result<Cow<'_, [Segment]>, SourceError>;
}

/// Resolves street ids to names.
pub trait StreetNames {
    /// Name of the street, or `None` when the street is unknown or not yet
    /// loaded. Must never fail.
    fn street_name(&self, id: StreetId) -> Option<&str>;
}

/// Visible map area and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Visible extent in map units.
    pub bounds: Bounds,
    /// Editor zoom level.
    pub zoom: u32,
}

/// Current viewport of the host map.
pub trait ViewportSource {
    /// Visible bounds and zoom level.
    fn viewport(&self) -> Result<ViewportState, SourceError>;
}

/// Everything the overlay reads from the host, in one bound.
pub trait MapModel: PlaceSource + SegmentSource + StreetNames + ViewportSource {}

impl<T> MapModel for T where T: PlaceSource + SegmentSource + StreetNames + ViewportSource {}

/// Host notification that map data or the view changed.
///
/// Every variant means the same thing to the overlay: recompute now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapEvent {
    /// Places were added to the model.
    PlacesAdded,
    /// Places changed.
    PlacesChanged,
    /// Places were removed.
    PlacesRemoved,
    /// Segments were added to the model.
    SegmentsAdded,
    /// Segments changed.
    SegmentsChanged,
    /// Segments were removed.
    SegmentsRemoved,
    /// The map was panned.
    Moved,
    /// The zoom level changed.
    Zoomed,
    /// The editor finished merging freshly loaded data.
    MergeEnd,
}

impl MapEvent {
    /// Every event the overlay subscribes to.
    pub const ALL: [Self; 9] = [
        Self::PlacesAdded,
        Self::PlacesChanged,
        Self::PlacesRemoved,
        Self::SegmentsAdded,
        Self::SegmentsChanged,
        Self::SegmentsRemoved,
        Self::Moved,
        Self::Zoomed,
        Self::MergeEnd,
    ];
}
