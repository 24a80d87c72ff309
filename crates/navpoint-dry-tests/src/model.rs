// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Map model wrapper with switchable source failures.

use navpoint_core::{
    MapSnapshot, Place, PlaceSource, Segment, SegmentSource, SourceError, StreetId, StreetNames,
    ViewportSource, ViewportState,
};
use std::borrow::Cow;

/// Wraps a [`MapSnapshot`] and fails `places()` or `segments()` on demand,
/// standing in for a host model that throws mid-redraw.
#[derive(Debug, Clone)]
pub struct FaultyModel {
    /// Data served while healthy.
    pub snapshot: MapSnapshot,
    /// Fail `places()` when set.
    pub fail_places: bool,
    /// Fail `segments()` when set.
    pub fail_segments: bool,
}

impl FaultyModel {
    /// Healthy model over `snapshot`.
    pub fn new(snapshot: MapSnapshot) -> Self {
        Self {
            snapshot,
            fail_places: false,
            fail_segments: false,
        }
    }
}

impl PlaceSource for FaultyModel {
    fn places(&self) -> Result<Cow<'_, [Place]>, SourceError> {
        if self.fail_places {
            return Err(SourceError::Host("venue model threw".into()));
        }
        self.snapshot.places()
    }
}

impl SegmentSource for FaultyModel {
    fn segments(&self) -> Result<Cow<'_, [Segment]>, SourceError> {
        if self.fail_segments {
            return Err(SourceError::Unavailable("segments"));
        }
        self.snapshot.segments()
    }
}

impl StreetNames for FaultyModel {
    fn street_name(&self, id: StreetId) -> Option<&str> {
        self.snapshot.street_name(id)
    }
}

impl ViewportSource for FaultyModel {
    fn viewport(&self) -> Result<ViewportState, SourceError> {
        self.snapshot.viewport()
    }
}
