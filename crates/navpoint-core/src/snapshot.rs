// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory map model, loadable from JSON.

use crate::model::{Place, Segment, StreetId};
use crate::ports::{
    PlaceSource, SegmentSource, SourceError, StreetNames, ViewportSource, ViewportState,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Owned snapshot of everything the overlay reads from a host.
///
/// Used by headless hosts and tests. The JSON form is
/// `{"viewport": {...}, "places": [...], "segments": [...], "streets": {"id": "name"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    /// Current viewport.
    pub viewport: ViewportState,
    /// Loaded places.
    #[serde(default)]
    pub places: Vec<Place>,
    /// Loaded segments.
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Known street names.
    #[serde(default)]
    pub streets: BTreeMap<StreetId, String>,
}

impl MapSnapshot {
    /// Empty snapshot at `viewport`.
    pub fn new(viewport: ViewportState) -> Self {
        Self {
            viewport,
            places: Vec::new(),
            segments: Vec::new(),
            streets: BTreeMap::new(),
        }
    }
}

impl PlaceSource for MapSnapshot {
    fn places(&self) -> Result<Cow<'_, [Place]>, SourceError> {
        Ok(Cow::Borrowed(&self.places))
    }
}

impl SegmentSource for MapSnapshot {
    fn segments(&self) -> Result<Cow<'_, [Segment]>, SourceError> {
        Ok(Cow::Borrowed(&self.segments))
    }
}

impl StreetNames for MapSnapshot {
    fn street_name(&self, id: StreetId) -> Option<&str> {
        self.streets.get(&id).map(String::as_str)
    }
}

impl ViewportSource for MapSnapshot {
    fn viewport(&self) -> Result<ViewportState, SourceError> {
        Ok(self.viewport)
    }
}
