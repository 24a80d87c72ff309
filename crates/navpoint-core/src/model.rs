// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only views of the host's places, road segments and road types.
//!
//! The host map model owns these entities; the overlay only reads them and
//! never writes scratch state back onto them.

use core::fmt;
use navpoint_geom::{Bounds, Geometry, LineString, Point};
use serde::{Deserialize, Serialize};

/// Host identifier of a place. Kept opaque because editors hand out both
/// numeric ids and temporary ids for unsaved places.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub String);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Host identifier of a road segment (negative for unsaved segments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub i64);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host identifier of a street record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreetId(pub i64);

/// Road-type classification code, using the editor's numbering.
///
/// Unknown codes are carried through untouched; only the codes the
/// eligibility rules care about get named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoadType(pub u16);

impl RoadType {
    /// Ordinary street.
    pub const STREET: Self = Self(1);
    /// Primary street.
    pub const PRIMARY_STREET: Self = Self(2);
    /// Freeway.
    pub const FREEWAY: Self = Self(3);
    /// Ramp.
    pub const RAMP: Self = Self(4);
    /// Walking trail.
    pub const WALKING_TRAIL: Self = Self(5);
    /// Major highway.
    pub const MAJOR_HIGHWAY: Self = Self(6);
    /// Minor highway.
    pub const MINOR_HIGHWAY: Self = Self(7);
    /// Off-road / not maintained.
    pub const OFF_ROAD: Self = Self(8);
    /// Pedestrian boardwalk.
    pub const PEDESTRIAN_BOARDWALK: Self = Self(10);
    /// Ferry.
    pub const FERRY: Self = Self(15);
    /// Stairway.
    pub const STAIRWAY: Self = Self(16);
    /// Private road.
    pub const PRIVATE_ROAD: Self = Self(17);
    /// Railroad.
    pub const RAILROAD: Self = Self(18);
    /// Runway / taxiway.
    pub const RUNWAY: Self = Self(19);
    /// Parking-lot road.
    pub const PARKING_LOT_ROAD: Self = Self(20);
    /// Alley.
    pub const ALLEY: Self = Self(22);

    /// Road types no vehicle can approach a place from.
    pub const EXCLUDED: [Self; 4] = [
        Self::PEDESTRIAN_BOARDWALK,
        Self::STAIRWAY,
        Self::RAILROAD,
        Self::RUNWAY,
    ];

    /// Returns `true` for pedestrian-only and non-routable infrastructure.
    pub fn is_excluded(self) -> bool {
        Self::EXCLUDED.contains(&self)
    }

    /// Returns `true` for the low-priority parking-lot road class.
    pub fn is_low_priority(self) -> bool {
        self == Self::PARKING_LOT_ROAD
    }

    /// Returns `true` for private roads.
    pub fn is_private(self) -> bool {
        self == Self::PRIVATE_ROAD
    }

    /// Human-readable label, if the code is known.
    pub fn label(self) -> Option<&'static str> {
        Some(match self.0 {
            1 => "Street",
            2 => "Primary Street",
            3 => "Freeway",
            4 => "Ramp",
            5 => "Walking Trail",
            6 => "Major Highway",
            7 => "Minor Highway",
            8 => "Off-road",
            10 => "Pedestrian Boardwalk",
            15 => "Ferry",
            16 => "Stairway",
            17 => "Private Road",
            18 => "Railroad",
            19 => "Runway/Taxiway",
            20 => "Parking Lot Road",
            22 => "Alley",
            _ => return None,
        })
    }
}

impl fmt::Display for RoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "road type {}", self.0),
        }
    }
}

/// A point of interest as seen by the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Host id, used for log fields only.
    pub id: PlaceId,
    /// Point or polygon outline.
    pub geometry: Geometry,
    /// Entry/exit points in host order; the first one is the one drawn.
    #[serde(default)]
    pub entry_exit_points: Vec<Point>,
    /// Residential address point.
    #[serde(default)]
    pub residential: bool,
    /// Parking-lot area.
    #[serde(default)]
    pub parking_lot: bool,
    /// Associated street, if the place has an address.
    #[serde(default)]
    pub street_id: Option<StreetId>,
}

impl Place {
    /// Centroid of the place geometry, or `None` for an empty outline.
    pub fn centroid(&self) -> Option<Point> {
        self.geometry.centroid()
    }

    /// Bounds of the place geometry.
    pub fn bounds(&self) -> Option<Bounds> {
        self.geometry.bounds()
    }

    /// The entry/exit point connectors start from, if any.
    pub fn entry_exit_point(&self) -> Option<Point> {
        self.entry_exit_points.first().copied()
    }

    /// Returns `true` when the geometry is a point.
    pub fn is_point(&self) -> bool {
        self.geometry.is_point()
    }

    /// Returns `true` for residential places.
    pub fn is_residential(&self) -> bool {
        self.residential
    }

    /// Returns `true` for parking lots.
    pub fn is_parking_lot(&self) -> bool {
        self.parking_lot
    }

    /// Residential place without an entry/exit point; drawn as a standalone
    /// address marker instead of a connector.
    pub fn is_unanchored_residential(&self) -> bool {
        self.residential && self.entry_exit_points.is_empty()
    }
}

/// A road-network edge as seen by the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Host id.
    pub id: SegmentId,
    /// Polyline from one node to the other.
    pub geometry: LineString,
    /// Road classification.
    pub road_type: RoadType,
    /// Marked for deletion in the pending edit set.
    #[serde(default)]
    pub deleted: bool,
    /// Primary street the segment belongs to.
    #[serde(default)]
    pub primary_street_id: Option<StreetId>,
}

impl Segment {
    /// Returns `true` if the segment is pending deletion.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use navpoint_geom::Polygon;

    #[test]
    fn excluded_road_types() {
        for rt in [10, 16, 18, 19] {
            assert!(RoadType(rt).is_excluded(), "{rt} should be excluded");
        }
        for rt in [1, 2, 3, 17, 20, 22] {
            assert!(!RoadType(rt).is_excluded(), "{rt} should be routable");
        }
    }

    #[test]
    fn road_type_display_falls_back_to_code() {
        assert_eq!(RoadType::PRIVATE_ROAD.to_string(), "Private Road");
        assert_eq!(RoadType(99).to_string(), "road type 99");
    }

    #[test]
    fn first_entry_point_wins() {
        let place = Place {
            id: "p".into(),
            geometry: Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
            ])
            .into(),
            entry_exit_points: vec![Point::new(1.0, -1.0), Point::new(3.0, 1.0)],
            residential: false,
            parking_lot: false,
            street_id: None,
        };
        assert_eq!(place.entry_exit_point(), Some(Point::new(1.0, -1.0)));
        assert_eq!(place.centroid(), Some(Point::new(1.0, 1.0)));
        assert!(!place.is_point());
        assert!(!place.is_unanchored_residential());
    }

    #[test]
    fn place_deserializes_with_defaults() {
        let json = r#"{
            "id": "42",
            "geometry": {"type": "Point", "coordinates": {"x": 1.0, "y": 2.0}},
            "residential": true
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert!(place.is_unanchored_residential());
        assert!(place.street_id.is_none());
        assert!(place.is_point());
    }
}
