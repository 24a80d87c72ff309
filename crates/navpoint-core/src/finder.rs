// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Segment eligibility rules and the nearest-segment scan.
//!
//! The scan is linear over whatever candidate iterator it is given. A spatial
//! index can replace the iterator without changing this interface.

use crate::model::{Place, Segment};
use crate::ports::StreetNames;
use navpoint_geom::Point;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Optional eligibility rules on top of the fixed exclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentRules {
    /// Skip parking-lot roads.
    pub ignore_unnamed_low_priority_roads: bool,
    /// Skip private roads whose street has no resolvable name.
    pub ignore_unnamed_private_roads: bool,
}

/// The winning segment paired with the closest point on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestSegment<'a> {
    /// Nearest eligible segment.
    pub segment: &'a Segment,
    /// Closest point on `segment` to the reference point (the stop point).
    pub point: Point,
    /// Distance from the reference point to `point`.
    pub distance: f64,
}

/// Returns `true` if `segment` may anchor a connector under `rules`.
///
/// Rules, in order: not deleted; road type not in [`RoadType::EXCLUDED`];
/// not a parking-lot road when those are ignored; not an unnamed private road
/// when those are ignored. A street that cannot be resolved counts as unnamed.
///
/// [`RoadType::EXCLUDED`]: crate::model::RoadType::EXCLUDED
pub fn is_candidate(segment: &Segment, rules: &SegmentRules, streets: &dyn StreetNames) -> bool {
    if segment.is_deleted() {
        return false;
    }
    let road_type = segment.road_type;
    if road_type.is_excluded() {
        return false;
    }
    if rules.ignore_unnamed_low_priority_roads && road_type.is_low_priority() {
        return false;
    }
    if rules.ignore_unnamed_private_roads
        && road_type.is_private()
        && !has_street_name(segment, streets)
    {
        return false;
    }
    true
}

fn has_street_name(segment: &Segment, streets: &dyn StreetNames) -> bool {
    segment
        .primary_street_id
        .and_then(|id| streets.street_name(id))
        .is_some_and(|name| !name.trim().is_empty())
}

/// Finds the eligible segment closest to `reference`.
///
/// Residential places without an entry/exit point never get a connector, so
/// they short-circuit to `None` before any scanning. Otherwise every eligible
/// candidate is measured and the first one with the strictly smallest distance
/// wins; later segments at the same distance do not replace it. Segments with
/// empty geometry are skipped.
pub fn find_closest_segment<'a, I>(
    reference: &Point,
    segments: I,
    rules: &SegmentRules,
    streets: &dyn StreetNames,
    place: &Place,
) -> Option<ClosestSegment<'a>>
where
    I: IntoIterator<Item = &'a Segment>,
{
    if place.is_unanchored_residential() {
        return None;
    }
    let mut best: Option<ClosestSegment<'a>> = None;
    for segment in segments {
        if !is_candidate(segment, rules, streets) {
            continue;
        }
        let Some(details) = segment.geometry.distance_to(reference) else {
            trace!(segment = %segment.id, "skipping segment without geometry");
            continue;
        };
        if best.is_none_or(|b| details.distance < b.distance) {
            best = Some(ClosestSegment {
                segment,
                point: details.nearest,
                distance: details.distance,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoadType, SegmentId, StreetId};
    use navpoint_geom::LineString;
    use std::collections::HashMap;

    struct Streets(HashMap<StreetId, &'static str>);

    impl StreetNames for Streets {
        fn street_name(&self, id: StreetId) -> Option<&str> {
            self.0.get(&id).copied()
        }
    }

    fn seg(id: i64, road_type: RoadType, street: Option<i64>) -> Segment {
        Segment {
            id: SegmentId(id),
            geometry: LineString::new(vec![Point::new(-10.0, 1.0), Point::new(10.0, 1.0)]),
            road_type,
            deleted: false,
            primary_street_id: street.map(StreetId),
        }
    }

    fn streets() -> Streets {
        Streets(HashMap::from([(StreetId(1), "Main St"), (StreetId(2), "  ")]))
    }

    #[test]
    fn private_road_name_rule_only_applies_when_enabled() {
        let rules = SegmentRules {
            ignore_unnamed_private_roads: true,
            ..SegmentRules::default()
        };
        let s = streets();
        assert!(is_candidate(&seg(1, RoadType::PRIVATE_ROAD, Some(1)), &rules, &s));
        // Blank name, unknown street and missing street all count as unnamed.
        assert!(!is_candidate(&seg(2, RoadType::PRIVATE_ROAD, Some(2)), &rules, &s));
        assert!(!is_candidate(&seg(3, RoadType::PRIVATE_ROAD, Some(99)), &rules, &s));
        assert!(!is_candidate(&seg(4, RoadType::PRIVATE_ROAD, None), &rules, &s));
        // Unnamed public streets are unaffected.
        assert!(is_candidate(&seg(5, RoadType::STREET, None), &rules, &s));
        assert!(is_candidate(
            &seg(6, RoadType::PRIVATE_ROAD, None),
            &SegmentRules::default(),
            &s
        ));
    }

    #[test]
    fn low_priority_rule_rejects_parking_lot_roads() {
        let rules = SegmentRules {
            ignore_unnamed_low_priority_roads: true,
            ..SegmentRules::default()
        };
        let s = streets();
        assert!(!is_candidate(&seg(1, RoadType::PARKING_LOT_ROAD, Some(1)), &rules, &s));
        assert!(is_candidate(
            &seg(1, RoadType::PARKING_LOT_ROAD, Some(1)),
            &SegmentRules::default(),
            &s
        ));
    }

    #[test]
    fn deleted_and_excluded_are_never_candidates() {
        let s = streets();
        let rules = SegmentRules::default();
        let mut deleted = seg(1, RoadType::STREET, Some(1));
        deleted.deleted = true;
        assert!(!is_candidate(&deleted, &rules, &s));
        for rt in RoadType::EXCLUDED {
            assert!(!is_candidate(&seg(2, rt, Some(1)), &rules, &s));
        }
    }
}
