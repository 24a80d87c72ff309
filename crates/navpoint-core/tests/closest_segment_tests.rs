// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Nearest-segment search: exclusions, tie-break, order independence.

use navpoint_core::{
    find_closest_segment, MapSnapshot, Place, Point, RoadType, Segment, SegmentId, SegmentRules,
    StreetId,
};
use navpoint_dry_tests::{horizontal_segment, viewport, PlaceBuilder, SegmentBuilder};
use proptest::prelude::*;

fn streets() -> MapSnapshot {
    let mut snap = MapSnapshot::new(viewport(1_000.0, 7));
    snap.streets.insert(StreetId(1), "Main St".into());
    snap
}

fn shop() -> Place {
    PlaceBuilder::point("shop", Point::ORIGIN).street(1).build()
}

fn closest_id(reference: Point, segments: &[Segment], rules: &SegmentRules) -> Option<SegmentId> {
    find_closest_segment(&reference, segments, rules, &streets(), &shop()).map(|c| c.segment.id)
}

#[test]
fn deleted_nearest_segment_is_skipped() {
    let segments = vec![
        SegmentBuilder::new(1)
            .points(vec![Point::new(-5.0, 1.0), Point::new(5.0, 1.0)])
            .deleted()
            .build(),
        horizontal_segment(2, 5.0, 5.0),
    ];
    let found = find_closest_segment(
        &Point::ORIGIN,
        &segments,
        &SegmentRules::default(),
        &streets(),
        &shop(),
    )
    .expect("a live segment exists");
    assert_eq!(found.segment.id, SegmentId(2));
    assert_eq!(found.point, Point::new(0.0, 5.0));
    assert_eq!(found.distance, 5.0);
}

#[test]
fn excluded_road_types_are_skipped_even_when_nearest() {
    for rt in RoadType::EXCLUDED {
        let segments = vec![
            SegmentBuilder::new(1)
                .points(vec![Point::new(-5.0, 1.0), Point::new(5.0, 1.0)])
                .road_type(rt)
                .build(),
            horizontal_segment(2, -3.0, 5.0),
        ];
        assert_eq!(
            closest_id(Point::ORIGIN, &segments, &SegmentRules::default()),
            Some(SegmentId(2)),
            "{rt} must not anchor a connector"
        );
    }
}

#[test]
fn equidistant_segments_keep_the_first() {
    let segments = vec![horizontal_segment(10, 2.0, 5.0), horizontal_segment(20, -2.0, 5.0)];
    assert_eq!(
        closest_id(Point::ORIGIN, &segments, &SegmentRules::default()),
        Some(SegmentId(10))
    );
    let swapped = vec![segments[1].clone(), segments[0].clone()];
    assert_eq!(
        closest_id(Point::ORIGIN, &swapped, &SegmentRules::default()),
        Some(SegmentId(20))
    );
}

#[test]
fn no_candidates_yields_none() {
    assert_eq!(closest_id(Point::ORIGIN, &[], &SegmentRules::default()), None);
    let only_rail = vec![SegmentBuilder::new(1)
        .points(vec![Point::new(-1.0, 0.0), Point::new(1.0, 0.0)])
        .road_type(RoadType::RAILROAD)
        .build()];
    assert_eq!(closest_id(Point::ORIGIN, &only_rail, &SegmentRules::default()), None);
}

#[test]
fn segments_without_geometry_are_ignored() {
    let segments = vec![SegmentBuilder::new(1).build(), horizontal_segment(2, 9.0, 1.0)];
    assert_eq!(
        closest_id(Point::ORIGIN, &segments, &SegmentRules::default()),
        Some(SegmentId(2))
    );
}

#[test]
fn unnamed_private_road_rule_falls_through_to_next_segment() {
    let segments = vec![
        SegmentBuilder::new(1)
            .points(vec![Point::new(-5.0, 1.0), Point::new(5.0, 1.0)])
            .road_type(RoadType::PRIVATE_ROAD)
            .street(99) // not loaded
            .build(),
        SegmentBuilder::new(2)
            .points(vec![Point::new(-5.0, 2.0), Point::new(5.0, 2.0)])
            .road_type(RoadType::PRIVATE_ROAD)
            .street(1)
            .build(),
    ];
    let rules = SegmentRules {
        ignore_unnamed_private_roads: true,
        ..SegmentRules::default()
    };
    assert_eq!(closest_id(Point::ORIGIN, &segments, &rules), Some(SegmentId(2)));
    assert_eq!(
        closest_id(Point::ORIGIN, &segments, &SegmentRules::default()),
        Some(SegmentId(1))
    );
}

#[test]
fn low_priority_rule_skips_parking_lot_roads() {
    let segments = vec![
        SegmentBuilder::new(1)
            .points(vec![Point::new(-5.0, 1.0), Point::new(5.0, 1.0)])
            .road_type(RoadType::PARKING_LOT_ROAD)
            .street(1)
            .build(),
        horizontal_segment(2, 4.0, 5.0),
    ];
    let rules = SegmentRules {
        ignore_unnamed_low_priority_roads: true,
        ..SegmentRules::default()
    };
    assert_eq!(closest_id(Point::ORIGIN, &segments, &rules), Some(SegmentId(2)));
}

#[test]
fn residential_without_entry_short_circuits() {
    let home = PlaceBuilder::point("home", Point::ORIGIN).residential().build();
    let segments = vec![horizontal_segment(1, 1.0, 5.0)];
    let found = find_closest_segment(
        &Point::ORIGIN,
        &segments,
        &SegmentRules::default(),
        &streets(),
        &home,
    );
    assert!(found.is_none());

    let with_entry = PlaceBuilder::point("home", Point::ORIGIN)
        .residential()
        .entry(Point::new(0.0, 0.5))
        .build();
    let found = find_closest_segment(
        &Point::new(0.0, 0.5),
        &segments,
        &SegmentRules::default(),
        &streets(),
        &with_entry,
    );
    assert_eq!(found.map(|c| c.segment.id), Some(SegmentId(1)));
}

#[test]
fn stop_point_is_projected_onto_polyline() {
    let bent = SegmentBuilder::new(1)
        .points(vec![
            Point::new(-10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 20.0),
        ])
        .build();
    let found = find_closest_segment(
        &Point::new(3.0, 15.0),
        std::slice::from_ref(&bent),
        &SegmentRules::default(),
        &streets(),
        &shop(),
    )
    .expect("one candidate");
    assert_eq!(found.point, Point::new(0.0, 15.0));
    assert_eq!(found.distance, 3.0);
}

fn distinct_rows() -> impl Strategy<Value = Vec<Segment>> {
    // Distinct row offsets guarantee a unique winner regardless of order.
    prop::collection::btree_set(1i32..500, 1..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                horizontal_segment(i64::from(row), sign * f64::from(row), 50.0)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn result_is_independent_of_segment_order(
        (segments, shuffled) in distinct_rows()
            .prop_flat_map(|s| (Just(s.clone()), Just(s).prop_shuffle()))
    ) {
        let a = find_closest_segment(
            &Point::ORIGIN,
            &segments,
            &SegmentRules::default(),
            &streets(),
            &shop(),
        )
        .map(|c| (c.segment.id, c.point));
        let b = find_closest_segment(
            &Point::ORIGIN,
            &shuffled,
            &SegmentRules::default(),
            &streets(),
            &shop(),
        )
        .map(|c| (c.segment.id, c.point));
        prop_assert!(a.is_some());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn deleted_segments_never_win(
        segments in distinct_rows(),
        deleted_mask in prop::collection::vec(any::<bool>(), 24),
    ) {
        let marked: Vec<Segment> = segments
            .into_iter()
            .zip(deleted_mask)
            .map(|(mut s, del)| {
                s.deleted = del;
                s
            })
            .collect();
        let found = find_closest_segment(
            &Point::ORIGIN,
            &marked,
            &SegmentRules::default(),
            &streets(),
            &shop(),
        );
        match found {
            Some(c) => prop_assert!(!c.segment.deleted),
            None => prop_assert!(marked.iter().all(|s| s.deleted)),
        }
    }
}
