// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Builders for places, segments and viewports.

use navpoint_core::{Place, PlaceId, RoadType, Segment, SegmentId, StreetId, ViewportState};
use navpoint_geom::{Bounds, Geometry, LineString, Point, Polygon};

/// Viewport centred on the origin with the given half-extent and zoom.
pub fn viewport(half_extent: f64, zoom: u32) -> ViewportState {
    let h = half_extent.abs();
    ViewportState {
        bounds: Bounds::new(Point::new(-h, -h), Point::new(h, h)),
        zoom,
    }
}

/// Street segment along `y`, spanning `x` in `-half_len..=half_len`.
pub fn horizontal_segment(id: i64, y: f64, half_len: f64) -> Segment {
    SegmentBuilder::new(id)
        .points(vec![Point::new(-half_len, y), Point::new(half_len, y)])
        .build()
}

/// Builder for [`Place`] values; defaults to a non-residential point at the origin.
#[derive(Debug, Clone)]
pub struct PlaceBuilder {
    place: Place,
}

impl PlaceBuilder {
    /// Point place at `at`.
    pub fn point(id: &str, at: Point) -> Self {
        Self {
            place: Place {
                id: PlaceId::from(id),
                geometry: Geometry::Point(at),
                entry_exit_points: Vec::new(),
                residential: false,
                parking_lot: false,
                street_id: None,
            },
        }
    }

    /// Axis-aligned square area place centred at `center`.
    pub fn square(id: &str, center: Point, half: f64) -> Self {
        let ring = vec![
            Point::new(center.x - half, center.y - half),
            Point::new(center.x + half, center.y - half),
            Point::new(center.x + half, center.y + half),
            Point::new(center.x - half, center.y + half),
            Point::new(center.x - half, center.y - half),
        ];
        let mut b = Self::point(id, center);
        b.place.geometry = Geometry::Polygon(Polygon::new(ring));
        b
    }

    /// Append an entry/exit point.
    #[must_use]
    pub fn entry(mut self, p: Point) -> Self {
        self.place.entry_exit_points.push(p);
        self
    }

    /// Mark as residential.
    #[must_use]
    pub fn residential(mut self) -> Self {
        self.place.residential = true;
        self
    }

    /// Mark as a parking lot.
    #[must_use]
    pub fn parking_lot(mut self) -> Self {
        self.place.parking_lot = true;
        self
    }

    /// Associate a street.
    #[must_use]
    pub fn street(mut self, id: i64) -> Self {
        self.place.street_id = Some(StreetId(id));
        self
    }

    /// Finish.
    pub fn build(self) -> Place {
        self.place
    }
}

/// Builder for [`Segment`] values; defaults to a live street with no geometry.
#[derive(Debug, Clone)]
pub struct SegmentBuilder {
    segment: Segment,
}

impl SegmentBuilder {
    /// Street segment with id `id`.
    pub fn new(id: i64) -> Self {
        Self {
            segment: Segment {
                id: SegmentId(id),
                geometry: LineString::default(),
                road_type: RoadType::STREET,
                deleted: false,
                primary_street_id: None,
            },
        }
    }

    /// Set the polyline.
    #[must_use]
    pub fn points(mut self, pts: Vec<Point>) -> Self {
        self.segment.geometry = LineString::new(pts);
        self
    }

    /// Set the road type.
    #[must_use]
    pub fn road_type(mut self, rt: RoadType) -> Self {
        self.segment.road_type = rt;
        self
    }

    /// Mark as deleted.
    #[must_use]
    pub fn deleted(mut self) -> Self {
        self.segment.deleted = true;
        self
    }

    /// Set the primary street.
    #[must_use]
    pub fn street(mut self, id: i64) -> Self {
        self.segment.primary_street_id = Some(StreetId(id));
        self
    }

    /// Finish.
    pub fn build(self) -> Segment {
        self.segment
    }
}
