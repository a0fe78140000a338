use chart_data::core::{BoundingBox, Point};
use chart_data::items::{PointMarkerItem, PolygonItem, ProfileItem, TrajectoryItem};
use chart_data::render::RecordingSurface;
use chart_data::{ChartData, ChartItem, DataItem};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point> {
    (-1_000.0f64..1_000.0, -1_000.0f64..1_000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn points(min: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point(), min..32)
}

fn bounds() -> impl Strategy<Value = BoundingBox> {
    points(1).prop_map(|points| BoundingBox::from_points(&points))
}

fn any_item() -> impl Strategy<Value = ChartItem> {
    prop_oneof![
        Just(ChartItem::from(PolygonItem::default())),
        Just(ChartItem::from(TrajectoryItem::default())),
        Just(ChartItem::from(ProfileItem::default())),
        Just(ChartItem::from(PointMarkerItem::default())),
    ]
}

proptest! {
    #[test]
    fn merge_is_commutative_and_associative(a in bounds(), b in bounds(), c in bounds()) {
        prop_assert_eq!(a.merge(b), b.merge(a));
        prop_assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
        prop_assert_eq!(a.merge(BoundingBox::EMPTY), a);
    }

    #[test]
    fn bounds_contain_every_point(points in points(1)) {
        let bounds = BoundingBox::from_points(&points);
        for point in &points {
            prop_assert!(bounds.min_x <= point.x && point.x <= bounds.max_x);
            prop_assert!(bounds.min_y <= point.y && point.y <= bounds.max_y);
        }
    }

    #[test]
    fn empty_input_never_replaces_geometry(mut item in any_item(), initial in points(2)) {
        prop_assert!(item.set_data(initial.clone()));
        let range = item.range();

        prop_assert!(!item.set_data(Vec::new()));
        prop_assert_eq!(item.points(), initial.as_slice());
        prop_assert_eq!(item.range(), range);
    }

    #[test]
    fn profile_needs_two_points(initial in points(2), single in point(), next in points(2)) {
        let mut profile = ProfileItem::default();
        profile.set_data(initial.clone());

        prop_assert!(!profile.set_data(vec![single]));
        prop_assert_eq!(profile.points(), initial.as_slice());

        prop_assert!(profile.set_data(next.clone()));
        prop_assert_eq!(profile.points(), next.as_slice());
    }

    #[test]
    fn collection_range_is_merge_of_item_ranges(first in points(1), second in points(1)) {
        let mut chart = ChartData::new();
        let mut polygon = PolygonItem::default();
        polygon.set_data(first.clone());
        let mut markers = PointMarkerItem::default();
        markers.set_data(second.clone());
        chart.add_data_item(polygon);
        chart.add_data_item(markers);

        let merged = BoundingBox::from_points(&first).merge(BoundingBox::from_points(&second));
        prop_assert_eq!(chart.range(), merged.padded_if_degenerate(2.5));
    }

    #[test]
    fn shared_rounded_coordinate_pads_by_margin(x in -500.0f64..500.0, ys in prop::collection::vec(-0.4f64..0.4, 1..16)) {
        let anchor = x.round();
        let mut trajectory = TrajectoryItem::default();
        trajectory.set_data(ys.iter().map(|dy| Point::new(anchor + dy, *dy * 1_000.0)).collect());
        let expected = trajectory.range();
        let mut chart = ChartData::new();
        chart.add_data_item(trajectory);

        let range = chart.range();
        prop_assert_eq!(range.min_x, expected.min_x - 2.5);
        prop_assert_eq!(range.max_x, expected.max_x + 2.5);
    }

    #[test]
    fn trajectory_draws_one_segment_per_pair(points in points(2)) {
        let mut trajectory = TrajectoryItem::default();
        trajectory.set_data(points.clone());
        let mut surface = RecordingSurface::default();
        trajectory.paint(&mut surface).expect("paint");

        prop_assert_eq!(surface.line_count(), points.len() - 1);
        prop_assert!(surface.rects().is_empty());
    }
}
