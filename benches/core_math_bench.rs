use chart_data::core::{AxisState, Point, Rect};
use chart_data::items::ProfileItem;
use chart_data::render::RecordingSurface;
use chart_data::{ChartData, DataItem, ItemKind};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn terrain(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            Point::new(x, 100.0 + (x * 0.01).sin() * 25.0)
        })
        .collect()
}

fn bench_height_lookup_10k(c: &mut Criterion) {
    let mut profile = ProfileItem::default();
    profile.set_data(terrain(10_000));

    c.bench_function("profile_height_lookup_10k", |b| {
        b.iter(|| profile.height_value(black_box(7_321.5)))
    });
}

fn bench_collection_range(c: &mut Criterion) {
    let mut chart = ChartData::new();
    for kind in [ItemKind::Polygon, ItemKind::Trajectory, ItemKind::Profile] {
        let id = chart.create_item(kind);
        if let Some(item) = chart.item_mut(id) {
            item.set_data(terrain(5_000));
        }
    }

    c.bench_function("collection_range_3x5k", |b| b.iter(|| black_box(chart.range())));
}

fn bench_paint_pass(c: &mut Criterion) {
    let x = AxisState::new(0.0, 10_000.0, 1_920.0).expect("valid x axis");
    let y = AxisState::new(0.0, 200.0, 1_080.0).expect("valid y axis");
    let mut chart = ChartData::new();
    let id = chart.create_item(ItemKind::Trajectory);
    if let Some(item) = chart.item_mut(id) {
        item.set_data(terrain(10_000));
    }
    let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 1_920.0, 1_080.0));

    c.bench_function("paint_trajectory_10k", |b| {
        b.iter(|| {
            surface.clear();
            chart.paint(&mut surface, &x, &y).expect("paint");
        })
    });
}

criterion_group!(
    benches,
    bench_height_lookup_10k,
    bench_collection_range,
    bench_paint_pass
);
criterion_main!(benches);
