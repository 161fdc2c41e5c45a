use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use std::hint::black_box;
use stringing_editor::app::use_cases::curve::promote_to_curve;
use stringing_editor::app::use_cases::frame_update::refresh_connection_geometry;
use stringing_editor::app::use_cases::selection::resolve_pointer_hit;
use stringing_editor::shared::curve_geometry::sample_cubic_bezier;
use stringing_editor::{AppState, CurveControl, Scene};

const SEGMENTS: usize = 50;

/// Baut `count` Punktpaare; jede zweite Connection wird über ein Forcefield gekrümmt.
fn build_synthetic_scene(count: usize) -> Scene {
    let mut scene = Scene::new();

    for index in 0..count {
        let column = (index % 100) as f32 * 20.0 - 1000.0;
        let row = (index / 100) as f32 * 20.0 - 1000.0;
        let start = scene.add_point(Vec3::new(column, 0.0, row));
        let end = scene.add_point(Vec3::new(column + 10.0, 5.0, row));
        let conn = scene
            .add_connection(start, end)
            .expect("Endpunkte existieren");

        if index % 2 == 0 {
            let ff = scene
                .add_forcefield(Vec3::new(column + 5.0, 30.0, row), 20.0)
                .expect("gültiger Durchmesser");
            promote_to_curve(&mut scene, conn, CurveControl::Single(ff), SEGMENTS)
                .expect("Promotion gültig");
        }
    }

    scene
}

fn bench_frame_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_update");

    for &count in &[100usize, 1_000usize, 10_000usize] {
        let mut scene = build_synthetic_scene(count);

        group.bench_with_input(
            BenchmarkId::new("refresh_connection_geometry", count),
            &count,
            |b, _| {
                b.iter(|| black_box(refresh_connection_geometry(&mut scene, SEGMENTS)));
            },
        );
    }

    group.finish();
}

fn bench_curve_sampling(c: &mut Criterion) {
    let p0 = Vec3::new(-100.0, 0.0, 0.0);
    let p1 = Vec3::new(-20.0, 60.0, 10.0);
    let p2 = Vec3::new(20.0, 60.0, -10.0);
    let p3 = Vec3::new(100.0, 0.0, 0.0);

    c.bench_function("sample_cubic_bezier_50", |b| {
        b.iter(|| {
            let samples = sample_cubic_bezier(
                black_box(p0),
                black_box(p1),
                black_box(p2),
                black_box(p3),
                SEGMENTS,
            );
            black_box(samples.len())
        })
    });
}

fn bench_pointer_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_pick");

    for &count in &[1_000usize, 10_000usize] {
        let mut state = AppState::new();
        state.view.viewport_size = [1920.0, 1080.0];
        *state.scene_mut() = build_synthetic_scene(count);
        let query_points: Vec<Vec2> = (0..256)
            .map(|i| Vec2::new((i * 7 % 1920) as f32, (i * 13 % 1080) as f32))
            .collect();

        group.bench_with_input(BenchmarkId::new("resolve_batch", count), &state, |b, state| {
            b.iter(|| {
                let mut hits = 0usize;
                for point in &query_points {
                    if resolve_pointer_hit(state, black_box(*point)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_frame_update,
    bench_curve_sampling,
    bench_pointer_pick
);
criterion_main!(benches);
