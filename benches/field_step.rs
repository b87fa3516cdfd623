use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dotfield::config::{AppConfig, FieldParams, GridLayout};
use dotfield::field::DotGrid;
use dotfield::render::FrameRecorder;
use dotfield::scene::Scene;
use dotfield::showcase::StyleTable;
use egui::{Pos2, Vec2};
use rand::Rng;

fn generate_pointer_path(n: usize, width: f32, height: f32) -> Vec<Pos2> {
    let mut rng = rand::rng();
    let mut points = Vec::with_capacity(n);

    for _ in 0..n {
        let x = rng.random_range(0.0..width);
        let y = rng.random_range(0.0..height);
        points.push(Pos2::new(x, y));
    }

    points
}

fn bench_grid_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grid Step");
    let viewport = Vec2::new(1920.0, 1080.0);
    let params = FieldParams::default();

    for &count in &[35, 70, 140] {
        group.bench_function(format!("step_{}x{}", count, count), |b| {
            let mut grid = DotGrid::with_viewport(GridLayout::new(count, 10.0), viewport);
            let path = generate_pointer_path(256, viewport.x, viewport.y);
            let mut strokes = Vec::with_capacity(grid.len());
            let mut frame = 0;
            b.iter(|| {
                strokes.clear();
                grid.step(path[frame % path.len()], &params, &mut strokes);
                frame += 1;
                black_box(&strokes);
            });
        });
    }

    group.finish();
}

fn bench_scene_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scene Frame");
    let viewport = Vec2::new(1920.0, 1080.0);

    group.bench_function("advance_recorded", |b| {
        let mut scene = Scene::new(&AppConfig::default(), StyleTable::default());
        scene.resize(viewport);
        let path = generate_pointer_path(256, viewport.x, viewport.y);
        let mut canvas = FrameRecorder::new();
        let mut frame = 0;
        b.iter(|| {
            canvas.clear();
            scene.advance(Some(path[frame % path.len()]), &mut canvas);
            frame += 1;
            black_box(canvas.commands().len());
        });
    });

    group.bench_function("resize", |b| {
        let mut scene = Scene::new(&AppConfig::default(), StyleTable::default());
        let mut wide = false;
        b.iter(|| {
            wide = !wide;
            let size = if wide { viewport } else { viewport * 0.5 };
            scene.resize(black_box(size));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_grid_step, bench_scene_frame);
criterion_main!(benches);
