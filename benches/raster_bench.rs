use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pointraster::bezier::rasterize_curve;
use pointraster::{Point2D, fill_triangle, points_to_floats, rasterize_circle, rasterize_line, screen_to_device};
use std::hint::black_box;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_line");
    for (name, end) in [("shallow", Point2D::new(400.0, 150.0)), ("steep", Point2D::new(-150.0, -400.0))] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &end, |b, &end| {
            b.iter(|| black_box(rasterize_line(black_box(Point2D::new(0.0, 0.0)), end)));
        });
    }
    group.finish();
}

fn triangle_benchmark(c: &mut Criterion) {
    c.bench_function("fill_triangle", |b| {
        b.iter(|| {
            black_box(fill_triangle(
                black_box(Point2D::new(-150.0, -150.0)),
                Point2D::new(20.0, 100.0),
                Point2D::new(200.0, -70.0),
            ))
        });
    });
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_circle");
    for radius in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| black_box(rasterize_circle(Point2D::default(), black_box(radius))));
        });
    }
    group.finish();
}

fn pipeline_benchmark(c: &mut Criterion) {
    c.bench_function("circle_to_device", |b| {
        b.iter(|| {
            let points = rasterize_circle(Point2D::default(), black_box(250));
            black_box(screen_to_device(&points_to_floats(&points), 800, 600))
        });
    });

    let curve = [
        Point2D::new(100.0, 500.0),
        Point2D::new(200.0, 100.0),
        Point2D::new(600.0, 100.0),
        Point2D::new(700.0, 500.0),
    ];
    c.bench_function("rasterize_curve", |b| {
        b.iter(|| black_box(rasterize_curve(black_box(&curve), 1000)));
    });
}

criterion_group!(
    benches,
    line_benchmark,
    triangle_benchmark,
    circle_benchmark,
    pipeline_benchmark
);
criterion_main!(benches);
