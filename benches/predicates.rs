use criterion::{criterion_group, criterion_main, Criterion};
use geovec::algorithm::geo::{Distance, Intersects, Within};
use geovec::array::GeometryArray;
use geovec::construction::points;
use geovec::scalar::Geometry;

fn generate_data() -> (GeometryArray, Geometry) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i % 100) as f64).collect();
    let ys: Vec<f64> = (0..10_000).map(|i| (i / 100) as f64).collect();
    let points = points(xs, ys, None).unwrap();
    // An L shape
    let polygon = Geometry::polygon(&[
        [0.0, 0.0],
        [80.0, 0.0],
        [80.0, 20.0],
        [20.0, 20.0],
        [20.0, 80.0],
        [0.0, 80.0],
    ])
    .unwrap();
    (points, polygon)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let (points, polygon) = generate_data();

    c.bench_function("intersects points with polygon", |b| {
        b.iter(|| {
            let _hits = points.intersects(&polygon).unwrap();
        })
    });
    c.bench_function("within points in polygon", |b| {
        b.iter(|| {
            let _hits = points.within(&polygon).unwrap();
        })
    });
    c.bench_function("distance points to polygon", |b| {
        b.iter(|| {
            let _distances = points.distance(&polygon).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
