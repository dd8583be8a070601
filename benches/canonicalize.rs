use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pointfield::{cartesian_distance, to_spherical, PointRegistry};

fn bench_create(c: &mut Criterion) {
    let registry = PointRegistry::new();
    let held = registry.cartesian(1.0, 2.0, 3.0).unwrap();

    c.bench_function("create cached", |b| {
        b.iter(|| registry.cartesian(black_box(1.0), black_box(2.0), black_box(3.0)))
    });

    c.bench_function("create transient", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            registry.cartesian(black_box(i as f64), 2.0, 3.0)
        })
    });

    drop(held);
}

fn bench_convert_and_measure(c: &mut Criterion) {
    let registry = PointRegistry::new();
    let a = registry.cartesian(1.0, 1.0, 1.0).unwrap();
    let b = registry.cartesian(10.0, 10.0, 10.0).unwrap();

    c.bench_function("to_spherical", |bench| bench.iter(|| to_spherical(black_box(&a))));
    c.bench_function("cartesian_distance", |bench| {
        bench.iter(|| cartesian_distance(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, bench_create, bench_convert_and_measure);
criterion_main!(benches);
