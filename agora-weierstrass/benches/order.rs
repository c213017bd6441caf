use agora_weierstrass::Curve;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_order(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let mut group = c.benchmark_group("order");

    let curve = Curve::new(2, 3, 97).unwrap();
    let point = curve.point(3, 6).unwrap();

    group.bench_function("all-points", |b| b.iter(|| curve.all_points()));

    group.bench_function("order-of", |b| b.iter(|| curve.order_of(&point).unwrap()));

    group.bench_function("order-spectrum", |b| {
        b.iter(|| curve.order_spectrum().unwrap())
    });
}

criterion_group!(benches, bench_order);
criterion_main!(benches);
