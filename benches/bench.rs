use cga_engine::simd::BatchRotor;
use cga_engine::spaces::cga3::{self, construct, gen};
use cga_engine::spaces::ega3::{self, Mv3};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BATCH_SIZE: usize = 1_000;

/// Benchmark the full 8-component Euclidean geometric product.
fn bench_geometric_product_full(c: &mut Criterion) {
    let a = Mv3::new(black_box([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]));
    let b = a;

    c.bench_function("GA full product 3D × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut out = Mv3::zero();
            for _ in 0..BATCH_SIZE {
                out = black_box(a) * black_box(b);
            }
            black_box(out)
        })
    });
}

/// Benchmark the 32-component conformal geometric product.
fn bench_conformal_product(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut a = cga3::Mv::zero();
    let mut b = cga3::Mv::zero();
    for i in 0..32 {
        a[i] = rng.gen_range(-1.0..1.0);
        b[i] = rng.gen_range(-1.0..1.0);
    }

    c.bench_function("CGA full product 5D × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut out = cga3::Mv::zero();
            for _ in 0..BATCH_SIZE {
                out = black_box(a) * black_box(b);
            }
            black_box(out)
        })
    });
}

/// Benchmark rotating a point: table-driven sandwich vs. folded SIMD.
fn bench_rotate_point(c: &mut Criterion) {
    let rotor = ega3::rotor([0.0, 0.0, 1.0], std::f64::consts::FRAC_PI_2);
    let batch = BatchRotor::from_rotor(&rotor);
    let v0 = ega3::vec(1.0, 0.0, 0.0);

    c.bench_function("rotate 3D point GA (sandwich)", |bencher| {
        bencher.iter(|| {
            let mut res = v0;
            for _ in 0..BATCH_SIZE {
                res = res.sp(black_box(&rotor));
            }
            black_box(res)
        })
    });

    c.bench_function("rotate 3D point GA (folded)", |bencher| {
        bencher.iter(|| {
            let mut res = v0;
            for _ in 0..BATCH_SIZE {
                res = batch.rotate(black_box(res));
            }
            black_box(res)
        })
    });

    c.bench_function("rotate 3D point GA (SIMD 4x)", |bencher| {
        bencher.iter(|| {
            let mut vs = [v0, v0, v0, v0];
            for _ in 0..BATCH_SIZE {
                vs = batch.rotate4(black_box(vs));
            }
            black_box(vs)
        })
    });
}

/// Benchmark a conformal motor sweep over a point.
fn bench_motor_transform(c: &mut Criterion) {
    let m = gen::motor(
        &cga3::vec(0.1, 0.0, 0.0),
        &cga3::Bivector::new([0.05, 0.0, 0.0]),
    );
    let p0 = construct::point(1.0, 2.0, 3.0);

    c.bench_function("motor transform point × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut p = p0;
            for _ in 0..BATCH_SIZE {
                p = p.mot(black_box(&m));
            }
            black_box(p)
        })
    });
}

criterion_group!(
    benches,
    bench_geometric_product_full,
    bench_conformal_product,
    bench_rotate_point,
    bench_motor_transform,
);
criterion_main!(benches);
