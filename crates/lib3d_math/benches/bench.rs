use criterion::{criterion_main, criterion_group, Criterion, black_box};

use lib3d_math::{Vector3, Matrix3};

fn vector_benchmark(c: &mut Criterion) {
    let a = Vector3::new(1.0, -2.0, 3.5);
    let b = Vector3::new(-0.5, 4.0, 2.0);

    c.bench_function("Vector3::cross_product", |bench| bench.iter(|| {
        black_box(a).cross_product(black_box(b))
    }));
    c.bench_function("Vector3::triple_product", |bench| bench.iter(|| {
        black_box(a).triple_product(black_box(b), black_box(Vector3::UNIT_Z))
    }));
    c.bench_function("Vector3::normalize", |bench| bench.iter(|| {
        black_box(a).normalize()
    }));
}

fn matrix_benchmark(c: &mut Criterion) {
    let v = Vector3::new(1.0, -2.0, 3.5);
    let m0 = Matrix3::create_axis_rotation(Vector3::new(1.0, 1.0, 0.0), 0.6);
    let m1 = Matrix3::create_scale(2.0, 3.0, 4.0);

    c.bench_function("Matrix3::transform", |bench| bench.iter(|| {
        black_box(m0).transform(black_box(v))
    }));
    c.bench_function("Matrix3::multiply", |bench| bench.iter(|| {
        black_box(m0).multiply(black_box(m1))
    }));
    c.bench_function("Matrix3::create_axis_rotation", |bench| bench.iter(|| {
        Matrix3::create_axis_rotation(black_box(v), black_box(1.2))
    }));
    c.bench_function("Matrix3::create_reflection", |bench| bench.iter(|| {
        Matrix3::create_reflection(black_box(v))
    }));
}

criterion_group!(benches, vector_benchmark, matrix_benchmark);
criterion_main!(benches);
