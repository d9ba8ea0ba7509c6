//! 384-bit modular arithmetic benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use mod384::{
    Limb384, add_mod_384, add_mod_384_assign,
    bls12_381::{Fp, INV, MODULUS},
    mul_mod_384, sub_mod_384,
};
use std::hint::black_box;

const X: Limb384 = [
    0x20b39e434f6b7627,
    0xe3b9585c3bc798c3,
    0xd601841435360731,
    0x592efb881d54c66d,
    0x8ba6599731e3b7f3,
    0x08e7724179630faa,
];

const Y: Limb384 = [
    0xd2f66b13d3e3cc9e,
    0xc4ad7d09d3b8497d,
    0xfc3bcaaeef9fd81e,
    0x55ff24e182d1d704,
    0x0c05276fe4bb9c8f,
    0x12c30706122c2df5,
];

fn bench_add<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let mut out = [0u64; 6];
    group.bench_function("add", |b| {
        b.iter(|| add_mod_384(&mut out, black_box(&X), black_box(&Y), &MODULUS))
    });
}

fn bench_add_in_place<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let mut x = X;
    group.bench_function("add in place", |b| {
        b.iter(|| add_mod_384_assign(&mut x, black_box(&Y), &MODULUS))
    });
}

fn bench_sub<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let mut out = [0u64; 6];
    group.bench_function("sub", |b| {
        b.iter(|| sub_mod_384(&mut out, black_box(&X), black_box(&Y), &MODULUS))
    });
}

fn bench_mul<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let mut out = [0u64; 6];
    group.bench_function("mul", |b| {
        b.iter(|| mul_mod_384(&mut out, black_box(&X), black_box(&Y), &MODULUS, INV))
    });
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("mod384 primitives");
    bench_add(&mut group);
    bench_add_in_place(&mut group);
    bench_sub(&mut group);
    bench_mul(&mut group);
    group.finish();
}

fn bench_field_element_mul<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let x = Fp::from_canonical_reduced(&X);
    let y = Fp::from_canonical_reduced(&Y);
    group.bench_function("mul", |b| b.iter(|| &x * &y));
}

fn bench_field_element_square<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let x = Fp::from_canonical_reduced(&X);
    group.bench_function("square", |b| b.iter(|| x.square()));
}

fn bench_field_element_invert<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let x = Fp::from_canonical_reduced(&X);
    group.bench_function("invert", |b| b.iter(|| x.invert()));
}

fn bench_field_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("field element operations");
    bench_field_element_mul(&mut group);
    bench_field_element_square(&mut group);
    bench_field_element_invert(&mut group);
    group.finish();
}

criterion_group!(benches, bench_primitives, bench_field_element);
criterion_main!(benches);
