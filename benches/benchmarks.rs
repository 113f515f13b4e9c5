/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hydrogen_wf::angular::spherical_harmonic;
use hydrogen_wf::radial::{normalization_seed, radial_wavefunction};
use hydrogen_wf::wavefunction::{evaluate_points, psi, SphericalPoint};
use hydrogen_wf::{HydrogenLike, QuantumNumbers};

fn radial_benchmark(c: &mut Criterion) {
    let atom = HydrogenLike::default();
    let mut group = c.benchmark_group("Radial");

    for &(n, l) in &[(3, 2), (6, 0), (12, 3), (20, 0)] {
        group.bench_function(format!("seed n={} l={}", n, l), |b| {
            b.iter(|| black_box(normalization_seed(&atom, black_box(n), black_box(l))))
        });
        group.bench_function(format!("R n={} l={}", n, l), |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(radial_wavefunction(&atom, n, l, black_box(i as f64 * 0.1)).ok());
                }
            })
        });
    }

    group.finish();
}

fn angular_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Angular");

    group.bench_function("Y l=6 m=-3", |b| {
        b.iter(|| {
            for i in 0..100 {
                let theta = i as f64 * 0.031;
                black_box(spherical_harmonic(6, -3, black_box(theta), black_box(2.0 * theta)).ok());
            }
        })
    });

    group.finish();
}

fn psi_benchmark(c: &mut Criterion) {
    let atom = HydrogenLike::default();
    let state = QuantumNumbers::new(4, 2, 1).unwrap();
    let points: Vec<SphericalPoint> = (0..10_000)
        .map(|i| {
            let t = i as f64 * 1e-3;
            SphericalPoint::new(0.1 + 3.0 * t, t, 2.0 * t)
        })
        .collect();

    let mut group = c.benchmark_group("Wavefunction");

    group.bench_function("psi single point", |b| {
        b.iter(|| black_box(psi(&atom, 4, 2, 1, black_box(2.5), black_box(0.8), black_box(1.2))))
    });

    group.bench_function("psi 10k points parallel", |b| {
        b.iter(|| black_box(evaluate_points(&atom, state, black_box(&points))))
    });

    group.finish();
}

criterion_group!(benches, radial_benchmark, angular_benchmark, psi_benchmark);
criterion_main!(benches);
