// -------------------------------------------------------------------------
// Solar Axion Flux -- Primakoff Benchmark
// Closed-form cross section, per-shell conversion rate and the full
// radial flux integral for a massless and a 3 keV axion.
// -------------------------------------------------------------------------

use axion_flux::cross_section::total_cross_section;
use axion_flux::flux::PrimakoffFlux;
use axion_flux::transition::transition_rate;
use axion_solar::SolarModel;
use axion_types::config::PrimakoffParams;
use axion_types::units::UnitSystem;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_cross_section(c: &mut Criterion) {
    let u = UnitSystem::default();
    let ks = (9.0 * u.kev).powi(2);
    c.bench_function("total_cross_section_helium", |b| {
        b.iter(|| {
            total_cross_section(
                black_box(4.0 * u.kev),
                ks,
                2.0,
                1.0 * u.kev,
                u.helium_mass(),
                u.alpha_em,
                1e-13,
            )
        })
    });
}

fn bench_transition_rate(c: &mut Criterion) {
    let solar = SolarModel::reference();
    let u = UnitSystem::default();
    let params = PrimakoffParams::reference(&u);
    c.bench_function("transition_rate_core", |b| {
        b.iter(|| transition_rate(4.0 * u.kev, black_box(0.1), &solar, &u, &params))
    });
}

fn bench_flux(c: &mut Criterion) {
    let solar = SolarModel::reference();
    let u = UnitSystem::default();
    let evaluator = PrimakoffFlux::new(&solar, u, PrimakoffParams::reference(&u));

    let mut group = c.benchmark_group("solar_axion_flux");
    group.sample_size(20);
    for ma_kev in [0.0, 3.0] {
        let massive = evaluator.with_axion_mass(ma_kev * u.kev);
        group.bench_with_input(BenchmarkId::new("ma_kev", ma_kev), &massive, |b, f| {
            b.iter(|| f.flux(black_box(4.0 * u.kev)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cross_section,
    bench_transition_rate,
    bench_flux
);
criterion_main!(benches);
