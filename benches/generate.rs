//! Benchmarks for the starfield pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use starfield::check::check_stylesheet;
use starfield::{render_stylesheet, sample_shadows, Colour, Generator, Layer, Tier};

// -- Sampling benchmarks --

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    for count in [100usize, 700, 5000] {
        group.bench_with_input(BenchmarkId::new("sample_shadows", count), &count, |b, &count| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| sample_shadows(&mut rng, black_box(count), Colour::GOLD))
        });
    }

    group.finish();
}

// -- Assembly benchmarks --

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");

    let tiers = Tier::defaults();
    let shadows: Vec<String> = tiers
        .iter()
        .map(|t| sample_shadows(&mut StdRng::seed_from_u64(1), t.count, t.colour))
        .collect();
    let layers: Vec<Layer> = tiers
        .iter()
        .zip(&shadows)
        .map(|(tier, shadows)| Layer::new(tier, shadows))
        .collect();

    group.bench_function("render_stylesheet", |b| {
        b.iter(|| render_stylesheet(black_box(&layers)))
    });

    group.finish();
}

// -- Full pipeline --

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let generator = Generator::default();

    group.bench_function("generate_seeded", |b| {
        b.iter(|| generator.generate_seeded(black_box(42)))
    });

    let css = generator.generate_seeded(42);
    group.bench_function("check_stylesheet", |b| {
        b.iter(|| check_stylesheet(black_box(&css), generator.tiers()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_assembly, bench_pipeline);
criterion_main!(benches);
