//! Benchmarks for Game of Life generation stepping.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use game_of_life::{
    compute::{Grid, History},
    schema::{LiveCountPolicy, Pattern, Seed, SimulationConfig},
};

fn noise_config(size: i64) -> (SimulationConfig, Seed) {
    let config = SimulationConfig {
        rows: size,
        columns: size,
        generations: 0,
        live_count: LiveCountPolicy::Distinct,
        history_limit: Some(2),
    };
    let seed = Seed {
        pattern: Pattern::Noise {
            density: 0.35,
            seed: 0x5EED,
        },
    };
    (config, seed)
}

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");

    for size in [64, 128, 256, 512] {
        let (config, seed) = noise_config(size);
        let history = History::from_seed(&seed, &config).unwrap();
        let grid: Grid = history.latest().clone();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| black_box(&grid).next_generation());
            },
        );
    }

    group.finish();
}

fn bench_history_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_advance");

    for limit in [1, 16, 256] {
        let (config, seed) = noise_config(128);
        let mut history = History::from_seed(&seed, &config)
            .unwrap()
            .with_limit(limit);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("limit_{}", limit)),
            &limit,
            |b, _| {
                b.iter(|| {
                    black_box(history.advance());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_next_generation, bench_history_advance);
criterion_main!(benches);
