use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tileswap::core::{GameEngine, RenderSnapshot};
use tileswap::core::rng::SimpleRng;
use tileswap::core::scoring::calculate_score;
use tileswap::core::shuffle;
use tileswap::types::{GamePhase, GridSize, TICK_MS};

fn playing_engine(size: GridSize) -> GameEngine {
    let mut engine = GameEngine::new(12345);
    engine.start_classic(size);
    while engine.phase() != GamePhase::Playing || engine.is_shuffling() {
        engine.tick(TICK_MS);
    }
    engine
}

fn bench_tick(c: &mut Criterion) {
    let mut engine = playing_engine(GridSize::Five);

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            engine.tick(black_box(TICK_MS));
        })
    });
}

fn bench_shuffle_plan(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("shuffle_plan_5x5", |b| {
        b.iter(|| shuffle::generate(&mut rng, black_box(GridSize::Five)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = playing_engine(GridSize::Five);
    let mut snapshot = RenderSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snapshot);
        })
    });
}

fn bench_score(c: &mut Criterion) {
    c.bench_function("calculate_score", |b| {
        b.iter(|| calculate_score(black_box(GridSize::Four), black_box(42), black_box(95_000)))
    });
}

criterion_group!(benches, bench_tick, bench_shuffle_plan, bench_snapshot, bench_score);
criterion_main!(benches);
