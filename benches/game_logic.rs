use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::GameEngine;
use blockfall::types::GameConfig;

fn started_engine(seed: u32) -> GameEngine {
    let mut engine = GameEngine::new(GameConfig::default(), seed);
    engine.begin_game();
    engine.new_shape();
    engine.take_events();
    engine
}

fn bench_gravity_tick(c: &mut Criterion) {
    c.bench_function("gravity_tick", |b| {
        let mut engine = started_engine(12345);
        b.iter(|| {
            engine.let_shape_fall();
            engine.take_events();
            black_box(engine.score());
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    c.bench_function("move_and_rotate", |b| {
        let mut engine = started_engine(54321);
        b.iter(|| {
            engine.move_shape_left();
            engine.move_shape_right();
            engine.rotate_shape();
            engine.take_events();
        })
    });
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    c.bench_function("hard_drop_cycle", |b| {
        b.iter(|| {
            let mut engine = started_engine(999);
            // Drop and settle a handful of pieces, including the cascade.
            for _ in 0..8 {
                engine.drop_shape();
                engine.let_shape_fall();
            }
            engine.take_events();
            black_box(engine.grid().occupied_count());
        })
    });
}

fn bench_line_clear_sweep(c: &mut Criterion) {
    // A 4-wide board clears a row for every settled horizontal line piece,
    // so the sweep path runs on most iterations.
    let config = GameConfig {
        columns: 4,
        rows: 8,
        spawn_column: 1,
        spawn_row: 0,
        preview_column: 6,
        preview_row: 1,
        hold_column: 6,
        hold_row: 1,
        points_per_line: 10,
        level_threshold: 500,
    };

    c.bench_function("line_clear_sweep", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(config, 777);
            engine.begin_game();
            engine.new_shape();
            for _ in 0..6 {
                engine.rotate_shape();
                engine.drop_shape();
                engine.let_shape_fall();
            }
            engine.take_events();
            black_box(engine.score());
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_move_and_rotate,
    bench_hard_drop_cycle,
    bench_line_clear_sweep
);
criterion_main!(benches);
