use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snek::core::{DirectionQueue, Engine, GameConfig, GameSession};
use tui_snek::types::Heading;

fn bench_advance(c: &mut Criterion) {
    let mut engine = Engine::new(GameConfig::default(), 12345);
    let board = engine.initial_board();
    let mut directions = DirectionQueue::new(Heading::Right);

    c.bench_function("advance_straight", |b| {
        b.iter(|| {
            let result = engine.advance(black_box(&board), &mut directions);
            black_box(result)
        })
    });
}

fn bench_advance_with_turns(c: &mut Criterion) {
    let mut engine = Engine::new(GameConfig::default(), 12345);
    let board = engine.initial_board();

    c.bench_function("advance_turning", |b| {
        b.iter(|| {
            let mut directions = DirectionQueue::new(Heading::Right);
            directions.push(Heading::Up);
            let result = engine.advance(black_box(&board), &mut directions);
            black_box(result)
        })
    });
}

fn bench_initial_board(c: &mut Criterion) {
    let mut engine = Engine::new(GameConfig::default(), 12345);

    c.bench_function("initial_board", |b| {
        b.iter(|| black_box(engine.initial_board()))
    });
}

fn bench_full_session_tick(c: &mut Criterion) {
    let mut session = GameSession::new(GameConfig::default(), 12345);
    session.start();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if !session.is_active() {
                session.start();
            }
            black_box(session.tick().ok())
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_advance_with_turns,
    bench_initial_board,
    bench_full_session_tick
);
criterion_main!(benches);
