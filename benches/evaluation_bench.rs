//! Evaluation Benchmarks
//!
//! Performance benchmarks for the evaluator using Criterion.

use chess_eval::evaluation::evaluate_material;
use chess_eval::{EvalConfig, Evaluator, MoveGenerator, NoMoves, Position, RulesGenerator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MIDDLEGAME: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_static_evaluation_starting(c: &mut Criterion) {
    let position = Position::starting();
    let evaluator = Evaluator::new(NoMoves);

    c.bench_function("evaluate_static_starting_position", |b| {
        b.iter(|| black_box(evaluator.evaluate(black_box(&position))))
    });
}

fn bench_full_evaluation_middlegame(c: &mut Criterion) {
    let Ok(position) = Position::from_fen(MIDDLEGAME) else {
        return;
    };
    let evaluator = Evaluator::new(RulesGenerator);

    c.bench_function("evaluate_full_middlegame", |b| {
        b.iter(|| black_box(evaluator.evaluate(black_box(&position))))
    });
}

fn bench_legal_move_generation(c: &mut Criterion) {
    let position = Position::starting();

    c.bench_function("rules_generator_starting_position", |b| {
        b.iter(|| black_box(RulesGenerator.generate_legal_moves(black_box(&position)).len()))
    });
}

fn bench_material_only(c: &mut Criterion) {
    let position = Position::starting();
    let config = EvalConfig::default();

    c.bench_function("evaluate_material_starting_position", |b| {
        b.iter(|| black_box(evaluate_material(black_box(&position), &config)))
    });
}

criterion_group!(
    benches,
    bench_static_evaluation_starting,
    bench_full_evaluation_middlegame,
    bench_legal_move_generation,
    bench_material_only,
);
criterion_main!(benches);
