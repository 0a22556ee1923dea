use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use plum_negamax::game_state::game_state::GameState;
use plum_negamax::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_negamax::search::board_scoring::PositionalScorer;
use plum_negamax::search::negamax::{search, DEFAULT_SEARCH_DEPTH};

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    },
    SearchCase {
        name: "classical_mid",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    },
    SearchCase {
        name: "tactical",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    },
    SearchCase {
        name: "end_kpk",
        fen: "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1",
    },
];

fn bench_negamax(c: &mut Criterion) {
    let depth = std::env::var("PLUM_NEGAMAX_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(DEFAULT_SEARCH_DEPTH)
        .max(1);

    let mut group = c.benchmark_group("negamax_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");
        group.bench_with_input(
            BenchmarkId::new(case.name, format!("d{depth}")),
            &game,
            |b, game| {
                b.iter(|| {
                    let mut scratch = game.clone();
                    let mut rng = StdRng::seed_from_u64(7);
                    let result = search(
                        black_box(&mut scratch),
                        &LegalMoveGenerator,
                        &PositionalScorer,
                        black_box(depth),
                        &mut rng,
                    )
                    .expect("search should run");
                    black_box(result.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_negamax);
criterion_main!(search_benches);
