use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use search::{Clock, Engine, EngineConfig, SearchLimits};
use utils::Position;

const DEPTH: u8 = 6;
const SAMPLE_SIZE: usize = 10;

/// Perft positions from https://github.com/AndyGrant/Ethereal/blob/master/src/perft/standard.epd
const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

fn bench_positions(c: &mut Criterion) {
    let mut engine = Engine::new(&EngineConfig::default());
    let mut group = c.benchmark_group(format!("search/depth_{}", DEPTH));

    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);

    for fen in POSITIONS {
        let position = Position::from_fen(fen).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(fen), &position, |b, position| {
            b.iter(|| {
                engine.new_game();
                let mut position = position.clone();
                black_box(engine.search(
                    &mut position,
                    &SearchLimits::depth(DEPTH),
                    &Clock::new(0),
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_positions);
criterion_main!(benches);
