use chess::{ChessMove, Square};
use search::{Bound, Clock, Engine, EngineConfig, SearchLimits, TranspositionTable};
use utils::Position;

#[test]
fn test_exact_entry_round_trip() {
    let mut tt = TranspositionTable::new((1 << 12) - 1);
    let hash = Position::default().hash();
    let mv = ChessMove::new(Square::E2, Square::E4, None);

    tt.store(hash, 37, 6, Some(mv), Bound::Exact);

    let entry = tt.probe(hash).unwrap();
    for depth in 0..=6 {
        assert!(entry.depth >= depth);
    }
    assert_eq!(entry.score, 37);
    assert_eq!(entry.bound, Bound::Exact);
    assert_eq!(entry.best_move, Some(mv));
}

#[test]
fn test_root_result_is_stored() {
    let mut config = EngineConfig::default();
    config.update("hash_size", "12").unwrap();
    let mut engine = Engine::new(&config);
    let mut position =
        Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
            .unwrap();

    let report = engine.search(&mut position, &SearchLimits::depth(3), &Clock::new(60_000));

    let entry = engine
        .transposition_table()
        .probe(position.hash())
        .unwrap();
    assert_eq!(entry.bound, Bound::Exact);
    assert_eq!(entry.depth, report.depth as i16);
    assert_eq!(entry.score, report.score);
    assert_eq!(entry.best_move, report.best_move);
    assert!(report.hashfull > 0);
}

#[test]
fn test_new_game_clears_table() {
    let mut engine = Engine::new(&EngineConfig::default());
    let mut position = Position::default();
    engine.search(&mut position, &SearchLimits::depth(2), &Clock::new(60_000));
    assert!(engine.transposition_table().probe(position.hash()).is_some());

    engine.new_game();
    assert!(engine.transposition_table().probe(position.hash()).is_none());
}
