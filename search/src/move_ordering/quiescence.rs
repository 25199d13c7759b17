use arrayvec::ArrayVec;
use chess::{Board, ChessMove, Piece};
use evaluation::piece_value;

use super::utils::{material_gain, mvv_lva, pop_highest, ScoredMove, MAX_MOVES};

const KING_EVASION_SCORE: i32 = 10_000;

/// Quiescence ordering: MVV-LVA for captures, or king moves first and then
/// the cheapest mover when escaping check.
pub struct QMoveList {
    moves: ArrayVec<ScoredMove, MAX_MOVES>,
}

impl QMoveList {
    pub fn new(board: &Board, moves: &[ChessMove], in_check: bool) -> Self {
        let moves = moves
            .iter()
            .take(MAX_MOVES)
            .map(|&mov| {
                let attacker = board.piece_on(mov.get_source()).unwrap_or(Piece::Pawn);
                let score = if in_check {
                    evasion_score(attacker)
                } else {
                    mvv_lva(material_gain(board, mov).unwrap_or(0), attacker)
                };
                ScoredMove { mov, score }
            })
            .collect();

        Self { moves }
    }
}

impl Iterator for QMoveList {
    type Item = ChessMove;

    #[inline(always)]
    fn next(&mut self) -> Option<ChessMove> {
        pop_highest(&mut self.moves)
    }
}

#[inline(always)]
fn evasion_score(mover: Piece) -> i32 {
    if mover == Piece::King {
        KING_EVASION_SCORE
    } else {
        -(piece_value(mover) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{MoveGen, Square};

    #[test]
    fn test_evasions_king_first_then_cheapest() {
        // Rook gives check on the e-file; the king can step aside, the bishop or knight can block
        let board = "4r2k/8/8/8/8/2N5/8/1B2K3 w - - 0 1".parse::<Board>().unwrap();
        let moves: Vec<ChessMove> = MoveGen::new_legal(&board).collect();
        let ordered: Vec<ChessMove> = QMoveList::new(&board, &moves, true).collect();

        let movers: Vec<Piece> = ordered
            .iter()
            .map(|mv| board.piece_on(mv.get_source()).unwrap())
            .collect();
        let first_non_king = movers.iter().position(|&p| p != Piece::King).unwrap();
        assert!(movers[..first_non_king].iter().all(|&p| p == Piece::King));
        assert!(movers[first_non_king..].iter().all(|&p| p != Piece::King));
        assert_eq!(movers[first_non_king], Piece::Knight);
        assert_eq!(ordered.len(), moves.len());
        assert!(ordered.contains(&ChessMove::new(Square::C3, Square::E2, None)));
    }

    #[test]
    fn test_captures_by_victim_value() {
        let board = "4k3/8/8/2q1p3/3P4/8/8/4K3 w - - 0 1".parse::<Board>().unwrap();
        let moves: Vec<ChessMove> = MoveGen::new_legal(&board)
            .filter(|mv| board.piece_on(mv.get_dest()).is_some())
            .collect();
        let ordered: Vec<ChessMove> = QMoveList::new(&board, &moves, false).collect();
        assert_eq!(ordered[0], ChessMove::new(Square::D4, Square::C5, None));
        assert_eq!(ordered[1], ChessMove::new(Square::D4, Square::E5, None));
    }
}
