// Move ordering for the main search: TT move, captures, killer, history

use arrayvec::ArrayVec;
use chess::{Board, ChessMove, Piece};

use crate::history::{HistoryTable, HISTORY_MAX};

use super::utils::{material_gain, mvv_lva, pop_highest, ScoredMove, MAX_MOVES};

const TT_MOVE_SCORE: i32 = 1_000_000_000;
const CAPTURE_SCORE: i32 = 100_000_000;
const KILLER_SCORE: i32 = 90_000_000;

const _: () = assert!(HISTORY_MAX < KILLER_SCORE);

/// The legal moves of one node, handed out best-first.
pub struct MoveList {
    moves: ArrayVec<ScoredMove, MAX_MOVES>,
}

impl MoveList {
    pub fn new(
        board: &Board,
        moves: &[ChessMove],
        tt_move: Option<ChessMove>,
        killer: Option<ChessMove>,
        history: &HistoryTable,
    ) -> Self {
        let moves = moves
            .iter()
            .take(MAX_MOVES)
            .map(|&mov| ScoredMove {
                mov,
                score: score_move(board, mov, tt_move, killer, history),
            })
            .collect();

        Self { moves }
    }
}

impl Iterator for MoveList {
    type Item = ChessMove;

    #[inline(always)]
    fn next(&mut self) -> Option<ChessMove> {
        pop_highest(&mut self.moves)
    }
}

#[inline(always)]
fn score_move(
    board: &Board,
    mv: ChessMove,
    tt_move: Option<ChessMove>,
    killer: Option<ChessMove>,
    history: &HistoryTable,
) -> i32 {
    if Some(mv) == tt_move {
        return TT_MOVE_SCORE;
    }

    let attacker = board.piece_on(mv.get_source()).unwrap_or(Piece::Pawn);

    if let Some(gain) = material_gain(board, mv) {
        return CAPTURE_SCORE + mvv_lva(gain, attacker);
    }

    if Some(mv) == killer {
        return KILLER_SCORE;
    }

    history
        .get(board.side_to_move(), attacker, mv.get_dest())
        .min(KILLER_SCORE - 1)
}
