use arrayvec::ArrayVec;
use chess::{Board, ChessMove, Piece};
use evaluation::piece_value;
use utils::captured_piece;

/// Upper bound on legal moves in any chess position.
pub const MAX_MOVES: usize = 256;

pub(super) struct ScoredMove {
    pub mov: ChessMove,
    pub score: i32,
}

pub(super) fn select_highest(array: &[ScoredMove]) -> Option<usize> {
    if array.is_empty() {
        return None;
    }
    let mut best_score = array[0].score;
    let mut best_index = 0;
    for (index, mv) in array.iter().enumerate().skip(1) {
        if mv.score > best_score {
            best_score = mv.score;
            best_index = index;
        }
    }
    Some(best_index)
}

/// Removes and returns the highest scored move (selection sort, one step at a time).
#[inline(always)]
pub(super) fn pop_highest(moves: &mut ArrayVec<ScoredMove, MAX_MOVES>) -> Option<ChessMove> {
    select_highest(moves).map(|index| moves.swap_remove(index).mov)
}

/// Material won by a capture or queen promotion, `None` for other moves.
#[inline(always)]
pub(super) fn material_gain(board: &Board, mv: ChessMove) -> Option<i32> {
    let captured = captured_piece(board, mv).map(|piece| piece_value(piece) as i32);
    let promoted = (mv.get_promotion() == Some(Piece::Queen))
        .then(|| (piece_value(Piece::Queen) - piece_value(Piece::Pawn)) as i32);

    match (captured, promoted) {
        (None, None) => None,
        (c, p) => Some(c.unwrap_or(0) + p.unwrap_or(0)),
    }
}

/// Most valuable victim, least valuable aggressor.
///
/// <https://www.chessprogramming.org/MVV-LVA>
#[inline(always)]
pub(super) fn mvv_lva(gain: i32, attacker: Piece) -> i32 {
    10 * gain - piece_value(attacker) as i32
}
