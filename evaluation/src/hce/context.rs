use chess::{BitBoard, Board, Color, Piece};
use utils::game_phase;

// Per-call evaluation context shared by the individual terms
pub struct EvalContext<'a> {
    pub board: &'a Board,
    pub phase: i32,
}

impl<'a> EvalContext<'a> {
    #[inline(always)]
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            phase: game_phase(board),
        }
    }

    #[inline(always)]
    pub fn pieces_for(&self, piece: Piece, color: Color) -> BitBoard {
        self.board.pieces(piece) & self.board.color_combined(color)
    }
}
