use chess::{Board, ChessMove, Piece};

/// True for en passant captures: a pawn changing file onto an empty square.
#[inline(always)]
pub fn is_en_passant(board: &Board, mv: ChessMove) -> bool {
    board.piece_on(mv.get_source()) == Some(Piece::Pawn)
        && mv.get_source().get_file() != mv.get_dest().get_file()
        && board.piece_on(mv.get_dest()).is_none()
}

#[inline(always)]
pub fn is_capture(board: &Board, mv: ChessMove) -> bool {
    board.piece_on(mv.get_dest()).is_some() || is_en_passant(board, mv)
}

/// The piece removed from the board by `mv`, if any.
#[inline(always)]
pub fn captured_piece(board: &Board, mv: ChessMove) -> Option<Piece> {
    match board.piece_on(mv.get_dest()) {
        Some(piece) => Some(piece),
        None if is_en_passant(board, mv) => Some(Piece::Pawn),
        None => None,
    }
}

/// Neither a capture nor a promotion.
#[inline(always)]
pub fn is_quiet(board: &Board, mv: ChessMove) -> bool {
    mv.get_promotion().is_none() && !is_capture(board, mv)
}
