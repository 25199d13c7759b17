use chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, Color, Piece, Square, EMPTY,
};

/// Squares attacked by `piece` of `color` standing on `square`, given the board occupancy.
#[inline(always)]
pub fn piece_attacks(piece: Piece, square: Square, color: Color, occupied: BitBoard) -> BitBoard {
    match piece {
        Piece::Pawn => get_pawn_attacks(square, color, !EMPTY),
        Piece::Knight => get_knight_moves(square),
        Piece::Bishop => get_bishop_moves(square, occupied),
        Piece::Rook => get_rook_moves(square, occupied),
        Piece::Queen => get_bishop_moves(square, occupied) | get_rook_moves(square, occupied),
        Piece::King => get_king_moves(square),
    }
}

/// Number of squares attacked by all pieces of the given kind and colour,
/// excluding squares occupied by that colour's own pieces.
#[inline(always)]
pub fn mobility(board: &Board, piece: Piece, color: Color) -> i32 {
    let own = *board.color_combined(color);
    let occupied = *board.combined();

    (board.pieces(piece) & own)
        .into_iter()
        .map(|square| (piece_attacks(piece, square, color, occupied) & !own).popcnt() as i32)
        .sum()
}
