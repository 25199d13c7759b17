use chess::{BitBoard, Board, Color, Piece, EMPTY};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

/// Game phase counter at full material (4 minors, 4 rooks, 2 queens).
pub const MAX_PHASE: i32 = 24;

/// Phase weight contributed by a single piece of each kind.
#[inline(always)]
pub fn phase_weight(piece: Piece) -> i32 {
    match piece {
        Piece::Knight | Piece::Bishop => 1,
        Piece::Rook => 2,
        Piece::Queen => 4,
        Piece::Pawn | Piece::King => 0,
    }
}

/// Game phase in `0..=MAX_PHASE`, where `MAX_PHASE` is the opening and 0 a pawn ending.
///
/// <https://www.chessprogramming.org/Tapered_Eval>
#[inline(always)]
pub fn game_phase(board: &Board) -> i32 {
    let phase: i32 = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
        .iter()
        .map(|&piece| board.pieces(piece).popcnt() as i32 * phase_weight(piece))
        .sum();

    phase.min(MAX_PHASE)
}

/// Checks if the position has insufficient material for either side to force checkmate:
/// K vs K, K+minor vs K, and K+B vs K+B with same-coloured bishops.
#[inline(always)]
pub fn has_insufficient_material(board: &Board) -> bool {
    let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    if heavy != EMPTY {
        return false;
    }

    let white = board.color_combined(Color::White);
    let black = board.color_combined(Color::Black);
    let knights = board.pieces(Piece::Knight);
    let bishops = board.pieces(Piece::Bishop);

    let white_minors = ((knights | bishops) & white).popcnt();
    let black_minors = ((knights | bishops) & black).popcnt();

    if white_minors + black_minors <= 1 {
        return true;
    }

    let white_bishops = bishops & white;
    let black_bishops = bishops & black;
    if white_minors == 1
        && black_minors == 1
        && white_bishops.popcnt() == 1
        && black_bishops.popcnt() == 1
    {
        let light_squares = BitBoard(LIGHT_SQUARES_MASK);
        let white_on_light = (white_bishops & light_squares) != EMPTY;
        let black_on_light = (black_bishops & light_squares) != EMPTY;
        return white_on_light == black_on_light;
    }

    false
}

/// Positions where passing might be better than any move, which makes null-move
/// pruning unsound: only king and pawns, or no pawns, no majors and at most one minor.
#[inline(always)]
pub fn is_zugzwang(board: &Board) -> bool {
    let side_bits = *board.color_combined(board.side_to_move());
    let pawn_bits = *board.pieces(Piece::Pawn) & side_bits;
    let king_bits = *board.pieces(Piece::King) & side_bits;

    if side_bits == (pawn_bits | king_bits) {
        return true;
    }

    let minors = (board.pieces(Piece::Knight) | board.pieces(Piece::Bishop)) & side_bits;
    let majors = (board.pieces(Piece::Rook) | board.pieces(Piece::Queen)) & side_bits;

    pawn_bits == EMPTY && majors == EMPTY && minors.popcnt() <= 1
}
