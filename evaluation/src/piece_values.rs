use chess::Piece;

/// Piece values for middlegame (mg) and endgame (eg), interpolated by game phase.
///
/// <https://www.chessprogramming.org/Tapered_Eval>
#[derive(Debug, Clone, Copy)]
pub struct PieceValues {
    pub pawn_value_mg: i16,
    pub pawn_value_eg: i16,
    pub knight_value_mg: i16,
    pub knight_value_eg: i16,
    pub bishop_value_mg: i16,
    pub bishop_value_eg: i16,
    pub rook_value_mg: i16,
    pub rook_value_eg: i16,
    pub queen_value_mg: i16,
    pub queen_value_eg: i16,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn_value_mg: 82,
            pawn_value_eg: 94,
            knight_value_mg: 337,
            knight_value_eg: 281,
            bishop_value_mg: 365,
            bishop_value_eg: 297,
            rook_value_mg: 477,
            rook_value_eg: 512,
            queen_value_mg: 1025,
            queen_value_eg: 936,
        }
    }
}

impl PieceValues {
    /// Middlegame and endgame value of a piece. Kings carry no material.
    #[inline(always)]
    pub fn mg_eg(&self, piece: Piece) -> (i16, i16) {
        match piece {
            Piece::Pawn => (self.pawn_value_mg, self.pawn_value_eg),
            Piece::Knight => (self.knight_value_mg, self.knight_value_eg),
            Piece::Bishop => (self.bishop_value_mg, self.bishop_value_eg),
            Piece::Rook => (self.rook_value_mg, self.rook_value_eg),
            Piece::Queen => (self.queen_value_mg, self.queen_value_eg),
            Piece::King => (0, 0),
        }
    }
}

pub const PAWN_VALUE: i16 = 100;
pub const KNIGHT_VALUE: i16 = 320;
pub const BISHOP_VALUE: i16 = 330;
pub const ROOK_VALUE: i16 = 500;
pub const QUEEN_VALUE: i16 = 900;
pub const KING_VALUE: i16 = 1000;

/// Flat piece values for move ordering and pruning margins.
#[inline(always)]
pub fn piece_value(piece: Piece) -> i16 {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}
