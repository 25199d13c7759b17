use chess::{Color, Piece, Square};

use super::Tapered;

/// Piece-Square Table: position-dependent bonuses/penalties for each piece.
/// Separate tables for middlegame (mg) and endgame (eg), interpolated by game phase.
///
/// Tables are written from White's side with a1 at index 0, so rank 1 is the
/// first row below. Black looks up the vertically mirrored square.
///
/// <https://www.chessprogramming.org/Piece-Square_Tables>
#[allow(clippy::upper_case_acronyms)]
pub struct PST {
    pub mg: [i16; 64],
    pub eg: [i16; 64],
}

impl PST {
    #[inline(always)]
    pub fn get(&self, square: Square, color: Color) -> Tapered {
        let index = match color {
            Color::White => square.to_index(),
            Color::Black => square.to_index() ^ 56,
        };
        Tapered::new(self.mg[index] as i32, self.eg[index] as i32)
    }
}

#[inline(always)]
pub fn pst_for(piece: Piece) -> &'static PST {
    match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King => &KING_PST,
    }
}

#[rustfmt::skip]
static PAWN_PST: PST = PST {
    mg: [
          0,   0,   0,   0,   0,   0,   0,   0,
          5,  10,  10, -20, -20,  10,  10,   5,
          5,  -5, -10,   0,   0, -10,  -5,   5,
          0,   0,   0,  20,  20,   0,   0,   0,
          5,   5,  10,  25,  25,  10,   5,   5,
         10,  10,  20,  30,  30,  20,  10,  10,
         50,  50,  50,  50,  50,  50,  50,  50,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
    eg: [
          0,   0,   0,   0,   0,   0,   0,   0,
          5,   5,   5,   5,   5,   5,   5,   5,
          5,   5,   5,   5,   5,   5,   5,   5,
         10,  10,  10,  10,  10,  10,  10,  10,
         25,  25,  25,  25,  25,  25,  25,  25,
         50,  50,  50,  50,  50,  50,  50,  50,
         90,  90,  90,  90,  90,  90,  90,  90,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
};

#[rustfmt::skip]
static KNIGHT_PST: PST = PST {
    mg: [
        -50, -40, -30, -30, -30, -30, -40, -50,
        -40, -20,   0,   5,   5,   0, -20, -40,
        -30,   5,  10,  15,  15,  10,   5, -30,
        -30,   0,  15,  20,  20,  15,   0, -30,
        -30,   5,  15,  20,  20,  15,   5, -30,
        -30,   0,  10,  15,  15,  10,   0, -30,
        -40, -20,   0,   0,   0,   0, -20, -40,
        -50, -40, -30, -30, -30, -30, -40, -50,
    ],
    eg: [
        -50, -40, -30, -30, -30, -30, -40, -50,
        -40, -20,   0,   0,   0,   0, -20, -40,
        -30,   0,  10,  15,  15,  10,   0, -30,
        -30,   5,  15,  20,  20,  15,   5, -30,
        -30,   5,  15,  20,  20,  15,   5, -30,
        -30,   0,  10,  15,  15,  10,   0, -30,
        -40, -20,   0,   0,   0,   0, -20, -40,
        -50, -40, -30, -30, -30, -30, -40, -50,
    ],
};

#[rustfmt::skip]
static BISHOP_PST: PST = PST {
    mg: [
        -20, -10, -10, -10, -10, -10, -10, -20,
        -10,   5,   0,   0,   0,   0,   5, -10,
        -10,  10,  10,  10,  10,  10,  10, -10,
        -10,   0,  10,  10,  10,  10,   0, -10,
        -10,   5,   5,  10,  10,   5,   5, -10,
        -10,   0,   5,  10,  10,   5,   0, -10,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -20, -10, -10, -10, -10, -10, -10, -20,
    ],
    eg: [
        -15, -10, -10,  -5,  -5, -10, -10, -15,
        -10,  -5,   0,   0,   0,   0,  -5, -10,
        -10,   0,   5,   5,   5,   5,   0, -10,
         -5,   0,   5,  10,  10,   5,   0,  -5,
         -5,   0,   5,  10,  10,   5,   0,  -5,
        -10,   0,   5,   5,   5,   5,   0, -10,
        -10,  -5,   0,   0,   0,   0,  -5, -10,
        -15, -10, -10,  -5,  -5, -10, -10, -15,
    ],
};

#[rustfmt::skip]
static ROOK_PST: PST = PST {
    mg: [
          0,   0,   0,   5,   5,   0,   0,   0,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
          5,  10,  10,  10,  10,  10,  10,   5,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
    eg: [
          0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,
          5,   5,   5,   5,   5,   5,   5,   5,
         10,  10,  10,  10,  10,  10,  10,  10,
          5,   5,   5,   5,   5,   5,   5,   5,
    ],
};

#[rustfmt::skip]
static QUEEN_PST: PST = PST {
    mg: [
        -20, -10, -10,  -5,  -5, -10, -10, -20,
        -10,   0,   5,   0,   0,   0,   0, -10,
        -10,   5,   5,   5,   5,   5,   0, -10,
          0,   0,   5,   5,   5,   5,   0,  -5,
         -5,   0,   5,   5,   5,   5,   0,  -5,
        -10,   0,   5,   5,   5,   5,   0, -10,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -20, -10, -10,  -5,  -5, -10, -10, -20,
    ],
    eg: [
        -20, -10, -10,  -5,  -5, -10, -10, -20,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -10,   0,   5,   5,   5,   5,   0, -10,
         -5,   0,   5,  10,  10,   5,   0,  -5,
         -5,   0,   5,  10,  10,   5,   0,  -5,
        -10,   0,   5,   5,   5,   5,   0, -10,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -20, -10, -10,  -5,  -5, -10, -10, -20,
    ],
};

#[rustfmt::skip]
static KING_PST: PST = PST {
    mg: [
         20,  30,  10,   0,   0,  10,  30,  20,
         20,  20,   0,   0,   0,   0,  20,  20,
        -10, -20, -20, -20, -20, -20, -20, -10,
        -20, -30, -30, -40, -40, -30, -30, -20,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
    ],
    eg: [
        -50, -30, -30, -30, -30, -30, -30, -50,
        -30, -30,   0,   0,   0,   0, -30, -30,
        -30, -10,  20,  30,  30,  20, -10, -30,
        -30, -10,  30,  40,  40,  30, -10, -30,
        -30, -10,  30,  40,  40,  30, -10, -30,
        -30, -10,  20,  30,  30,  20, -10, -30,
        -30, -20, -10,   0,   0, -10, -20, -30,
        -50, -40, -30, -20, -20, -30, -40, -50,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_lookup_is_mirrored() {
        let pst = pst_for(Piece::Pawn);
        assert_eq!(pst.get(Square::E4, Color::White), pst.get(Square::E5, Color::Black));
        assert_eq!(pst.get(Square::A7, Color::White), pst.get(Square::A2, Color::Black));
    }

    #[test]
    fn test_central_knight_beats_rim_knight() {
        let pst = pst_for(Piece::Knight);
        assert!(pst.get(Square::E4, Color::White).mg > pst.get(Square::A4, Color::White).mg);
    }
}
