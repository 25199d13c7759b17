use super::pst::pst_for;
use super::Tapered;
use crate::hce::context::EvalContext;
use crate::piece_values::PieceValues;
use chess::{Color, ALL_PIECES};

/// Material plus piece-square bonuses for one side.
#[inline(always)]
pub(super) fn evaluate(ctx: &EvalContext, color: Color, values: &PieceValues) -> Tapered {
    let mut score = Tapered::default();

    for piece in ALL_PIECES {
        let pieces = ctx.pieces_for(piece, color);
        let count = pieces.popcnt() as i32;
        if count == 0 {
            continue;
        }

        let (mg, eg) = values.mg_eg(piece);
        score += Tapered::new(mg as i32 * count, eg as i32 * count);

        let pst = pst_for(piece);
        for square in pieces {
            score += pst.get(square, color);
        }
    }

    score
}
