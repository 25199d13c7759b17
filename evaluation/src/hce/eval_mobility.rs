use super::{EvalConfig, Tapered};
use crate::hce::context::EvalContext;
use chess::{Color, Piece};
use utils::mobility;

#[inline(always)]
pub(super) fn evaluate(ctx: &EvalContext, color: Color, config: &EvalConfig) -> Tapered {
    let weights = [
        (Piece::Knight, config.knight_mobility_mg, config.knight_mobility_eg),
        (Piece::Bishop, config.bishop_mobility_mg, config.bishop_mobility_eg),
        (Piece::Rook, config.rook_mobility_mg, config.rook_mobility_eg),
        (Piece::Queen, config.queen_mobility_mg, config.queen_mobility_eg),
    ];

    let mut score = Tapered::default();
    for (piece, mg, eg) in weights {
        let squares = mobility(ctx.board, piece, color);
        score += Tapered::new(squares * mg as i32, squares * eg as i32);
    }
    score
}
