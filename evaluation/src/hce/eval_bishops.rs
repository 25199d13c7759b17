use super::{EvalConfig, Tapered};
use crate::hce::context::EvalContext;
use chess::{Color, Piece};

#[inline(always)]
pub(super) fn evaluate(ctx: &EvalContext, color: Color, config: &EvalConfig) -> Tapered {
    if ctx.pieces_for(Piece::Bishop, color).popcnt() >= 2 {
        return Tapered::new(config.bishop_pair_mg as i32, config.bishop_pair_eg as i32);
    }
    Tapered::default()
}
