mod config;
mod context;
mod eval_bishops;
mod eval_material;
mod eval_mobility;
mod pst;
mod tapered;

pub use config::EvalConfig;
use context::EvalContext;
pub use tapered::Tapered;

use crate::def::Evaluator;
use crate::piece_values::PieceValues;
use chess::{Board, Color};
use utils::flip_eval_perspective;

/// Tapered material, piece-square, mobility and bishop-pair evaluation.
#[derive(Debug, Clone, Default)]
pub struct HandCrafted {
    piece_values: PieceValues,
    config: EvalConfig,
}

impl HandCrafted {
    pub fn new(piece_values: PieceValues, config: EvalConfig) -> Self {
        Self {
            piece_values,
            config,
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Score from White's point of view, before the side-to-move flip.
    pub fn evaluate_white(&self, board: &Board) -> i16 {
        let ctx = EvalContext::new(board);

        let mut score = Tapered::default();

        score += eval_material::evaluate(&ctx, Color::White, &self.piece_values);
        score -= eval_material::evaluate(&ctx, Color::Black, &self.piece_values);

        score += eval_mobility::evaluate(&ctx, Color::White, &self.config);
        score -= eval_mobility::evaluate(&ctx, Color::Black, &self.config);

        score += eval_bishops::evaluate(&ctx, Color::White, &self.config);
        score -= eval_bishops::evaluate(&ctx, Color::Black, &self.config);

        score.blend(ctx.phase) as i16
    }
}

impl Evaluator for HandCrafted {
    fn name(&self) -> String {
        "HCE".to_string()
    }

    fn evaluate(&self, board: &Board) -> i16 {
        flip_eval_perspective(board, self.evaluate_white(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(fen: &str) -> i16 {
        HandCrafted::default().evaluate(&fen.parse::<Board>().unwrap())
    }

    #[test]
    fn test_starting_position_is_balanced() {
        assert_eq!(HandCrafted::default().evaluate(&Board::default()), 0);
        assert_eq!(
            eval("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"),
            0
        );
    }

    #[test]
    fn test_score_is_relative_to_side_to_move() {
        let white = eval("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        let black = eval("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1");
        assert!(white > 0);
        assert_eq!(white, -black);
    }

    #[test]
    fn test_mirrored_positions_score_equal() {
        let white = eval("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        let black = eval("4k3/4p3/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(white, black);

        let white = eval("r3k2r/ppp2ppp/2n5/3q4/8/2N2B2/PPP2PPP/R2QK2R w KQkq - 0 1");
        let black = eval("r2qk2r/ppp2ppp/2n2b2/8/3Q4/2N5/PPP2PPP/R3K2R b KQkq - 0 1");
        assert_eq!(white, black);
    }

    #[test]
    fn test_extra_queen_is_winning() {
        assert!(eval("4k3/8/8/8/8/8/8/3QK3 w - - 0 1") > 800);
        assert!(eval("4k3/8/8/8/8/8/8/3QK3 b - - 0 1") < -800);
    }

    #[test]
    fn test_bishop_pair_bonus() {
        let config = EvalConfig::default();
        let pair = "4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1".parse::<Board>().unwrap();
        let ctx = EvalContext::new(&pair);
        let bonus = eval_bishops::evaluate(&ctx, Color::White, &config);
        assert_eq!(
            bonus,
            Tapered::new(config.bishop_pair_mg as i32, config.bishop_pair_eg as i32)
        );
        assert_eq!(
            eval_bishops::evaluate(&ctx, Color::Black, &config),
            Tapered::default()
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let evaluator = HandCrafted::default();
        let board = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3"
            .parse::<Board>()
            .unwrap();
        let first = evaluator.evaluate(&board);
        for _ in 0..10 {
            assert_eq!(evaluator.evaluate(&board), first);
        }
    }
}
