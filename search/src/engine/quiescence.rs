use evaluation::{piece_value, scores::mated_in};
use utils::Position;

use crate::{
    move_ordering::QMoveList, pruning::can_delta_prune, time_control::TimeBudget, MAX_PLY,
};

use super::{Aborted, Engine};

impl Engine {
    /// Resolves captures until the position is quiet, so leaves are not scored
    /// in the middle of an exchange. The static evaluation is a lower bound
    /// (stand pat) unless the side to move is in check, in which case every
    /// evasion is searched.
    pub(super) fn quiescence(
        &mut self,
        position: &mut Position,
        ply: usize,
        mut alpha: i16,
        beta: i16,
    ) -> Result<i16, Aborted> {
        self.nodes += 1;
        self.seldepth = self.seldepth.max(ply);
        self.check_time()?;

        if ply >= MAX_PLY - 1 {
            return Ok(self.evaluator.evaluate(position.board()));
        }

        let in_check = position.is_in_check();

        let (mut best_score, moves) = if in_check {
            let evasions = position.legal_moves(false);
            if evasions.is_empty() {
                return Ok(mated_in(ply));
            }
            (mated_in(ply), evasions)
        } else {
            let stand_pat = self.evaluator.evaluate(position.board());
            if stand_pat >= beta {
                return Ok(stand_pat);
            }
            alpha = alpha.max(stand_pat);
            (stand_pat, position.legal_moves(true))
        };

        let stand_pat = best_score;
        let delta_margin = self.config.qs_delta_margin.value;

        for mv in QMoveList::new(position.board(), &moves, in_check) {
            if !in_check && mv.get_promotion().is_none() {
                let victim = position.captured_piece(mv).map_or(0, piece_value);
                if can_delta_prune(stand_pat, victim, delta_margin, alpha) {
                    continue;
                }
            }

            position.make_move(mv);
            let result = self.quiescence(position, ply + 1, -beta, -alpha);
            position.undo_move(mv);
            let score = -result?;

            best_score = best_score.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        Ok(best_score)
    }

    /// Quiescence score of `position` with an untimed budget.
    pub fn quiescence_score(&mut self, position: &mut Position, alpha: i16, beta: i16) -> i16 {
        self.init_search(TimeBudget::unlimited());
        self.quiescence(position, 0, alpha, beta).unwrap_or(0)
    }

    /// Static evaluation of `position` from the side to move's perspective.
    pub fn evaluate(&self, position: &Position) -> i16 {
        self.evaluator.evaluate(position.board())
    }
}
