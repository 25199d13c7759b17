use utils::{is_zugzwang, Position};

use crate::pruning::{can_null_move_prune, null_move_reduction};

use super::{Aborted, Engine, NodeContext};

impl Engine {
    /// Null move pruning: if passing the turn still fails high, so would a real move.
    /// Returns the cutoff score when the node can be pruned.
    pub(super) fn try_null_move_prune(
        &mut self,
        position: &mut Position,
        node: &NodeContext,
        is_pv_node: bool,
        in_check: bool,
    ) -> Result<Option<i16>, Aborted> {
        if !can_null_move_prune(
            is_pv_node,
            in_check,
            node.allow_null,
            node.depth,
            self.config.nmp_min_depth.value,
            is_zugzwang(position.board()),
            node.beta,
        ) {
            return Ok(None);
        }

        let static_eval = self.evaluator.evaluate(position.board());
        if static_eval < node.beta || !position.try_skip_turn() {
            return Ok(None);
        }

        let r = null_move_reduction(
            node.depth,
            self.config.nmp_base_reduction.value,
            self.config.nmp_depth_divisor.value,
        );
        let child = NodeContext {
            allow_null: false,
            ..node.child(node.depth - 1 - r, node.beta - 1, node.beta, node.extensions)
        };

        let result = self.negamax(position, child);
        position.undo_skip_turn();
        let score = -result?;

        // Unproven mate scores from a null search are not trusted
        Ok((score >= node.beta).then_some(node.beta))
    }
}
