use evaluation::scores::is_mate_score;

// Null Move Pruning
// Try passing the turn to the opponent. If they still can't beat beta with a free move,
// the position is likely so good we can prune this branch.
// A mate-range beta is never returned from a null search, it would be an unproven mate.
#[inline(always)]
pub fn can_null_move_prune(
    is_pv_node: bool,
    in_check: bool,
    allow_null: bool,
    remaining_depth: i16,
    min_depth: i16,
    zugzwang_risk: bool,
    beta: i16,
) -> bool {
    !is_pv_node
        && !in_check
        && allow_null
        && remaining_depth >= min_depth
        && !zugzwang_risk
        && !is_mate_score(beta)
}

/// Depth reduction for the null move search. Deeper nodes get more reduction,
/// capped so the reduced search lands at quiescence at the lowest.
#[inline(always)]
pub fn null_move_reduction(remaining_depth: i16, base_reduction: i16, depth_divisor: i16) -> i16 {
    let r = base_reduction + remaining_depth / depth_divisor.max(1);
    r.min(remaining_depth - 1).max(0)
}
