// Late Move Reduction (LMR)
// Reduces search depth for quiet moves that come late in move ordering
#[inline(always)]
pub fn lmr(remaining_depth: i16, move_index: usize, divisor: i32) -> i16 {
    let depth_factor = (remaining_depth as f32).ln();
    let move_factor = (move_index as f32).ln();
    let divisor = divisor as f32 / 100.0;

    let reduction = (depth_factor * move_factor / divisor).round() as i16;
    let max_reduction = (remaining_depth / 2).max(1);

    reduction.clamp(1, max_reduction)
}

#[inline(always)]
pub fn can_reduce(
    quiet: bool,
    gives_check: bool,
    in_check: bool,
    remaining_depth: i16,
    move_index: usize,
    min_depth: i16,
    min_moves: usize,
) -> bool {
    quiet && !gives_check && !in_check && remaining_depth >= min_depth && move_index >= min_moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_bounds() {
        assert_eq!(lmr(3, 3, 230), 1);
        assert_eq!(lmr(4, 40, 230), 2);
        assert!(lmr(20, 60, 230) <= 10);
        assert!(lmr(20, 60, 230) > lmr(6, 4, 230));
    }

    #[test]
    fn test_only_quiet_late_moves_are_reduced() {
        assert!(can_reduce(true, false, false, 5, 4, 3, 3));
        assert!(!can_reduce(false, false, false, 5, 4, 3, 3));
        assert!(!can_reduce(true, true, false, 5, 4, 3, 3));
        assert!(!can_reduce(true, false, true, 5, 4, 3, 3));
        assert!(!can_reduce(true, false, false, 2, 4, 3, 3));
        assert!(!can_reduce(true, false, false, 5, 2, 3, 3));
    }
}
