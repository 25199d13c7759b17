use evaluation::scores::MATE_VALUE;

// Mate Distance Pruning (MDP)
//
// Adjusts alpha-beta bounds based on the best and worst mate still reachable
// from the current ply. Returns true if the search can be pruned immediately.
//
// Example: a node at ply P can at best deliver mate at ply P + 1 and at worst
// be mated right here, so scores outside [-(MATE_VALUE - P), MATE_VALUE - P - 1]
// are unreachable.
#[inline(always)]
pub fn mate_distance_prune(alpha: &mut i16, beta: &mut i16, ply: usize) -> bool {
    let mated_here = -(MATE_VALUE - ply as i16);
    let mate_next = MATE_VALUE - ply as i16 - 1;

    *alpha = (*alpha).max(mated_here);
    *beta = (*beta).min(mate_next);

    *alpha >= *beta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_clamped() {
        let (mut alpha, mut beta) = (-30_000, 30_000);
        assert!(!mate_distance_prune(&mut alpha, &mut beta, 3));
        assert_eq!(alpha, -(MATE_VALUE - 3));
        assert_eq!(beta, MATE_VALUE - 4);
    }

    #[test]
    fn test_prunes_when_shorter_mate_is_known() {
        // A mate in 1 was already found at the root, nothing at ply 4 can beat it
        let (mut alpha, mut beta) = (MATE_VALUE - 1, 30_000);
        assert!(mate_distance_prune(&mut alpha, &mut beta, 4));
    }
}
