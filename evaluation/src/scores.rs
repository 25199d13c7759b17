// Score bounds and special values for alpha-beta search.
pub const SCORE_INF: i16 = 30_000;
/// Base value for checkmate. Actual mate scores are MATE_VALUE - ply to distinguish faster mates.
pub const MATE_VALUE: i16 = SCORE_INF - 1000;
/// Scores at or beyond this magnitude encode a forced mate.
pub const MATE_SCORE_BOUND: i16 = MATE_VALUE - 1000;

#[inline(always)]
pub fn is_mate_score(score: i16) -> bool {
    score.abs() >= MATE_SCORE_BOUND
}

/// Score for the side to move being checkmated `ply` plies from the root.
#[inline(always)]
pub fn mated_in(ply: usize) -> i16 {
    -(MATE_VALUE - ply as i16)
}

/// Plies until mate for a mate score, `None` for ordinary scores.
#[inline(always)]
pub fn mate_distance(score: i16) -> Option<i16> {
    is_mate_score(score).then(|| MATE_VALUE - score.abs())
}
