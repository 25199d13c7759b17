// Delta Pruning
// In quiescence, skip captures that cannot lift the stand-pat score to alpha
// even when the captured piece comes for free.
#[inline(always)]
pub fn can_delta_prune(stand_pat: i16, victim_value: i16, margin: i16, alpha: i16) -> bool {
    stand_pat as i32 + victim_value as i32 + (margin as i32) < alpha as i32
}
