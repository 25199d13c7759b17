/// Tunable weights of the hand-crafted evaluation, in centipawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    // Mobility, per attacked square not occupied by own pieces
    pub knight_mobility_mg: i16,
    pub knight_mobility_eg: i16,
    pub bishop_mobility_mg: i16,
    pub bishop_mobility_eg: i16,
    pub rook_mobility_mg: i16,
    pub rook_mobility_eg: i16,
    pub queen_mobility_mg: i16,
    pub queen_mobility_eg: i16,

    pub bishop_pair_mg: i16,
    pub bishop_pair_eg: i16,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            knight_mobility_mg: 4,
            knight_mobility_eg: 4,
            bishop_mobility_mg: 5,
            bishop_mobility_eg: 5,
            rook_mobility_mg: 2,
            rook_mobility_eg: 4,
            queen_mobility_mg: 1,
            queen_mobility_eg: 2,

            bishop_pair_mg: 30,
            bishop_pair_eg: 50,
        }
    }
}
