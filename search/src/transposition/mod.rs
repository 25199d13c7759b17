mod main;

pub use main::{score_from_tt, score_to_tt, Bound, TranspositionTable, TtEntry};
