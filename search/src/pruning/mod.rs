mod aspiration;
mod delta;
mod mate_distance;
mod null_move;
mod reductions;

pub use aspiration::{AspirationWindow, Pass};
pub use delta::can_delta_prune;
pub use mate_distance::mate_distance_prune;
pub use null_move::{can_null_move_prune, null_move_reduction};
pub use reductions::{can_reduce, lmr};
