mod main;
mod quiescence;
mod utils;

pub use main::MoveList;
pub use quiescence::QMoveList;
