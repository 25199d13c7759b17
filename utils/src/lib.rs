mod attacks;
mod board;
mod eval;
mod moves;
mod position;

pub use attacks::{mobility, piece_attacks};
pub use board::{game_phase, has_insufficient_material, is_zugzwang, phase_weight, MAX_PHASE};
pub use eval::flip_eval_perspective;
pub use moves::{captured_piece, is_capture, is_en_passant, is_quiet};
pub use position::{Position, PositionError};
