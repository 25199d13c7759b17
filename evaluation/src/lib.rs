pub mod def;
pub mod hce;
pub mod piece_values;
pub mod scores;

pub use def::Evaluator;
pub use hce::{EvalConfig, HandCrafted};
pub use piece_values::{piece_value, PieceValues};
