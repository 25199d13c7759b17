mod config;
pub mod engine;
pub mod history;
pub mod move_ordering;
mod pruning;
pub mod time_control;
pub mod transposition;

/// Maximum distance from the root the search will reach, quiescence included.
pub const MAX_PLY: usize = 128;

pub use config::{ConfigParam, EngineConfig};
pub use engine::{Aborted, Engine, SearchReport};
pub use time_control::{Clock, SearchLimits, TimeBudget, Timer};
pub use transposition::{Bound, TranspositionTable, TtEntry};
