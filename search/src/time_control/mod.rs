mod budget;
mod timer;

pub use budget::{SearchLimits, TimeBudget};
pub use timer::{Clock, Timer};

/// Nodes between two clock reads. Must be a power of two.
pub const TIME_CHECK_INTERVAL: u64 = 1024;
