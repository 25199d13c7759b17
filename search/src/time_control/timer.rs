use std::time::Instant;

/// Clock collaborator consulted when a search starts.
pub trait Timer {
    /// Milliseconds spent on the current move so far.
    fn elapsed_ms(&self) -> u64;
    /// Milliseconds left on the game clock.
    fn remaining_ms(&self) -> u64;
}

/// Wall-clock timer for a single move with a fixed amount of game time left.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    started: Instant,
    remaining_ms: u64,
}

impl Clock {
    pub fn new(remaining_ms: u64) -> Self {
        Self {
            started: Instant::now(),
            remaining_ms,
        }
    }
}

impl Timer for Clock {
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn remaining_ms(&self) -> u64 {
        self.remaining_ms.saturating_sub(self.elapsed_ms())
    }
}
