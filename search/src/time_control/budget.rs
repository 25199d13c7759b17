use std::time::Instant;

use super::Timer;

/// How a search is bounded. With neither field set the search spends a share
/// of the remaining game clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop after completing this depth
    pub depth: Option<u8>,
    /// Spend at most this many milliseconds
    pub move_time: Option<u64>,
    /// Abort once this many nodes have been searched
    pub nodes: Option<u64>,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            ..Self::default()
        }
    }

    pub fn move_time(millis: u64) -> Self {
        Self {
            move_time: Some(millis),
            ..Self::default()
        }
    }

    pub fn nodes(nodes: u64) -> Self {
        Self {
            nodes: Some(nodes),
            ..Self::default()
        }
    }
}

/// Time allotted to one decision. No new iteration starts once the soft limit
/// has passed; the running one is aborted at the hard limit or the node limit.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    started: Instant,
    /// Time the timer had already spent on this move when the budget was made
    offset_ms: u64,
    soft_ms: Option<u64>,
    hard_ms: Option<u64>,
    node_limit: Option<u64>,
}

impl TimeBudget {
    pub fn new(limits: &SearchLimits, timer: &dyn Timer, divisor: u64) -> Self {
        let hard_ms = match (limits.move_time, limits.depth, limits.nodes) {
            (Some(millis), _, _) => Some(millis),
            // Depth- and node-limited searches are not timed
            (None, Some(_), _) | (None, None, Some(_)) => None,
            (None, None, None) => Some(timer.remaining_ms() / divisor.max(1)),
        };

        Self {
            started: Instant::now(),
            offset_ms: timer.elapsed_ms(),
            soft_ms: hard_ms.map(|hard| hard / 2),
            hard_ms,
            node_limit: limits.nodes,
        }
    }

    pub fn unlimited() -> Self {
        Self {
            started: Instant::now(),
            offset_ms: 0,
            soft_ms: None,
            hard_ms: None,
            node_limit: None,
        }
    }

    #[inline(always)]
    pub fn elapsed_ms(&self) -> u64 {
        self.offset_ms + self.started.elapsed().as_millis() as u64
    }

    /// Hard limit for this decision, `None` when untimed.
    pub fn limit_ms(&self) -> Option<u64> {
        self.hard_ms
    }

    #[inline(always)]
    pub fn hard_limit_reached(&self) -> bool {
        self.hard_ms.is_some_and(|hard| self.elapsed_ms() >= hard)
    }

    #[inline(always)]
    pub fn soft_limit_reached(&self) -> bool {
        self.soft_ms.is_some_and(|soft| self.elapsed_ms() >= soft)
    }

    #[inline(always)]
    pub fn node_limit_reached(&self, nodes: u64) -> bool {
        self.node_limit.is_some_and(|limit| nodes >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTimer {
        elapsed: u64,
        remaining: u64,
    }

    impl Timer for FixedTimer {
        fn elapsed_ms(&self) -> u64 {
            self.elapsed
        }

        fn remaining_ms(&self) -> u64 {
            self.remaining
        }
    }

    #[test]
    fn test_clock_share() {
        let timer = FixedTimer {
            elapsed: 0,
            remaining: 50_000,
        };
        let budget = TimeBudget::new(&SearchLimits::default(), &timer, 25);
        assert_eq!(budget.limit_ms(), Some(2_000));
        assert!(!budget.hard_limit_reached());
        assert!(!budget.soft_limit_reached());
    }

    #[test]
    fn test_move_time_overrides_clock() {
        let timer = FixedTimer {
            elapsed: 0,
            remaining: 50_000,
        };
        let budget = TimeBudget::new(&SearchLimits::move_time(300), &timer, 25);
        assert_eq!(budget.limit_ms(), Some(300));
    }

    #[test]
    fn test_depth_limit_is_untimed() {
        let timer = FixedTimer {
            elapsed: 0,
            remaining: 0,
        };
        let budget = TimeBudget::new(&SearchLimits::depth(5), &timer, 25);
        assert_eq!(budget.limit_ms(), None);
        assert!(!budget.hard_limit_reached());
        assert!(!TimeBudget::unlimited().soft_limit_reached());
    }

    #[test]
    fn test_zero_budget_is_exhausted_immediately() {
        let timer = FixedTimer {
            elapsed: 0,
            remaining: 0,
        };
        let budget = TimeBudget::new(&SearchLimits::default(), &timer, 25);
        assert!(budget.soft_limit_reached());
        assert!(budget.hard_limit_reached());
    }

    #[test]
    fn test_time_already_spent_counts() {
        let timer = FixedTimer {
            elapsed: 1_500,
            remaining: 50_000,
        };
        let budget = TimeBudget::new(&SearchLimits::default(), &timer, 25);
        assert!(budget.soft_limit_reached());
        assert!(!budget.hard_limit_reached());
    }

    #[test]
    fn test_node_limit_is_untimed() {
        let timer = FixedTimer {
            elapsed: 0,
            remaining: 0,
        };
        let budget = TimeBudget::new(&SearchLimits::nodes(10_000), &timer, 25);
        assert_eq!(budget.limit_ms(), None);
        assert!(!budget.hard_limit_reached());
        assert!(!budget.node_limit_reached(9_999));
        assert!(budget.node_limit_reached(10_000));
        assert!(!TimeBudget::unlimited().node_limit_reached(u64::MAX));
    }
}
