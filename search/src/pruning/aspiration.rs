use evaluation::scores::SCORE_INF;

#[derive(PartialEq, Debug)]
pub enum Pass {
    Hit(i16),
    FailLow,
    FailHigh,
}

/// Manages aspiration window bounds across search iterations.
/// Starts with a narrow window around the previous score, widens on fail-low/fail-high.
///
/// <https://www.chessprogramming.org/Aspiration_Windows>
#[derive(Copy, Clone)]
pub struct AspirationWindow {
    alpha: i16,
    beta: i16,
    half_width: i16,
    widen: i16,
    enabled_from: u8,
}

impl AspirationWindow {
    pub fn new(half_width: i16, widen: i16, enabled_from: u8) -> Self {
        Self {
            alpha: -SCORE_INF,
            beta: SCORE_INF,
            half_width,
            widen,
            enabled_from,
        }
    }

    /// Sets up the window for a new depth around the previous iteration's score.
    pub fn begin_depth(&mut self, depth: u8, prev_score: i16) {
        if depth < self.enabled_from {
            self.fully_extend();
            return;
        }

        self.alpha = prev_score.saturating_sub(self.half_width).max(-SCORE_INF);
        self.beta = prev_score.saturating_add(self.half_width).min(SCORE_INF);
    }

    pub fn bounds(&self) -> (i16, i16) {
        (self.alpha, self.beta)
    }

    /// Checks score against bounds; widens the failing side on a miss.
    pub fn analyse_pass(&mut self, score: i16) -> Pass {
        if score > self.alpha && score < self.beta {
            return Pass::Hit(score);
        }
        if score <= self.alpha {
            let span = (self.beta as i32 - score as i32).max(self.half_width as i32) * self.widen as i32;
            self.alpha = (score as i32 - span).max(-SCORE_INF as i32) as i16;
            Pass::FailLow
        } else {
            let span = (score as i32 - self.alpha as i32).max(self.half_width as i32) * self.widen as i32;
            self.beta = (score as i32 + span).min(SCORE_INF as i32) as i16;
            Pass::FailHigh
        }
    }

    /// Fully opens the window after too many failures.
    pub fn fully_extend(&mut self) {
        self.alpha = -SCORE_INF;
        self.beta = SCORE_INF;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_depths_use_full_window() {
        let mut window = AspirationWindow::new(50, 2, 3);
        window.begin_depth(2, 120);
        assert_eq!(window.bounds(), (-SCORE_INF, SCORE_INF));

        window.begin_depth(3, 120);
        assert_eq!(window.bounds(), (70, 170));
    }

    #[test]
    fn test_hit_inside_window() {
        let mut window = AspirationWindow::new(50, 2, 1);
        window.begin_depth(4, 0);
        assert_eq!(window.analyse_pass(10), Pass::Hit(10));
    }

    #[test]
    fn test_fail_low_widens_low_side_only() {
        let mut window = AspirationWindow::new(50, 2, 1);
        window.begin_depth(4, 0);
        assert_eq!(window.analyse_pass(-50), Pass::FailLow);

        let (alpha, beta) = window.bounds();
        assert!(alpha < -50);
        assert_eq!(beta, 50);
        assert_eq!(window.analyse_pass(-60), Pass::Hit(-60));
    }

    #[test]
    fn test_fail_high_widens_high_side_only() {
        let mut window = AspirationWindow::new(50, 2, 1);
        window.begin_depth(4, 0);
        assert_eq!(window.analyse_pass(300), Pass::FailHigh);

        let (alpha, beta) = window.bounds();
        assert_eq!(alpha, -50);
        assert!(beta > 300);
    }

    #[test]
    fn test_window_saturates_near_mate_scores() {
        let mut window = AspirationWindow::new(50, 2, 1);
        window.begin_depth(4, SCORE_INF - 10);
        let (_, beta) = window.bounds();
        assert_eq!(beta, SCORE_INF);
        window.fully_extend();
        assert_eq!(window.bounds(), (-SCORE_INF, SCORE_INF));
    }
}
