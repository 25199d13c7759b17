use chess::{Color, Piece, Square, NUM_COLORS, NUM_PIECES, NUM_SQUARES};

/// Any entry above this triggers a halving of the whole table.
pub const HISTORY_MAX: i32 = 1 << 26;
const MAX_BONUS_SHIFT: i16 = 20;

/// History heuristic for quiet moves: [side][moving piece][target square].
/// Rewarded on beta cutoffs with a bonus growing exponentially in depth.
///
/// <https://www.chessprogramming.org/History_Heuristic>
#[derive(Clone)]
pub struct HistoryTable {
    table: Box<[[[i32; NUM_SQUARES]; NUM_PIECES]; NUM_COLORS]>,
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    pub fn new() -> Self {
        Self {
            table: Box::new([[[0; NUM_SQUARES]; NUM_PIECES]; NUM_COLORS]),
        }
    }

    #[inline(always)]
    pub fn get(&self, color: Color, piece: Piece, dest: Square) -> i32 {
        self.table[color.to_index()][piece.to_index()][dest.to_index()]
    }

    #[inline(always)]
    pub fn reward(&mut self, color: Color, piece: Piece, dest: Square, depth: i16) {
        let bonus = 1i32 << depth.clamp(0, MAX_BONUS_SHIFT);
        let entry = &mut self.table[color.to_index()][piece.to_index()][dest.to_index()];
        *entry = entry.saturating_add(bonus);

        if *entry > HISTORY_MAX {
            self.decay();
        }
    }

    /// Halves every entry, keeping relative order while letting new cutoffs catch up.
    pub fn decay(&mut self) {
        self.table
            .iter_mut()
            .flatten()
            .flatten()
            .for_each(|value| *value /= 2);
    }

    pub fn clear(&mut self) {
        self.table
            .iter_mut()
            .flatten()
            .flatten()
            .for_each(|value| *value = 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_grows_with_depth() {
        let mut history = HistoryTable::new();
        history.reward(Color::White, Piece::Knight, Square::F3, 2);
        assert_eq!(history.get(Color::White, Piece::Knight, Square::F3), 4);

        history.reward(Color::White, Piece::Knight, Square::F3, 5);
        assert_eq!(history.get(Color::White, Piece::Knight, Square::F3), 36);

        // Indexed by side as well
        assert_eq!(history.get(Color::Black, Piece::Knight, Square::F3), 0);
    }

    #[test]
    fn test_overflowing_entry_halves_table() {
        let mut history = HistoryTable::new();
        history.reward(Color::Black, Piece::Pawn, Square::E5, 3);
        for _ in 0..65 {
            history.reward(Color::White, Piece::Queen, Square::D4, 20);
        }

        assert!(history.get(Color::White, Piece::Queen, Square::D4) <= HISTORY_MAX);
        assert!(history.get(Color::Black, Piece::Pawn, Square::E5) < 8);
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryTable::new();
        history.reward(Color::White, Piece::Rook, Square::A8, 4);
        history.clear();
        assert_eq!(history.get(Color::White, Piece::Rook, Square::A8), 0);
    }
}
