use chess::ChessMove;

use crate::MAX_PLY;

/// One quiet refutation move per ply.
///
/// <https://www.chessprogramming.org/Killer_Heuristic>
#[derive(Clone)]
pub struct KillerMoves {
    slots: [Option<ChessMove>; MAX_PLY],
}

impl Default for KillerMoves {
    fn default() -> Self {
        Self {
            slots: [None; MAX_PLY],
        }
    }
}

impl KillerMoves {
    #[inline(always)]
    pub fn get(&self, ply: usize) -> Option<ChessMove> {
        self.slots.get(ply).copied().flatten()
    }

    #[inline(always)]
    pub fn store(&mut self, ply: usize, mv: ChessMove) {
        if let Some(slot) = self.slots.get_mut(ply) {
            *slot = Some(mv);
        }
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}
