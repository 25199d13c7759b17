use chess::ChessMove;
use evaluation::scores::MATE_SCORE_BOUND;

/// Indicates whether the stored score is exact or a bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// True minimax value (alpha < score < beta)
    Exact,
    /// Score >= beta (beta cutoff)
    Lower,
    /// Score <= alpha (all moves failed)
    Upper,
}

impl Bound {
    /// Classifies a fail-soft result against the window the node was searched with.
    #[inline(always)]
    pub fn classify(score: i16, original_alpha: i16, beta: i16) -> Self {
        if score >= beta {
            Bound::Lower
        } else if score <= original_alpha {
            Bound::Upper
        } else {
            Bound::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    /// High 32 bits of the position hash, verified on probe
    pub partial_key: u32,
    /// Score relative to the stored node (see `score_to_tt`)
    pub score: i16,
    /// Remaining depth the score is valid for
    pub depth: i16,
    pub best_move: Option<ChessMove>,
    pub bound: Bound,
}

#[inline(always)]
fn partial_key(hash: u64) -> u32 {
    (hash >> 32) as u32
}

/// Direct-mapped hash table memoizing search results.
/// One entry per slot, indexed by `hash % capacity`; stores always replace.
///
/// <https://www.chessprogramming.org/Transposition_Table>
pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
}

impl TranspositionTable {
    /// Creates a table with `capacity` slots. Capacities of the form `2^k - 1`
    /// keep the modulo spreading every hash bit over the slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![None; capacity.max(1)],
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    fn index(&self, hash: u64) -> usize {
        (hash % self.entries.len() as u64) as usize
    }

    /// Returns the entry stored for this exact position, if any.
    /// The caller decides whether its depth is sufficient for a cutoff.
    #[inline(always)]
    pub fn probe(&self, hash: u64) -> Option<TtEntry> {
        self.entries[self.index(hash)].filter(|entry| entry.partial_key == partial_key(hash))
    }

    #[inline(always)]
    pub fn store(
        &mut self,
        hash: u64,
        score: i16,
        depth: i16,
        best_move: Option<ChessMove>,
        bound: Bound,
    ) {
        let index = self.index(hash);
        self.entries[index] = Some(TtEntry {
            partial_key: partial_key(hash),
            score,
            depth,
            best_move,
            bound,
        });
    }

    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Returns hash table fill rate in permille (0-1000).
    ///
    /// Samples the first 1000 entries to get an approximation of the fill rate.
    pub fn hashfull(&self) -> u16 {
        const MAX_SAMPLE: usize = 1000;

        let sample = &self.entries[..self.entries.len().min(MAX_SAMPLE)];
        let filled = sample.iter().filter(|entry| entry.is_some()).count();

        ((filled * 1000) / sample.len()) as u16
    }
}

/// Converts a mate score found `ply` plies from the root into a score relative
/// to the node, so it stays valid when the position is reached at another ply.
#[inline(always)]
pub fn score_to_tt(score: i16, ply: usize) -> i16 {
    if score >= MATE_SCORE_BOUND {
        score + ply as i16
    } else if score <= -MATE_SCORE_BOUND {
        score - ply as i16
    } else {
        score
    }
}

#[inline(always)]
pub fn score_from_tt(score: i16, ply: usize) -> i16 {
    if score >= MATE_SCORE_BOUND {
        score - ply as i16
    } else if score <= -MATE_SCORE_BOUND {
        score + ply as i16
    } else {
        score
    }
}
