use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece};
use thiserror::Error;

use crate::board::has_insufficient_material;
use crate::moves::{captured_piece, is_capture};

/// Plies without a capture or pawn move after which the game is drawn.
const FIFTY_MOVE_PLIES: u16 = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },
}

/// Everything needed to restore the position before a move (or a skipped turn).
#[derive(Clone, Copy)]
struct Snapshot {
    board: Board,
    halfmove_clock: u16,
    reversible_plies: u16,
    mv: Option<ChessMove>,
}

/// Mutable game state with make/unmake on top of the copy-make `chess::Board`.
///
/// Moves must be undone in the reverse order they were made, including along
/// aborted search paths. Every reached position is hashed so repetitions can
/// be detected without replaying the game.
#[derive(Clone)]
pub struct Position {
    board: Board,
    /// Plies since the last capture or pawn move (fifty-move rule).
    halfmove_clock: u16,
    /// Plies since the last irreversible move or null move (repetition window).
    reversible_plies: u16,
    snapshots: Vec<Snapshot>,
    /// Hash of every position reached so far, the current one last.
    hashes: Vec<u64>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl Position {
    pub fn new(board: Board) -> Self {
        Self::with_clock(board, 0)
    }

    fn with_clock(board: Board, halfmove_clock: u16) -> Self {
        Self {
            board,
            halfmove_clock,
            reversible_plies: halfmove_clock,
            snapshots: Vec::with_capacity(256),
            hashes: vec![board.get_hash()],
        }
    }

    /// Parses a FEN string. The halfmove clock field is honoured when present.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board = Board::from_str(fen).map_err(|e| PositionError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{:?}", e),
        })?;

        let halfmove_clock = fen
            .split_whitespace()
            .nth(4)
            .and_then(|field| field.parse::<u16>().ok())
            .unwrap_or(0);

        Ok(Self::with_clock(board, halfmove_clock))
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline(always)]
    pub fn hash(&self) -> u64 {
        self.board.get_hash()
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Number of moves (and skipped turns) currently on the undo stack.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn make_move(&mut self, mv: ChessMove) {
        let irreversible =
            is_capture(&self.board, mv) || self.board.piece_on(mv.get_source()) == Some(Piece::Pawn);

        self.push_snapshot(Some(mv));
        self.board = self.board.make_move_new(mv);

        if irreversible {
            self.halfmove_clock = 0;
            self.reversible_plies = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
            self.reversible_plies = self.reversible_plies.saturating_add(1);
        }
        self.hashes.push(self.board.get_hash());
    }

    pub fn undo_move(&mut self, mv: ChessMove) {
        let snapshot = self.pop_snapshot();
        debug_assert_eq!(snapshot.mv, Some(mv), "moves must be undone in reverse order");
    }

    /// Passes the turn to the opponent. Returns false (and changes nothing)
    /// when passing is illegal, i.e. while in check.
    pub fn try_skip_turn(&mut self) -> bool {
        let Some(skipped) = self.board.null_move() else {
            return false;
        };

        self.push_snapshot(None);
        self.board = skipped;
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        self.reversible_plies = 0;
        self.hashes.push(self.board.get_hash());
        true
    }

    pub fn undo_skip_turn(&mut self) {
        let snapshot = self.pop_snapshot();
        debug_assert!(snapshot.mv.is_none(), "undo_skip_turn after a real move");
    }

    #[inline(always)]
    fn push_snapshot(&mut self, mv: Option<ChessMove>) {
        self.snapshots.push(Snapshot {
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            reversible_plies: self.reversible_plies,
            mv,
        });
    }

    #[inline(always)]
    fn pop_snapshot(&mut self) -> Snapshot {
        let snapshot = self
            .snapshots
            .pop()
            .expect("undo without a matching make_move/try_skip_turn");

        self.board = snapshot.board;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.reversible_plies = snapshot.reversible_plies;
        self.hashes.pop();
        snapshot
    }

    /// Legal moves in generation order. With `captures_only` the list holds
    /// captures (en passant included) and queen promotions.
    pub fn legal_moves(&self, captures_only: bool) -> Vec<ChessMove> {
        let moves = MoveGen::new_legal(&self.board);
        if !captures_only {
            return moves.collect();
        }

        moves
            .filter(|&mv| {
                is_capture(&self.board, mv) || mv.get_promotion() == Some(Piece::Queen)
            })
            .collect()
    }

    #[inline(always)]
    pub fn is_in_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    /// Draw by rule: fifty-move rule, insufficient material or repetition.
    /// Stalemate is not included; it is detected by the absence of legal moves.
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_PLIES
            || has_insufficient_material(&self.board)
            || self.is_repeated_position()
    }

    /// True if the current position already occurred since the last
    /// irreversible move. A single earlier occurrence is enough.
    pub fn is_repeated_position(&self) -> bool {
        let current = self.board.get_hash();
        let Some((_, earlier)) = self.hashes.split_last() else {
            return false;
        };

        earlier
            .iter()
            .rev()
            .take(self.reversible_plies as usize)
            .skip(1)
            .step_by(2)
            .any(|&hash| hash == current)
    }

    #[inline(always)]
    pub fn moved_piece(&self, mv: ChessMove) -> Option<Piece> {
        self.board.piece_on(mv.get_source())
    }

    #[inline(always)]
    pub fn captured_piece(&self, mv: ChessMove) -> Option<Piece> {
        captured_piece(&self.board, mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::Square;

    fn mv(from: Square, to: Square) -> ChessMove {
        ChessMove::new(from, to, None)
    }

    #[test]
    fn test_make_undo_restores_position() {
        let mut position = Position::default();
        let start_hash = position.hash();

        let e4 = mv(Square::E2, Square::E4);
        position.make_move(e4);
        assert_ne!(position.hash(), start_hash);
        assert_eq!(position.side_to_move(), Color::Black);

        position.undo_move(e4);
        assert_eq!(position.hash(), start_hash);
        assert_eq!(position.depth(), 0);
    }

    #[test]
    fn test_knight_shuffle_is_repetition() {
        let mut position = Position::default();
        let shuffle = [
            mv(Square::G1, Square::F3),
            mv(Square::G8, Square::F6),
            mv(Square::F3, Square::G1),
            mv(Square::F6, Square::G8),
        ];

        for (i, &m) in shuffle.iter().enumerate() {
            assert!(!position.is_repeated_position(), "early repetition at {}", i);
            position.make_move(m);
        }

        assert!(position.is_repeated_position());
        assert!(position.is_draw());

        position.undo_move(shuffle[3]);
        assert!(!position.is_repeated_position());
    }

    #[test]
    fn test_pawn_move_resets_repetition_window() {
        let mut position = Position::default();
        position.make_move(mv(Square::G1, Square::F3));
        position.make_move(mv(Square::G8, Square::F6));
        position.make_move(mv(Square::E2, Square::E4));
        position.make_move(mv(Square::F6, Square::G8));
        position.make_move(mv(Square::F3, Square::G1));
        position.make_move(mv(Square::G8, Square::F6));
        assert!(!position.is_repeated_position());
    }

    #[test]
    fn test_skip_turn_fails_in_check() {
        let mut position =
            Position::from_fen("4k3/8/8/8/8/8/4q3/4K3 w - - 0 1").unwrap();
        assert!(position.is_in_check());
        assert!(!position.try_skip_turn());
        assert_eq!(position.depth(), 0);
    }

    #[test]
    fn test_skip_turn_flips_side_and_restores() {
        let mut position = Position::default();
        let hash = position.hash();

        assert!(position.try_skip_turn());
        assert_eq!(position.side_to_move(), Color::Black);
        assert_ne!(position.hash(), hash);

        position.undo_skip_turn();
        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.hash(), hash);
    }

    #[test]
    fn test_captures_only_includes_en_passant() {
        let position =
            Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
        let captures = position.legal_moves(true);
        assert_eq!(captures, vec![mv(Square::E5, Square::D6)]);
        assert_eq!(position.captured_piece(captures[0]), Some(Piece::Pawn));
    }

    #[test]
    fn test_captures_only_excludes_quiet_moves() {
        let position = Position::default();
        assert!(position.legal_moves(true).is_empty());
        assert_eq!(position.legal_moves(false).len(), 20);
    }

    #[test]
    fn test_fifty_move_rule_from_fen_clock() {
        let position =
            Position::from_fen("4k3/8/8/8/8/8/3R4/4K3 w - - 100 80").unwrap();
        assert!(position.is_draw());

        let position =
            Position::from_fen("4k3/8/8/8/8/8/3R4/4K3 w - - 99 80").unwrap();
        assert!(!position.is_draw());
    }

    #[test]
    fn test_checkmate_detection() {
        let position =
            Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(position.is_checkmate());
        assert!(position.legal_moves(false).is_empty());
    }

    #[test]
    fn test_invalid_fen() {
        assert!(matches!(
            Position::from_fen("not a fen"),
            Err(PositionError::InvalidFen { .. })
        ));
    }
}
