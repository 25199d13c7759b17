use chess::Board;

/// Static position evaluation interface used at search leaves.
///
/// Implementations must be deterministic and free of side effects.
pub trait Evaluator: Send {
    fn name(&self) -> String;
    /// Evaluate position from the side to move's perspective. Positive = good for the mover.
    fn evaluate(&self, board: &Board) -> i16;
}
