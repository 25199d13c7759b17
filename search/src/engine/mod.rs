use std::time::Duration;

use chess::ChessMove;
use evaluation::{Evaluator, HandCrafted, PieceValues};

use crate::{
    history::{HistoryTable, KillerMoves},
    time_control::{TimeBudget, TIME_CHECK_INTERVAL},
    transposition::TranspositionTable,
    EngineConfig,
};

mod pruning;
mod quiescence;
mod search;

/// The in-flight search ran out of time. Its partial result must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

/// Window and bookkeeping threaded through every recursive call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeContext {
    /// Remaining plies; zero or less enters quiescence
    pub depth: i16,
    /// Distance from the searched position
    pub ply: usize,
    pub alpha: i16,
    pub beta: i16,
    /// Check extensions granted so far along this branch
    pub extensions: u8,
    /// False directly below a null move
    pub allow_null: bool,
}

impl NodeContext {
    pub fn root(depth: i16, alpha: i16, beta: i16) -> Self {
        Self {
            depth,
            ply: 0,
            alpha,
            beta,
            extensions: 0,
            allow_null: true,
        }
    }

    /// Context for a child node searched with the negated window `(-beta, -alpha)`.
    #[inline(always)]
    pub fn child(&self, depth: i16, alpha: i16, beta: i16, extensions: u8) -> Self {
        Self {
            depth,
            ply: self.ply + 1,
            alpha: -beta,
            beta: -alpha,
            extensions,
            allow_null: true,
        }
    }
}

/// Outcome of one call to `Engine::search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// `None` only when the position has no legal moves
    pub best_move: Option<ChessMove>,
    /// Score of the last completed iteration, side to move's perspective
    pub score: i16,
    /// Last fully completed depth
    pub depth: u8,
    /// Deepest ply reached, quiescence included
    pub seldepth: usize,
    pub nodes: u64,
    pub elapsed: Duration,
    /// Transposition table fill rate in permille
    pub hashfull: u16,
}

impl SearchReport {
    pub fn nodes_per_second(&self) -> u64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            (self.nodes as f64 / seconds) as u64
        } else {
            self.nodes
        }
    }
}

pub struct Engine {
    /// Configuration for the engine
    config: EngineConfig,

    /// Static evaluation used at leaves
    evaluator: Box<dyn Evaluator>,

    /// Main transposition table, kept across searches until `new_game`
    tt: TranspositionTable,

    /// Quiet moves that caused beta cutoffs, one per ply
    killers: KillerMoves,
    /// Scores quiet moves by search success
    history: HistoryTable,

    /// Time allotted to the current decision
    budget: TimeBudget,
    /// Depth of the iteration in flight
    iteration: u8,

    /// Number of nodes searched
    nodes: u64,
    /// Selective depth (max ply reached including quiescence)
    seldepth: usize,

    /// Best root move of the iteration in flight, committed only once it completes
    root_best: Option<ChessMove>,
    /// Best move of the last completed iteration
    best_move: Option<ChessMove>,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        let evaluator = HandCrafted::new(PieceValues::default(), config.eval_config());
        Self::with_evaluator(config, Box::new(evaluator))
    }

    pub fn with_evaluator(config: &EngineConfig, evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            config: config.clone(),
            evaluator,
            tt: TranspositionTable::new(Self::tt_capacity(config)),
            killers: KillerMoves::default(),
            history: HistoryTable::new(),
            budget: TimeBudget::unlimited(),
            iteration: 0,
            nodes: 0,
            seldepth: 0,
            root_best: None,
            best_move: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn name(&self) -> String {
        format!("Ember ({})", self.evaluator.name())
    }

    /// Forgets everything learned from previous searches.
    pub fn new_game(&mut self) {
        self.tt.clear();
        self.killers.clear();
        self.history.clear();
        self.best_move = None;
    }

    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    fn tt_capacity(config: &EngineConfig) -> usize {
        (1usize << config.hash_size.value) - 1
    }

    #[inline(always)]
    fn check_time(&self) -> Result<(), Aborted> {
        if self.nodes & (TIME_CHECK_INTERVAL - 1) != 0
            || self.iteration <= self.config.min_depth.value
        {
            return Ok(());
        }

        if self.budget.hard_limit_reached() || self.budget.node_limit_reached(self.nodes) {
            Err(Aborted)
        } else {
            Ok(())
        }
    }
}
