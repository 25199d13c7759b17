use std::time::Instant;

use chess::ChessMove;
use evaluation::scores::{mate_distance, mated_in, SCORE_INF};
use log::{debug, info};
use utils::{is_quiet, Position};

use crate::{
    move_ordering::MoveList,
    pruning::{can_reduce, lmr, mate_distance_prune, AspirationWindow, Pass},
    time_control::{SearchLimits, TimeBudget, Timer},
    transposition::{score_from_tt, score_to_tt, Bound},
    MAX_PLY,
};

use super::{Aborted, Engine, NodeContext, SearchReport};

impl Engine {
    /// Picks a move for the side to move within the budget derived from `timer`.
    /// Returns `None` only when there is no legal move.
    pub fn think(&mut self, position: &mut Position, timer: &dyn Timer) -> Option<ChessMove> {
        self.search(position, &SearchLimits::default(), timer)
            .best_move
    }

    /// Iterative deepening with aspiration windows. Every completed iteration
    /// commits its best move; an aborted iteration is discarded.
    pub fn search(
        &mut self,
        position: &mut Position,
        limits: &SearchLimits,
        timer: &dyn Timer,
    ) -> SearchReport {
        let started = Instant::now();
        self.init_search(TimeBudget::new(
            limits,
            timer,
            self.config.time_divisor.value,
        ));

        // First legal move is the answer of last resort
        self.best_move = position.legal_moves(false).first().copied();
        if self.best_move.is_none() {
            let score = if position.is_in_check() { mated_in(0) } else { 0 };
            info!("no legal moves in {}", position.fen());
            return self.report(score, 0, started);
        }

        let max_depth = limits
            .depth
            .unwrap_or(u8::MAX)
            .clamp(1, MAX_PLY as u8 - 1);

        let mut window = AspirationWindow::new(
            self.config.aspiration_window.value,
            self.config.aspiration_widen.value,
            self.config.aspiration_min_depth.value,
        );

        let mut score = 0;
        let mut completed_depth = 0;

        for depth in 1..=max_depth {
            if depth > self.config.min_depth.value && self.budget.soft_limit_reached() {
                break;
            }
            self.iteration = depth;

            let iteration_score = match self.aspiration_search(position, &mut window, depth, score) {
                Ok(score) => score,
                Err(Aborted) => {
                    debug!(
                        "depth {} aborted after {} ms, keeping depth {}",
                        depth,
                        self.budget.elapsed_ms(),
                        completed_depth
                    );
                    break;
                }
            };

            if let Some(mv) = self.root_best {
                self.best_move = Some(mv);
            }
            score = iteration_score;
            completed_depth = depth;

            debug!(
                "depth {} seldepth {} score {} nodes {} time {} ms best {}",
                depth,
                self.seldepth,
                score,
                self.nodes,
                self.budget.elapsed_ms(),
                self.best_move.map_or("none".to_string(), |mv| mv.to_string())
            );

            // A proven mate cannot be improved upon by searching deeper
            if mate_distance(score).is_some_and(|distance| distance <= depth as i16) {
                break;
            }
        }

        let report = self.report(score, completed_depth, started);
        info!(
            "bestmove {} score {} depth {} nodes {} in {} ms",
            report.best_move.map_or("none".to_string(), |mv| mv.to_string()),
            report.score,
            report.depth,
            report.nodes,
            report.elapsed.as_millis()
        );
        report
    }

    /// Untimed search of `position` to a fixed depth with the given window.
    /// Killer and history tables are reset first; the transposition table is kept.
    pub fn search_fixed_depth(
        &mut self,
        position: &mut Position,
        depth: u8,
        alpha: i16,
        beta: i16,
    ) -> i16 {
        self.init_search(TimeBudget::unlimited());
        self.iteration = depth;

        let node = NodeContext::root(depth as i16, alpha, beta);
        self.negamax(position, node).unwrap_or(0)
    }

    pub(super) fn init_search(&mut self, budget: TimeBudget) {
        self.budget = budget;
        self.iteration = 0;
        self.nodes = 0;
        self.seldepth = 0;
        self.root_best = None;
        self.killers.clear();
        self.history.clear();
    }

    fn report(&self, score: i16, depth: u8, started: Instant) -> SearchReport {
        SearchReport {
            best_move: self.best_move,
            score,
            depth,
            seldepth: self.seldepth,
            nodes: self.nodes,
            elapsed: started.elapsed(),
            hashfull: self.tt.hashfull(),
        }
    }

    /// Searches one depth, re-searching the same depth with a wider window
    /// until the score lands inside it.
    fn aspiration_search(
        &mut self,
        position: &mut Position,
        window: &mut AspirationWindow,
        depth: u8,
        prev_score: i16,
    ) -> Result<i16, Aborted> {
        window.begin_depth(depth, prev_score);
        let mut retries = 0;

        loop {
            let (alpha, beta) = window.bounds();
            self.root_best = None;

            let score = self.negamax(position, NodeContext::root(depth as i16, alpha, beta))?;

            match window.analyse_pass(score) {
                Pass::Hit(score) => return Ok(score),
                pass => {
                    debug!(
                        "depth {} {:?} with {} in ({}, {})",
                        depth, pass, score, alpha, beta
                    );

                    retries += 1;
                    if retries >= self.config.aspiration_retries.value {
                        window.fully_extend();
                    }
                }
            }
        }
    }

    pub(super) fn negamax(
        &mut self,
        position: &mut Position,
        node: NodeContext,
    ) -> Result<i16, Aborted> {
        self.nodes += 1;
        self.check_time()?;

        let NodeContext {
            depth,
            ply,
            mut alpha,
            mut beta,
            ..
        } = node;

        let is_root = ply == 0;

        if !is_root {
            if position.is_draw() {
                return Ok(0);
            }
            if mate_distance_prune(&mut alpha, &mut beta, ply) {
                return Ok(alpha);
            }
        }

        if ply >= MAX_PLY - 1 {
            return Ok(self.evaluator.evaluate(position.board()));
        }

        let is_pv_node = beta > alpha + 1;
        let original_alpha = alpha;
        let original_beta = beta;

        // Transposition table probe
        let hash = position.hash();
        let mut tt_move = None;
        if let Some(entry) = self.tt.probe(hash) {
            tt_move = entry.best_move;

            if !is_root && entry.depth >= depth {
                let score = score_from_tt(entry.score, ply);
                match entry.bound {
                    Bound::Exact => return Ok(score),
                    Bound::Lower => alpha = alpha.max(score),
                    Bound::Upper => beta = beta.min(score),
                }
                if alpha >= beta {
                    return Ok(score);
                }
            }
        }

        if depth <= 0 {
            return self.quiescence(position, ply, alpha, beta);
        }

        self.seldepth = self.seldepth.max(ply);
        let in_check = position.is_in_check();

        if !is_root {
            let null_node = NodeContext {
                alpha,
                beta,
                ..node
            };
            if let Some(score) =
                self.try_null_move_prune(position, &null_node, is_pv_node, in_check)?
            {
                return Ok(score);
            }
        }

        let moves = position.legal_moves(false);
        if moves.is_empty() {
            return Ok(if in_check { mated_in(ply) } else { 0 });
        }

        let killer = self.killers.get(ply);
        let ordered = MoveList::new(position.board(), &moves, tt_move, killer, &self.history);

        let mut best_score = -SCORE_INF;
        let mut best_move = None;

        for (move_index, mv) in ordered.enumerate() {
            let quiet = is_quiet(position.board(), mv);
            let moved_piece = position.moved_piece(mv);

            position.make_move(mv);
            let result =
                self.search_move(position, &node, alpha, beta, in_check, quiet, move_index);
            position.undo_move(mv);
            let score = result?;

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
                if is_root {
                    self.root_best = Some(mv);
                }
            }

            alpha = alpha.max(score);
            if alpha >= beta {
                if quiet {
                    self.killers.store(ply, mv);
                    if let Some(piece) = moved_piece {
                        self.history
                            .reward(position.side_to_move(), piece, mv.get_dest(), depth);
                    }
                }
                break;
            }
        }

        let bound = Bound::classify(best_score, original_alpha, original_beta);
        self.tt
            .store(hash, score_to_tt(best_score, ply), depth, best_move, bound);

        Ok(best_score)
    }

    /// Searches the child reached by the move just made, from the parent's perspective.
    /// Applies check extension, late move reduction and null-window (PVS) probing.
    #[allow(clippy::too_many_arguments)]
    fn search_move(
        &mut self,
        position: &mut Position,
        node: &NodeContext,
        alpha: i16,
        beta: i16,
        in_check: bool,
        quiet: bool,
        move_index: usize,
    ) -> Result<i16, Aborted> {
        let gives_check = position.is_in_check();

        let mut extensions = node.extensions;
        let mut new_depth = node.depth - 1;
        if gives_check && extensions < self.config.max_extensions.value {
            extensions += 1;
            new_depth += 1;
        }

        // The root and the first move of every node get a full window
        if node.ply == 0 || move_index == 0 {
            let child = node.child(new_depth, alpha, beta, extensions);
            return Ok(-self.negamax(position, child)?);
        }

        let reduction = if can_reduce(
            quiet,
            gives_check,
            in_check,
            node.depth,
            move_index,
            self.config.lmr_min_depth.value,
            self.config.lmr_min_moves.value,
        ) {
            lmr(node.depth, move_index, self.config.lmr_divisor.value)
        } else {
            0
        };

        let null_window = |depth| node.child(depth, alpha, alpha + 1, extensions);

        let mut score = -self.negamax(position, null_window(new_depth - reduction))?;

        if score > alpha && reduction > 0 {
            score = -self.negamax(position, null_window(new_depth))?;
        }

        if score > alpha && score < beta {
            let child = node.child(new_depth, alpha, beta, extensions);
            score = -self.negamax(position, child)?;
        }

        Ok(score)
    }
}
