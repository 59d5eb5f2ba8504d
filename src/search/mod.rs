pub mod alphabeta;
pub mod deadline;
pub mod eval;
pub mod iterative;
pub mod minimax;

use crate::board::{Board, Move, Player};
use crate::config::Method;
use deadline::Deadline;
use eval::{Evaluator, LOSS_SCORE, WIN_SCORE};
use thiserror::Error;

pub use iterative::{decide, Decision};

/// Raised at node entry once the remaining time drops below the threshold.
/// Every frame passes it straight up; only `decide` handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search deadline reached")]
pub struct Timeout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub mv: Move,
}

impl SearchResult {
    pub fn leaf(score: f64) -> Self { Self { score, mv: Move::NONE } }
}

/// Per-decision search state: collaborators, depth limit, the root player
/// whose perspective every evaluation uses, and a node-visit counter.
pub struct Searcher<'a, E: ?Sized> {
    eval: &'a E,
    deadline: &'a dyn Deadline,
    threshold: f64,
    depth_limit: u32,
    player: Player,
    pub(crate) nodes: u64,
}

impl<'a, E: ?Sized> Searcher<'a, E> {
    pub fn new(eval: &'a E, deadline: &'a dyn Deadline, threshold: f64, player: Player) -> Self {
        Self { eval, deadline, threshold, depth_limit: 0, player, nodes: 0 }
    }

    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn set_depth_limit(&mut self, depth_limit: u32) { self.depth_limit = depth_limit; }
    pub fn depth_limit(&self) -> u32 { self.depth_limit }
    pub fn player(&self) -> Player { self.player }
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Root call for one depth iteration with the chosen evaluator.
    pub fn search_root<B: Board>(&mut self, board: &B, method: Method) -> Result<SearchResult, Timeout>
    where
        E: Evaluator<B>,
    {
        match method {
            Method::Minimax => self.minimax(board, 0, true),
            Method::AlphaBeta => self.alphabeta(board, 0, LOSS_SCORE, WIN_SCORE, true),
        }
    }

    // Deadline check and visit count, done once per node before any work.
    fn enter(&mut self) -> Result<(), Timeout> {
        if self.deadline.remaining() < self.threshold { return Err(Timeout); }
        self.nodes += 1;
        Ok(())
    }

    fn leaf<B: Board>(&self, board: &B) -> SearchResult
    where
        E: Evaluator<B>,
    {
        SearchResult::leaf(self.eval.evaluate(board, self.player))
    }

    /// Legal moves to expand at this node, or `None` when it is a cutoff node
    /// (depth limit reached, or the player to move is stuck).
    fn expandable<B: Board>(&self, board: &B, depth: u32) -> Option<Vec<Move>> {
        if depth >= self.depth_limit { return None; }
        let moves = board.legal_moves(board.to_move());
        if moves.is_empty() { None } else { Some(moves) }
    }
}

/// Strict improvement in the direction of the layer. Equal scores never
/// replace the incumbent, so the first move reaching the best value wins.
fn improves(maximizing: bool, candidate: f64, incumbent: f64) -> bool {
    if maximizing { candidate > incumbent } else { candidate < incumbent }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_do_not_improve() {
        assert!(!improves(true, 5.0, 5.0));
        assert!(!improves(false, 5.0, 5.0));
        assert!(improves(true, 6.0, 5.0));
        assert!(improves(false, 4.0, 5.0));
        assert!(improves(true, 0.0, LOSS_SCORE));
        assert!(!improves(true, LOSS_SCORE, LOSS_SCORE));
    }
}
