use super::deadline::Deadline;
use super::eval::Evaluator;
use super::{Searcher, Timeout};
use crate::board::{Board, Move};
use crate::config::SearchConfig;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub mv: Move,
    /// Root score of the last completed iteration; `None` if none completed.
    pub score: Option<f64>,
    /// Depth limit of the last completed iteration, 0 if none completed.
    pub depth: u32,
    pub nodes: u64,
    pub timed_out: bool,
}

impl Decision {
    fn no_move() -> Self {
        Self { mv: Move::NONE, score: None, depth: 0, nodes: 0, timed_out: false }
    }
}

/// Picks a move for the player to move in `board`.
///
/// Starts from a random legal move so that something legal comes back even
/// if the first iteration cannot finish. In iterative mode the evaluator runs
/// at depth limits `1..=search_depth`, otherwise once at `search_depth`. A
/// [`Timeout`] throws away the unfinished iteration and keeps the last
/// completed one.
pub fn decide<B, E, R>(
    board: &B,
    legal_moves: &[Move],
    config: &SearchConfig,
    eval: &E,
    deadline: &dyn Deadline,
    rng: &mut R,
) -> Decision
where
    B: Board,
    E: Evaluator<B> + ?Sized,
    R: Rng + ?Sized,
{
    let provisional = match legal_moves.choose(rng) {
        Some(&mv) => mv,
        None => return Decision::no_move(),
    };
    let mut decision = Decision { mv: provisional, ..Decision::no_move() };

    let mut searcher = Searcher::new(eval, deadline, config.timeout, board.to_move());
    let first = if config.iterative { 1 } else { config.search_depth };
    for d in first..=config.search_depth {
        searcher.set_depth_limit(d);
        match searcher.search_root(board, config.method) {
            Ok(r) => {
                if !r.mv.is_none() { decision.mv = r.mv; }
                decision.score = Some(r.score);
                decision.depth = d;
                debug!("depth {} complete: move {} score {} nodes {}", d, r.mv, r.score, searcher.nodes());
            }
            Err(Timeout) => {
                decision.timed_out = true;
                debug!("timeout during depth {}; keeping {} from depth {}", d, decision.mv, decision.depth);
                break;
            }
        }
    }
    decision.nodes = searcher.nodes();
    decision
}
