use crate::board::{Board, Move};
use crate::config::SearchConfig;
use crate::search::deadline::Deadline;
use crate::search::eval::{Evaluator, Heuristic};
use crate::search::{decide, Decision};
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A player in a game: receives the state, its legal moves and a clock, and
/// must answer before the clock runs out.
pub trait Agent<B: Board> {
    fn name(&self) -> &str;

    /// Returns one of `legal_moves`, or `Move::NONE` if there are none.
    fn get_move(&mut self, board: &B, legal_moves: &[Move], deadline: &dyn Deadline) -> Move;
}

/// Minimax / alpha-beta player driven by a [`SearchConfig`].
pub struct SearchAgent<E = Heuristic> {
    name: String,
    config: SearchConfig,
    eval: E,
    rng: SmallRng,
    last: Option<Decision>,
}

impl SearchAgent<Heuristic> {
    /// Uses the heuristic named in the config.
    pub fn from_config(name: impl Into<String>, config: SearchConfig) -> Self {
        Self::new(name, config, config.heuristic)
    }
}

impl<E> SearchAgent<E> {
    pub fn new(name: impl Into<String>, config: SearchConfig, eval: E) -> Self {
        Self {
            name: name.into(),
            config,
            eval,
            rng: SmallRng::seed_from_u64(config.seed),
            last: None,
        }
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    /// Report of the most recent `get_move` call.
    pub fn last_decision(&self) -> Option<&Decision> { self.last.as_ref() }
}

impl<B: Board, E: Evaluator<B>> Agent<B> for SearchAgent<E> {
    fn name(&self) -> &str { &self.name }

    fn get_move(&mut self, board: &B, legal_moves: &[Move], deadline: &dyn Deadline) -> Move {
        let d = decide(board, legal_moves, &self.config, &self.eval, deadline, &mut self.rng);
        debug!(
            "{}: move {} score {:?} depth {} nodes {} timed_out {}",
            self.name, d.mv, d.score, d.depth, d.nodes, d.timed_out
        );
        self.last = Some(d);
        d.mv
    }
}

/// Plays a uniformly random legal move.
pub struct RandomAgent {
    name: String,
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self { name: name.into(), rng: SmallRng::seed_from_u64(seed) }
    }
}

impl<B: Board> Agent<B> for RandomAgent {
    fn name(&self) -> &str { &self.name }

    fn get_move(&mut self, _board: &B, legal_moves: &[Move], _deadline: &dyn Deadline) -> Move {
        legal_moves.choose(&mut self.rng).copied().unwrap_or(Move::NONE)
    }
}
