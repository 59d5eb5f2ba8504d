use super::eval::Evaluator;
use super::{improves, SearchResult, Searcher, Timeout};
use crate::board::Board;
use log::trace;

impl<'a, E: ?Sized> Searcher<'a, E> {
    /// Minimax with alpha-beta pruning. `alpha` is the score a maximizing
    /// ancestor already has; `beta` the score a minimizing ancestor already has.
    ///
    /// A maximizing node starts from `alpha` and feeds its running best down as
    /// the children's `alpha`; it stops as soon as that best exceeds `beta`.
    /// Minimizing nodes mirror this with `beta`. Ties never replace the chosen
    /// move, which keeps the root decision identical to [`Searcher::minimax`].
    pub fn alphabeta<B: Board>(
        &mut self,
        board: &B,
        depth: u32,
        alpha: f64,
        beta: f64,
        maximizing: bool,
    ) -> Result<SearchResult, Timeout>
    where
        E: Evaluator<B>,
    {
        self.enter()?;
        let moves = match self.expandable(board, depth) {
            Some(moves) => moves,
            None => return Ok(self.leaf(board)),
        };

        let start = if maximizing { alpha } else { beta };
        let mut best = SearchResult { score: start, mv: moves[0] };
        for mv in moves {
            let child = board.forecast(mv);
            let score = if maximizing {
                self.alphabeta(&child, depth + 1, best.score, beta, false)?.score
            } else {
                self.alphabeta(&child, depth + 1, alpha, best.score, true)?.score
            };
            if improves(maximizing, score, best.score) {
                best = SearchResult { score, mv };
            }
            let cut = if maximizing { best.score > beta } else { best.score < alpha };
            if cut {
                trace!("prune at depth {} after {}: best {} outside [{}, {}]", depth, mv, best.score, alpha, beta);
                return Ok(best);
            }
        }
        Ok(best)
    }
}
