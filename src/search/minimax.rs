use super::eval::{Evaluator, LOSS_SCORE, WIN_SCORE};
use super::{improves, SearchResult, Searcher, Timeout};
use crate::board::Board;

impl<'a, E: ?Sized> Searcher<'a, E> {
    /// Plain minimax to the configured depth limit. `maximizing` alternates
    /// with `depth`; the root is `depth = 0, maximizing = true`.
    pub fn minimax<B: Board>(&mut self, board: &B, depth: u32, maximizing: bool) -> Result<SearchResult, Timeout>
    where
        E: Evaluator<B>,
    {
        self.enter()?;
        let moves = match self.expandable(board, depth) {
            Some(moves) => moves,
            None => return Ok(self.leaf(board)),
        };

        // Seeded with the first move so a node whose children all score the
        // starting bound still names a legal move.
        let start = if maximizing { LOSS_SCORE } else { WIN_SCORE };
        let mut best = SearchResult { score: start, mv: moves[0] };
        for mv in moves {
            let child = board.forecast(mv);
            let score = self.minimax(&child, depth + 1, !maximizing)?.score;
            if improves(maximizing, score, best.score) {
                best = SearchResult { score, mv };
            }
        }
        Ok(best)
    }
}
