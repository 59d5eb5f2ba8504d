use crate::agent::Agent;
use crate::board::{Board, Move, Player};
use crate::search::deadline::{Deadline, Timer};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a game ended, from the loser's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The player to move had no legal moves.
    NoMoves,
    /// The player answered after its clock reached zero.
    Timeout,
    /// The player answered with a move outside its legal moves.
    IllegalMove,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub winner: Player,
    pub outcome: Outcome,
    pub moves: Vec<Move>,
}

impl GameRecord {
    pub fn loser(&self) -> Player { self.winner.opponent() }
}

/// Plays `board` to the end. `one` moves for `Player::One`, `two` for
/// `Player::Two`; each turn gets a fresh `time_limit` clock.
pub fn play_game<B: Board>(
    board: B,
    one: &mut dyn Agent<B>,
    two: &mut dyn Agent<B>,
    time_limit: Duration,
) -> GameRecord {
    play_game_with(board, one, two, time_limit, |_, _, _| {})
}

/// As [`play_game`], calling `on_move(board_after, player, mv)` after every
/// accepted move.
pub fn play_game_with<B, F>(
    mut board: B,
    one: &mut dyn Agent<B>,
    two: &mut dyn Agent<B>,
    time_limit: Duration,
    mut on_move: F,
) -> GameRecord
where
    B: Board,
    F: FnMut(&B, Player, Move),
{
    let mut moves = Vec::new();
    loop {
        let player = board.to_move();
        let legal = board.legal_moves(player);
        if legal.is_empty() {
            info!("player {} has no moves after {} plies", player, moves.len());
            return GameRecord { winner: player.opponent(), outcome: Outcome::NoMoves, moves };
        }

        let agent: &mut dyn Agent<B> = match player {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };
        let clock = Timer::start(time_limit);
        let mv = agent.get_move(&board, &legal, &clock);
        let left = clock.remaining();
        if left < 0.0 {
            warn!("{} (player {}) forfeits on time: {:.1} ms over", agent.name(), player, -left);
            return GameRecord { winner: player.opponent(), outcome: Outcome::Timeout, moves };
        }
        if !legal.contains(&mv) {
            warn!("{} (player {}) forfeits with illegal move {}", agent.name(), player, mv);
            return GameRecord { winner: player.opponent(), outcome: Outcome::IllegalMove, moves };
        }

        moves.push(mv);
        board = board.forecast(mv);
        on_move(&board, player, mv);
    }
}
