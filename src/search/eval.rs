use crate::board::{Board, Player};
use serde::{Deserialize, Serialize};

// Terminal scoring
pub const WIN_SCORE: f64 = f64::INFINITY;
pub const LOSS_SCORE: f64 = f64::NEG_INFINITY;

/// Scores a state from `player`'s point of view. Must return `LOSS_SCORE`
/// exactly when `board.is_loser(player)`, `WIN_SCORE` exactly when
/// `board.is_winner(player)`, and a finite value otherwise.
pub trait Evaluator<B: Board> {
    fn evaluate(&self, board: &B, player: Player) -> f64;
}

fn terminal_score<B: Board>(board: &B, player: Player) -> Option<f64> {
    if board.is_loser(player) { return Some(LOSS_SCORE); }
    if board.is_winner(player) { return Some(WIN_SCORE); }
    None
}

fn mobility<B: Board>(board: &B, player: Player) -> (f64, f64) {
    let own = board.legal_moves(player).len() as f64;
    let opp = board.legal_moves(board.opponent(player)).len() as f64;
    (own, opp)
}

/// Own mobility squared, damped by opponent mobility: `own^2 / (1 + opp)`.
pub fn custom_score<B: Board>(board: &B, player: Player) -> f64 {
    if let Some(t) = terminal_score(board, player) { return t; }
    let (own, opp) = mobility(board, player);
    own * own / (1.0 + opp)
}

/// Number of moves available to `player`.
pub fn open_move_score<B: Board>(board: &B, player: Player) -> f64 {
    if let Some(t) = terminal_score(board, player) { return t; }
    board.legal_moves(player).len() as f64
}

/// Mobility difference, own minus opponent.
pub fn improved_score<B: Board>(board: &B, player: Player) -> f64 {
    if let Some(t) = terminal_score(board, player) { return t; }
    let (own, opp) = mobility(board, player);
    own - opp
}

/// Zero everywhere except terminal states.
pub fn null_score<B: Board>(board: &B, player: Player) -> f64 {
    terminal_score(board, player).unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    #[default]
    Custom,
    Open,
    Improved,
    Null,
}

impl<B: Board> Evaluator<B> for Heuristic {
    fn evaluate(&self, board: &B, player: Player) -> f64 {
        match self {
            Heuristic::Custom => custom_score(board, player),
            Heuristic::Open => open_move_score(board, player),
            Heuristic::Improved => improved_score(board, player),
            Heuristic::Null => null_score(board, player),
        }
    }
}

impl Heuristic {
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Custom => "custom",
            Heuristic::Open => "open",
            Heuristic::Improved => "improved",
            Heuristic::Null => "null",
        }
    }
}
