pub mod isolation;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use isolation::IsolationBoard;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "1"),
            Player::Two => write!(f, "2"),
        }
    }
}

/// Target cell of a move, `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Sentinel for "no legal move available".
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self { Self { row, col } }

    pub fn is_none(&self) -> bool { *self == Move::NONE }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Accepts "r,c" and "(r, c)".
impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = inner.split(',').map(str::trim);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(r), Some(c), None) => {
                let row = r.parse::<i32>().map_err(|e| format!("bad row {r:?}: {e}"))?;
                let col = c.parse::<i32>().map_err(|e| format!("bad col {c:?}: {e}"))?;
                Ok(Move::new(row, col))
            }
            _ => Err(format!("expected 'row,col', got {s:?}")),
        }
    }
}

/// Game state consumed by the search. Implementations have value semantics:
/// `forecast` returns an independent successor and leaves `self` untouched.
pub trait Board: Clone {
    /// Player whose turn it is in this state.
    fn to_move(&self) -> Player;

    /// Legal moves for `player`, in a deterministic order. The search visits
    /// children in exactly this order, so it decides tie-breaks.
    fn legal_moves(&self, player: Player) -> Vec<Move>;

    /// Successor state after the player to move plays `mv`.
    fn forecast(&self, mv: Move) -> Self;

    fn is_winner(&self, player: Player) -> bool;

    fn is_loser(&self, player: Player) -> bool;

    fn opponent(&self, player: Player) -> Player { player.opponent() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }

    #[test]
    fn sentinel_move_formats_like_a_coordinate() {
        assert!(Move::NONE.is_none());
        assert!(!Move::new(0, 0).is_none());
        assert_eq!(format!("{}", Move::NONE), "(-1, -1)");
    }

    #[test]
    fn parses_both_move_spellings() {
        assert_eq!("2,3".parse::<Move>(), Ok(Move::new(2, 3)));
        assert_eq!("(4, 0)".parse::<Move>(), Ok(Move::new(4, 0)));
        assert!("4".parse::<Move>().is_err());
        assert!("a,b".parse::<Move>().is_err());
    }
}
