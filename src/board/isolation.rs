use super::{Board, Move, Player};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_WIDTH: i32 = 7;
pub const DEFAULT_HEIGHT: i32 = 7;

// Enumeration order of knight jumps; the search inherits it as move order.
const KNIGHT_DIRS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("illegal move {mv} for player {player}")]
    IllegalMove { mv: Move, player: Player },
}

/// Isolation: two knights on a shrinking grid. Every cell a player lands on
/// stays blocked; whoever cannot move on their turn loses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IsolationBoard {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: u32,
}

impl Default for IsolationBoard {
    fn default() -> Self { Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT) }
}

impl IsolationBoard {
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            blocked: vec![false; cells],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    /// Board reached by playing `moves` in order from an empty `width` x `height` grid.
    pub fn from_moves(width: i32, height: i32, moves: &[Move]) -> Result<Self, BoardError> {
        let mut board = Self::new(width, height);
        for &mv in moves { board.play(mv)?; }
        Ok(board)
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn move_count(&self) -> u32 { self.move_count }
    pub fn location(&self, player: Player) -> Option<Move> { self.locations[player.index()] }

    pub fn in_bounds(&self, mv: Move) -> bool {
        mv.row >= 0 && mv.row < self.height && mv.col >= 0 && mv.col < self.width
    }

    pub fn is_blank(&self, mv: Move) -> bool {
        self.in_bounds(mv) && !self.blocked[self.index(mv)]
    }

    pub fn blank_cells(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(self.blocked.len());
        for row in 0..self.height {
            for col in 0..self.width {
                let mv = Move::new(row, col);
                if self.is_blank(mv) { out.push(mv); }
            }
        }
        out
    }

    /// Applies `mv` for the player to move after checking it is legal.
    pub fn play(&mut self, mv: Move) -> Result<(), BoardError> {
        let player = self.active;
        if !self.legal_moves(player).contains(&mv) {
            return Err(BoardError::IllegalMove { mv, player });
        }
        self.apply_unchecked(mv);
        Ok(())
    }

    fn apply_unchecked(&mut self, mv: Move) {
        let idx = self.index(mv);
        self.blocked[idx] = true;
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.opponent();
        self.move_count += 1;
    }

    fn index(&self, mv: Move) -> usize { (mv.row * self.width + mv.col) as usize }
}

impl Board for IsolationBoard {
    fn to_move(&self) -> Player { self.active }

    fn legal_moves(&self, player: Player) -> Vec<Move> {
        match self.location(player) {
            None => self.blank_cells(),
            Some(from) => KNIGHT_DIRS
                .iter()
                .map(|&(dr, dc)| Move::new(from.row + dr, from.col + dc))
                .filter(|&mv| self.is_blank(mv))
                .collect(),
        }
    }

    fn forecast(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.apply_unchecked(mv);
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        self.active != player && self.legal_moves(self.active).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        self.active == player && self.legal_moves(player).is_empty()
    }
}

impl fmt::Display for IsolationBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            write!(f, " |")?;
            for col in 0..self.width {
                let mv = Move::new(row, col);
                let c = if self.location(Player::One) == Some(mv) {
                    '1'
                } else if self.location(Player::Two) == Some(mv) {
                    '2'
                } else if self.blocked[self.index(mv)] {
                    '-'
                } else {
                    ' '
                };
                write!(f, " {} |", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_may_land_on_any_blank_cell() {
        let b = IsolationBoard::default();
        assert_eq!(b.legal_moves(Player::One).len(), 49);
        let b = b.forecast(Move::new(3, 3));
        assert_eq!(b.legal_moves(Player::Two).len(), 48);
    }

    #[test]
    fn knight_moves_from_the_corner() {
        let b = IsolationBoard::from_moves(7, 7, &[Move::new(0, 0), Move::new(6, 6)]).unwrap();
        assert_eq!(b.legal_moves(Player::One), vec![Move::new(1, 2), Move::new(2, 1)]);
    }

    #[test]
    fn forecast_leaves_parent_untouched() {
        let b = IsolationBoard::default();
        let child = b.forecast(Move::new(2, 2));
        assert_eq!(b.move_count(), 0);
        assert!(b.is_blank(Move::new(2, 2)));
        assert!(!child.is_blank(Move::new(2, 2)));
        assert_eq!(child.to_move(), Player::Two);
    }

    #[test]
    fn play_rejects_illegal_moves() {
        let mut b = IsolationBoard::from_moves(7, 7, &[Move::new(0, 0)]).unwrap();
        let err = b.play(Move::new(0, 0)).unwrap_err();
        assert_eq!(err, BoardError::IllegalMove { mv: Move::new(0, 0), player: Player::Two });
        assert!(b.play(Move::new(9, 9)).is_err());
    }

    #[test]
    fn display_marks_players_and_blocked_cells() {
        let b = IsolationBoard::from_moves(3, 3, &[Move::new(0, 0), Move::new(2, 2)]).unwrap();
        let b = b.forecast(Move::new(1, 2));
        let s = b.to_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0], " | - |   |   |");
        assert_eq!(lines[1], " |   |   | 1 |");
        assert_eq!(lines[2], " |   |   | 2 |");
    }
}
