//! Win detection for tic-tac-toe
//!
//! A win is three equal marks on one of the eight fixed lines: three rows,
//! three columns, two diagonals. Lines are checked in that order and the
//! first complete one is reported.

use crate::board::{Board, Player, Pos};

/// Three positions forming a row, column or diagonal
pub type Line = [Pos; 3];

const fn p(row: u8, col: u8) -> Pos {
    Pos { row, col }
}

/// All winning lines, in evaluation order
pub const LINES: [Line; 8] = [
    // Rows
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    // Columns
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    // Diagonals
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

/// Result of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No line of three equal marks
    NoWinner,
    /// `player` completed `line`
    Win { player: Player, line: Line },
}

impl Outcome {
    #[inline]
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win { .. })
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::NoWinner => None,
        }
    }

    #[inline]
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::NoWinner => None,
        }
    }

    /// Whether `pos` is part of the winning line
    pub fn contains(&self, pos: Pos) -> bool {
        self.line().is_some_and(|line| line.contains(&pos))
    }
}

/// Evaluate a board: the first complete line in `LINES` order wins.
///
/// Total over any board, including ones no legal game can reach.
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        let cell = board.get(a);
        if let Some(player) = cell.player() {
            if cell == board.get(b) && cell == board.get(c) {
                return Outcome::Win { player, line };
            }
        }
    }
    Outcome::NoWinner
}

/// Winner of the board, if any
#[inline]
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}

/// Raw index triple of a line
pub fn line_indices(line: &Line) -> [usize; 3] {
    [line[0].to_index(), line[1].to_index(), line[2].to_index()]
}
