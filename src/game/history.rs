//! History snapshots and the jump list built from them.

use crate::board::{Board, Coordinate, Pos};
use crate::rules::{evaluate, Line};

/// One immutable snapshot in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Coordinate>,
    winning_line: Option<Line>,
}

impl HistoryEntry {
    /// The game-start entry: empty board, no move, no line.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
            winning_line: None,
        }
    }

    /// Entry reached by playing `pos`; `board` already carries the new mark.
    pub(crate) fn after_move(board: Board, pos: Pos) -> Self {
        Self {
            board,
            last_move: Some(pos.coordinate()),
            winning_line: evaluate(&board).line(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinate of the move that produced this entry; `None` at game start.
    pub fn last_move(&self) -> Option<Coordinate> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Whether `pos` should be highlighted as part of the winning line
    pub fn is_winning_cell(&self, pos: Pos) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::start()
    }
}

/// A jump target in the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescriptor {
    /// History index to pass to `Game::jump_to`.
    pub step: usize,
    /// This is the currently displayed step.
    pub is_current: bool,
    pub label: String,
}

impl MoveDescriptor {
    pub(crate) fn new(step: usize, entry: &HistoryEntry, current_step: usize) -> Self {
        Self {
            step,
            is_current: step == current_step,
            label: move_label(step, entry.last_move()),
        }
    }
}

/// Button text for a history step
pub fn move_label(step: usize, last_move: Option<Coordinate>) -> String {
    match (step, last_move) {
        (0, _) | (_, None) => "Go to game start".to_string(),
        (step, Some(coord)) => format!("Go to move #{} {}", step, coord),
    }
}
