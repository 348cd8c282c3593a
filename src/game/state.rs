//! Game state with move history and time travel
//!
//! `Game` owns the authoritative history. Two commands change it:
//! - `play_cell` drops any future beyond the current step and appends a new entry
//! - `jump_to` moves the current step; history is untouched
//!
//! Everything else (next player, status, move list) is recomputed from the
//! history and the current step on every call, so nothing can drift out of sync.

use tracing::{debug, info, instrument};

use crate::board::{Board, Player, Pos};
use crate::rules::{check_winner, evaluate, is_draw, is_game_over, Line, Outcome};

use super::error::MoveError;
use super::history::{HistoryEntry, MoveDescriptor};

/// Summary shown to the players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Player),
    Draw,
    InProgress(Player),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::Draw => f.write_str("Draw"),
            Status::InProgress(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// Tic-tac-toe game with branching history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<HistoryEntry>,
    current_step: usize,
}

impl Game {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
        }
    }

    /// Play the next player's mark at `index` (row-major, 0..=8).
    ///
    /// On success any entries after the current step are discarded, the new
    /// entry is appended and becomes current. On error nothing changes.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn play_cell(&mut self, index: usize) -> Result<Pos, MoveError> {
        let pos = Pos::from_index(index).ok_or(MoveError::OutOfRange { index })?;
        let board = *self.board();

        if evaluate(&board).is_win() {
            debug!("Move rejected: game already won");
            return Err(MoveError::GameOver);
        }

        if !board.is_empty(pos) {
            debug!("Move rejected: cell occupied");
            return Err(MoveError::Occupied { index });
        }

        let player = self.next_player();
        let entry = HistoryEntry::after_move(board.with_mark(pos, player), pos);

        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(entry);
        self.current_step = self.history.len() - 1;

        info!(
            %player,
            coordinate = %pos.coordinate(),
            discarded,
            "Move played"
        );
        if let Some(winner) = self.outcome().winner() {
            info!(%winner, "Game won");
        }

        Ok(pos)
    }

    /// Show the position after `step` moves. History is not modified.
    ///
    /// Steps past the end of the history are rejected, not clamped.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            debug!("Jump rejected");
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.current_step = step;
        debug!(next_player = %self.next_player(), "Jumped");
        Ok(())
    }

    /// Jump one step back towards the game start
    pub fn step_back(&mut self) -> Result<(), MoveError> {
        let step = self
            .current_step
            .checked_sub(1)
            .ok_or(MoveError::AtStart)?;
        self.jump_to(step)
    }

    /// Jump one step forward along the recorded history
    pub fn step_forward(&mut self) -> Result<(), MoveError> {
        self.jump_to(self.current_step + 1)
    }

    #[inline]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// X when an even number of moves has been played
    #[inline]
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// The displayed history entry
    #[inline]
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of history entries, including the game start
    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the game-start entry is never removed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(self.board())
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.current().winning_line()
    }

    pub fn status(&self) -> Status {
        let board = self.board();
        if let Some(winner) = check_winner(board) {
            Status::Winner(winner)
        } else if is_draw(board) {
            Status::Draw
        } else {
            Status::InProgress(self.next_player())
        }
    }

    /// True once the displayed position is won or drawn
    pub fn is_over(&self) -> bool {
        is_game_over(self.board())
    }

    /// Jump targets for every history entry, in play order
    pub fn move_list(&self) -> Vec<MoveDescriptor> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveDescriptor::new(step, entry, self.current_step))
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
