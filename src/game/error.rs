//! Rejection reasons for game commands.

use derive_more::{Display, Error};

/// Why a command left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Cell index outside 0..=8.
    #[display("cell index {index} is outside the board")]
    OutOfRange {
        /// Requested cell index.
        index: usize,
    },
    /// Cell already holds a mark.
    #[display("cell {index} is already occupied")]
    Occupied {
        /// Requested cell index.
        index: usize,
    },
    /// The displayed position already has a winner.
    #[display("the game is already won")]
    GameOver,
    /// Already at the game start; there is no earlier step.
    #[display("already at the game start")]
    AtStart,
    /// History step outside the recorded history.
    #[display("step {step} is outside the history (length {len})")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}
