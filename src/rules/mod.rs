//! Game rules for tic-tac-toe
//!
//! Pure functions over a board snapshot:
//! - Win detection over the eight fixed lines
//! - Draw and game-over detection

pub mod draw;
pub mod win;

// Re-exports for convenient access
pub use draw::{is_draw, is_full, is_game_over};
pub use win::{check_winner, evaluate, line_indices, Line, Outcome, LINES};
