//! Tic-tac-toe with move history and time travel
//!
//! A small game-state engine plus a native egui front-end:
//! - Every move appends an immutable board snapshot to the history
//! - Any earlier snapshot can be revisited; playing from it discards the
//!   snapshots that came after
//! - The winning line, if any, is recorded with each snapshot
//!
//! # Architecture
//!
//! - [`board`]: Cells, positions and the 3x3 board snapshot
//! - [`rules`]: Line evaluation (win, draw, game over)
//! - [`game`]: History, play and jump commands, derived status
//! - [`ui`]: egui rendering of the board, status and move list
//! - [`config`]: Command-line configuration for the binary
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Game, Player, Status};
//!
//! let mut game = Game::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.play_cell(cell).unwrap();
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//!
//! // Travel back two moves and branch
//! game.jump_to(2).unwrap();
//! game.play_cell(7).unwrap();
//! assert_eq!(game.len(), 4);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Coordinate, Player, Pos, BOARD_SIZE};
pub use config::Config;
pub use game::{Game, HistoryEntry, MoveDescriptor, MoveError, Status};
pub use rules::{evaluate, Line, Outcome};
