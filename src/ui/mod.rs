//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It only reads
//! from [`crate::game::Game`] and sends it two commands: play a cell and
//! jump to a step.

mod app;
mod board_view;
mod move_list;
mod theme;

pub use app::TicTacToeApp;
pub use board_view::BoardView;
pub use move_list::MoveOrder;
