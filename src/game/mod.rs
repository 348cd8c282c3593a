//! Game-state engine: authoritative history plus play and jump commands

mod error;
mod history;
mod state;

pub use error::MoveError;
pub use history::{move_label, HistoryEntry, MoveDescriptor};
pub use state::{Game, Status};
