//! Command-line configuration for the desktop front-end.

use clap::Parser;

use crate::ui::MoveOrder;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Config {
    /// Initial window width in points
    #[arg(long, default_value_t = 720.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 480.0)]
    pub height: f32,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Move-list order the app starts with
    pub fn move_order(&self) -> MoveOrder {
        if self.descending {
            MoveOrder::Descending
        } else {
            MoveOrder::Ascending
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 480.0,
            descending: false,
            log_level: "info".to_string(),
        }
    }
}
