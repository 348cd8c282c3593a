//! Tic-tac-toe GUI
//!
//! Two players share the window; the side panel lists every move as a jump target.

use clap::Parser;
use tictactoe::ui::TicTacToeApp;
use tictactoe::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(width = config.width, height = config.height, "Starting tic-tac-toe");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    let order = config.move_order();
    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, order)))),
    )
}
