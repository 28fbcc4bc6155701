//! Two-player tic-tac-toe in a native window.
//!
//! Run: cargo run --bin tictactoe
//!
//! Click a cell to play; after a win or tie, click anywhere to start over.
//! Set `RUST_LOG=info` (or `debug`) to follow the game on stderr.

use tictac_core::{AppRunner, DEFAULT_SIZE, EventLoopDriver, TicTacToe};
use tictac_winit::{WinitConfig, WinitDriver};

fn main() {
    env_logger::init();

    let model = TicTacToe::new(DEFAULT_SIZE);
    let driver = WinitDriver::new(WinitConfig::default());
    let runner = AppRunner::new(Box::new(model));

    if let Err(e) = driver.run(runner) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}
