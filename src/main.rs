//! Tic-Tac-Toe GUI
//!
//! Two players take turns on one board.

use clap::Parser;
use tictactoe::audio::{SoundBank, SoundPlayer};
use tictactoe::config::{Cli, WINDOW_MIN_SIZE, WINDOW_SIZE, WINDOW_TITLE};
use tictactoe::ui::{Session, TicTacToeApp};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let sounds = if cli.mute {
        info!("sound disabled");
        SoundPlayer::disabled()
    } else {
        let bank = match &cli.assets {
            Some(dir) => {
                info!(dir = %dir.display(), "loading sound clips");
                SoundBank::load(dir)
            }
            None => SoundBank::bundled(),
        };
        info!(loaded = bank.loaded(), "sound clips ready");
        SoundPlayer::start(bank, cli.volume)
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc, Session::new(sounds))))),
    )
}
