//! Command-line configuration and window constants

use std::path::PathBuf;

use clap::Parser;

pub const WINDOW_TITLE: &str = "Tic Tac Toe";
pub const WINDOW_SIZE: [f32; 2] = [500.0, 500.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [300.0, 340.0];

/// Two-player Tic-Tac-Toe
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe")]
#[command(about = "Two-player Tic-Tac-Toe with sound effects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory with click.wav, win.wav or draw.wav replacing the built-in clips
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Disable sound effects
    #[arg(long)]
    pub mute: bool,

    /// Sound effect volume (0.0 - 1.0)
    #[arg(long, default_value_t = 1.0, value_parser = parse_volume)]
    pub volume: f32,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_volume(s: &str) -> Result<f32, String> {
    let volume: f32 = s.parse().map_err(|e| format!("not a number: {e}"))?;
    if (0.0..=1.0).contains(&volume) {
        Ok(volume)
    } else {
        Err(format!("{volume} is outside 0.0..=1.0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.assets, None);
        assert!(!cli.mute);
        assert_eq!(cli.volume, 1.0);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--assets",
            "/tmp/sounds",
            "--mute",
            "--volume",
            "0.25",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.assets, Some(PathBuf::from("/tmp/sounds")));
        assert!(cli.mute);
        assert_eq!(cli.volume, 0.25);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_volume_out_of_range() {
        assert!(Cli::try_parse_from(["tictactoe", "--volume", "1.5"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "--volume", "-0.1"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "--volume", "loud"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
