//! Two-player Tic-Tac-Toe
//!
//! A 3x3 board, X moves first, three in a row wins, a full board without a
//! line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board, cells, players and positions
//! - [`rules`]: The eight winning lines and the draw check
//! - [`game`]: [`GameState`], the only thing that mutates the board
//! - [`audio`]: Fire-and-forget sound effects (rodio)
//! - [`config`]: Command-line options
//! - [`ui`]: eframe/egui window
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, GameStatus, MoveError, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     assert_eq!(game.attempt_move(row, col), Ok(GameStatus::InProgress));
//! }
//! assert_eq!(game.attempt_move(0, 2), Ok(GameStatus::Won(Player::X)));
//! assert_eq!(game.attempt_move(2, 2), Err(MoveError::GameAlreadyEnded));
//!
//! game.reset();
//! assert_eq!(game.current_player(), Player::X);
//! ```

pub mod audio;
pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use game::{GameState, GameStatus, MoveError, MoveResult};
