//! GUI module for the Tic-Tac-Toe game
//!
//! This module provides a native Rust GUI using egui/eframe. Rendering is a
//! projection of [`GameState`](crate::GameState); the widgets hold no game
//! state of their own.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::TicTacToeApp;
pub use session::{Notification, Session};
