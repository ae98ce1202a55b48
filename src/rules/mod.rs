//! Game rules for Tic-Tac-Toe
//!
//! - Three in a row, column or diagonal wins
//! - A full board without a line is a draw

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, is_draw, is_winner, LINES};
