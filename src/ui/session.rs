//! Glue between the window and the game: forwards clicks, picks sounds
//! and notifications from the move result.

use tracing::debug;

use crate::audio::{SoundEvent, SoundPlayer};
use crate::game::{GameState, GameStatus, MoveResult};
use crate::Player;

/// Message shown when a game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Won(Player),
    Draw,
}

impl Notification {
    pub fn title(self) -> &'static str {
        match self {
            Notification::Won(_) => "Game Over",
            Notification::Draw => "Draw",
        }
    }

    pub fn message(self) -> String {
        match self {
            Notification::Won(player) => format!("Player {} wins!", player),
            Notification::Draw => "It's a draw!".to_string(),
        }
    }
}

/// The single owned game plus what the window shows about it
pub struct Session {
    game: GameState,
    sounds: SoundPlayer,
    notification: Option<Notification>,
}

impl Session {
    pub fn new(sounds: SoundPlayer) -> Self {
        Self {
            game: GameState::new(),
            sounds,
            notification: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Clicks are ignored once the game has ended
    pub fn accepts_input(&self) -> bool {
        !self.game.is_over()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notification
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Forward a click on `(row, col)` to the game.
    /// Rejected moves produce no sound and no notification.
    pub fn click(&mut self, row: usize, col: usize) -> MoveResult {
        let result = self.game.attempt_move(row, col);

        match result {
            Ok(status) => {
                self.sounds.play(SoundEvent::MovePlaced);
                match status {
                    GameStatus::Won(player) => {
                        self.notification = Some(Notification::Won(player));
                        self.sounds.play(SoundEvent::GameWon);
                    }
                    GameStatus::Draw => {
                        self.notification = Some(Notification::Draw);
                        self.sounds.play(SoundEvent::GameDrawn);
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(e) => debug!(row, col, "ignored click: {e}"),
        }

        result
    }

    /// Restart request from the button or keyboard
    pub fn restart(&mut self) {
        self.game.reset();
        self.notification = None;
    }

    /// One-line status for the control panel
    pub fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.game.current_player()),
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}
