//! Core game state: board, turn and outcome
//!
//! No rendering, no sound. The UI forwards clicks to
//! [`GameState::attempt_move`] and projects the result.

use derive_more::{Display, Error};
use tracing::{debug, info};

use crate::board::{Board, Player, Pos};
use crate::rules;

/// Outcome of the game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Reasons a move is rejected. State is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("cell ({row}, {col}) is off the board")]
    InvalidCell { row: usize, col: usize },
    #[display("cell {pos} is already occupied")]
    CellOccupied { pos: Pos },
    #[display("game has already ended")]
    GameAlreadyEnded,
}

/// New status on success
pub type MoveResult = Result<GameStatus, MoveError>;

/// Board, active player and cached outcome
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<[Pos; 3]>,
    move_history: Vec<(Pos, Player)>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            move_history: Vec::with_capacity(9),
        }
    }

    /// Back to an empty board with X to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.move_history.clear();
        debug!("game reset");
    }

    /// Place the active player's mark at `(row, col)`.
    ///
    /// On success returns the new status. The turn passes to the opponent
    /// only while the game is still in progress.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> MoveResult {
        if self.status.is_over() {
            return Err(MoveError::GameAlreadyEnded);
        }

        let pos = Pos::try_new(row, col).ok_or(MoveError::InvalidCell { row, col })?;

        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied { pos });
        }

        let player = self.current_player;
        self.board.place(pos, player);
        self.move_history.push((pos, player));

        self.status = self.evaluate(player);
        match self.status {
            GameStatus::InProgress => self.current_player = player.opponent(),
            GameStatus::Won(winner) => info!(%winner, moves = self.move_history.len(), "game won"),
            GameStatus::Draw => info!("game drawn"),
        }

        debug!(%player, %pos, status = ?self.status, "move accepted");
        Ok(self.status)
    }

    /// Win check for the player who just moved, then the draw check
    fn evaluate(&mut self, mover: Player) -> GameStatus {
        if let Some(line) = rules::find_winning_line(&self.board, mover) {
            self.winning_line = Some(line);
            return GameStatus::Won(mover);
        }

        if rules::is_draw(&self.board, mover) {
            return GameStatus::Draw;
        }

        GameStatus::InProgress
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the last mover once the game has ended
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The completed line when the game is won
    #[inline]
    pub fn winning_line(&self) -> Option<[Pos; 3]> {
        self.winning_line
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().map(|&(pos, _)| pos)
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    pub fn move_history(&self) -> &[(Pos, Player)] {
        &self.move_history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
