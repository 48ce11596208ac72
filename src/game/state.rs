use log::{debug, info, warn};

use super::{
    apply_move, find_landing_row, find_win, is_tie, Board, Cell, Coord, Player, WinningLine,
};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { active: Player },
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Result of a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Column was full; nothing changed and the same player moves again.
    Rejected,
    /// Piece placed, game continues with the other player.
    Accepted {
        row: usize,
        column: usize,
        player: Player,
    },
    Won {
        player: Player,
    },
    Tied,
}

/// One game session: the board plus the turn state machine.
///
/// Sessions are independent values; hosting several games means holding
/// several `GameState`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    first_player: Player,
    status: GameStatus,
    last_move: Option<Coord>,
    winning_line: Option<WinningLine>,
}

impl GameState {
    /// Start a new game on an empty `width` x `height` board, player one to move.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::with_first_player(width, height, Player::One)
    }

    /// Start a new game where `first_player` makes the opening move.
    pub fn with_first_player(
        width: usize,
        height: usize,
        first_player: Player,
    ) -> Result<Self, BoardError> {
        Ok(Self::fresh(Board::new(width, height)?, first_player))
    }

    /// Standard 7x6 game, player one to move
    pub fn initial() -> Self {
        Self::starting_with(Player::One)
    }

    /// Standard 7x6 game where `first_player` opens
    pub fn starting_with(first_player: Player) -> Self {
        Self::fresh(Board::standard(), first_player)
    }

    fn fresh(board: Board, first_player: Player) -> Self {
        info!(
            "new {}x{} game, {first_player} to move",
            board.width(),
            board.height()
        );
        GameState {
            board,
            first_player,
            status: GameStatus::InProgress {
                active: first_player,
            },
            last_move: None,
            winning_line: None,
        }
    }

    /// Current state snapshot
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player to move, `None` once the game is over
    pub fn active_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress { active } => Some(active),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupancy of a single cell, for rendering
    pub fn cell_owner(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        self.board.get(row, column)
    }

    /// Where the most recent piece landed
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// The run that ended the game, if it was won
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| find_landing_row(&self.board, col).is_some())
            .collect()
    }

    /// Clear the board and start over with the same dimensions and opener.
    pub fn reset(&mut self) {
        info!("game reset");
        self.board = self.board.cleared();
        self.status = GameStatus::InProgress {
            active: self.first_player,
        };
        self.last_move = None;
        self.winning_line = None;
    }

    /// Play the active player's piece into `column`.
    ///
    /// A full column yields [`MoveOutcome::Rejected`] and leaves the turn
    /// unchanged. The win check runs before the tie check, so a move that
    /// both fills the board and completes a line is a win.
    pub fn submit_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        let active = match self.status {
            GameStatus::InProgress { active } => active,
            GameStatus::Won(_) | GameStatus::Tied => {
                warn!("move in column {column} submitted after game over");
                return Err(MoveError::GameAlreadyOver);
            }
        };

        let width = self.board.width();
        if column >= width {
            warn!("{active} chose column {column}, outside 0..{width}");
            return Err(MoveError::InvalidColumn { column, width });
        }

        let Some(at) = apply_move(&mut self.board, column, active)? else {
            warn!("column {column} is full, {active} must choose again");
            return Ok(MoveOutcome::Rejected);
        };
        self.last_move = Some(at);
        debug!("{active} dropped into ({}, {})", at.row, at.col);

        if let Some(line) = find_win(&self.board, active) {
            debug_assert!(super::has_win_through(&self.board, at));
            info!("{active} has won");
            self.status = GameStatus::Won(active);
            self.winning_line = Some(line);
            return Ok(MoveOutcome::Won { player: active });
        }

        if is_tie(&self.board) {
            info!("board full, game tied");
            self.status = GameStatus::Tied;
            return Ok(MoveOutcome::Tied);
        }

        self.status = GameStatus::InProgress {
            active: active.other(),
        };
        Ok(MoveOutcome::Accepted {
            row: at.row,
            column,
            player: active,
        })
    }

    /// Apply a move and return the new state, leaving `self` untouched.
    pub fn with_move(&self, column: usize) -> Result<(GameState, MoveOutcome), MoveError> {
        let mut next = self.clone();
        let outcome = next.submit_move(column)?;
        Ok((next, outcome))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
