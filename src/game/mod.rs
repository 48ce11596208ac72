//! Core Connect Four game logic: board representation, player types, the
//! gravity move engine, win/tie detection and the turn state machine.

mod board;
mod moves;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, Coord, HEIGHT, WIDTH};
pub use moves::{apply_move, find_landing_row};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveOutcome};
pub use win::{find_win, has_win, has_win_through, is_tie, WinningLine};
