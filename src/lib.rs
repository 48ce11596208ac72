//! # Connect Four
//!
//! A two-player Connect Four game. The engine owns the board, move placement,
//! win/tie detection and turn alternation; a terminal UI built with Ratatui
//! drives it through the session API on [`game::GameState`].
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, move engine, win detection, turn state machine
//! - [`ui`] — Terminal UI: board view, column selector, status messages
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed `log` facade setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
