//! Core engine types: cells, board, moves, snapshots, configuration, errors.
//!
//! This module contains the building blocks shared by every variant. Rule
//! sets operate on these types; they never extend them.

pub mod action;
pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::Move;
pub use board::{Board, COMPASS, ORTHOGONAL};
pub use cell::{Cell, Coord};
pub use config::{GameConfig, Variant, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::GameError;
pub use rng::GameRng;
pub use state::{History, Snapshot};
