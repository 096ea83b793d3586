//! # rust-boardgames
//!
//! Rule engine for two-player turn-based board games on a square grid:
//! Gomoku, Go and Reversi behind one `Game` façade.
//!
//! ## Design Principles
//!
//! 1. **Atomic Moves**: A rejected operation leaves the board, the side to
//!    move and the history exactly as they were.
//!
//! 2. **One Façade**: GUIs, network relays and opponent policies all drive a
//!    game through `Game`; variants only supply a `RulesEngine`.
//!
//! 3. **No I/O**: Persistence and networking are contracts (`SavedGame`,
//!    `RelayMessage`); files and sockets belong to the caller.
//!
//! ## Architecture
//!
//! - **Snapshot History**: Every accepted move pushes a full snapshot, so
//!   undo restores state exactly and Go ko compares whole positions.
//!
//! - **Persistent Data Structures**: Move records use `im::Vector` so
//!   snapshots are cheap, independent copies.
//!
//! ## Modules
//!
//! - `core`: Cells, coordinates, board, moves, history, configuration, errors
//! - `rules`: RulesEngine trait and the Gomoku, Go and Reversi rules
//! - `game`: Game façade and factory
//! - `persist`: Saved-game record and codecs
//! - `relay`: Network relay messages
//! - `ai`: Opponent policies
//!
//! ## Example
//!
//! ```
//! use rust_boardgames::{Cell, GameFactory};
//!
//! let mut game = GameFactory::create("gomoku", 15).unwrap();
//! game.attempt_move(7, 7).unwrap();
//! assert_eq!(game.current_player(), Cell::White);
//!
//! assert!(game.attempt_move(7, 7).is_err());
//! game.undo().unwrap();
//! assert_eq!(game.current_player(), Cell::Black);
//! ```

pub mod ai;
pub mod core;
pub mod game;
pub mod persist;
pub mod relay;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, GameConfig, GameError, GameRng, History, Move, Snapshot, Variant,
};

pub use crate::rules::{GameResult, GoRules, GomokuRules, Placement, ReversiRules, RulesEngine};

pub use crate::game::{Game, GameFactory, GameStatus, MoveOutcome};

pub use crate::persist::SavedGame;

pub use crate::relay::RelayMessage;

pub use crate::ai::{
    play_turn, policy_for, GomokuHeuristic, OpponentPolicy, PolicyConfig, RandomPolicy,
    ReversiHeuristic,
};
