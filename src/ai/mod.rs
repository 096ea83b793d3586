//! Opponent policies.
//!
//! Tunable move selectors that play through the `Game` façade:
//!
//! - `GomokuHeuristic`: line-threat scoring with blocking and a center bonus
//! - `ReversiHeuristic`: positional weight table plus flip count
//! - `RandomPolicy`: uniform over legal placements (Go)
//!
//! `policy_for` picks the reference policy for a variant and `play_turn`
//! applies one policy move.

pub mod config;
pub mod gomoku;
pub mod policy;
pub mod reversi;

pub use config::PolicyConfig;
pub use gomoku::GomokuHeuristic;
pub use policy::{play_turn, policy_for, OpponentPolicy, RandomPolicy};
pub use reversi::{ReversiHeuristic, POSITION_WEIGHTS};
