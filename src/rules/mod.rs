//! Rule variants.
//!
//! Each variant implements `RulesEngine` to define:
//! - Legal placements and their effects (captures, flips)
//! - Terminal conditions and scoring
//! - Pass handling
//!
//! The `Game` façade calls into `RulesEngine` but never interprets
//! variant-specific concepts directly.

pub mod engine;
pub mod go;
pub mod gomoku;
pub mod reversi;

pub use engine::{GameResult, Placement, RulesEngine, TurnHook};
pub use go::{GoRules, Group, GO_COMPENSATION};
pub use gomoku::{GomokuRules, LINE_DIRECTIONS, WIN_LENGTH};
pub use reversi::{Flips, ReversiRules};

use crate::core::Variant;

/// Build the rules engine for a variant.
#[must_use]
pub fn rules_for(variant: Variant) -> Box<dyn RulesEngine> {
    match variant {
        Variant::Gomoku => Box::new(GomokuRules),
        Variant::Go => Box::new(GoRules),
        Variant::Reversi => Box::new(ReversiRules),
    }
}
