//! Game façade and factory.
//!
//! `Game` is the single public surface other subsystems call: GUIs, network
//! relays and opponent policies all go through it. `GameFactory` builds one
//! from a variant identifier and board size.

mod factory;
mod session;

pub use factory::GameFactory;
pub use session::{Game, GameStatus, MoveOutcome};
