//! Persistence contract.
//!
//! The engine serializes a game to a [`SavedGame`] record and restores one
//! from it. Storage is external: callers hand the encoded bytes or JSON to
//! whatever sink they use.

pub mod record;

pub use record::SavedGame;
