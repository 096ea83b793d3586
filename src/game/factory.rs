//! Game factory: variant identifier + board size → fresh `Game`.

use tracing::instrument;

use super::session::Game;
use crate::core::{GameConfig, GameError, Variant};
use crate::persist::SavedGame;
use crate::rules::rules_for;

/// Constructor dispatch keyed by variant.
///
/// ## Example
///
/// ```
/// use rust_boardgames::core::Cell;
/// use rust_boardgames::game::GameFactory;
///
/// let game = GameFactory::create("go", 9).unwrap();
/// assert_eq!(game.size(), 9);
/// assert_eq!(game.current_player(), Cell::Black);
///
/// // Reversi is always 8x8.
/// let reversi = GameFactory::create("reversi", 15).unwrap();
/// assert_eq!(reversi.size(), 8);
///
/// assert!(GameFactory::create("chess", 8).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GameFactory;

impl GameFactory {
    /// Create a game from a variant identifier and board size.
    ///
    /// Fails with `UnknownVariant` for unrecognised identifiers and
    /// `InvalidSize` for Gomoku/Go sizes outside 8..=19.
    #[instrument]
    pub fn create(variant: &str, size: usize) -> Result<Game, GameError> {
        let variant: Variant = variant.parse()?;
        Self::from_config(GameConfig::new(variant).with_size(size))
    }

    /// Create a game from a configuration.
    pub fn from_config(config: GameConfig) -> Result<Game, GameError> {
        config.validate()?;
        Ok(Game::new(rules_for(config.variant), config.board_size()))
    }

    /// Create a game of the record's variant and load the record into it.
    pub fn restore(record: &SavedGame) -> Result<Game, GameError> {
        let mut game = Self::from_config(GameConfig::new(record.variant).with_size(record.size))?;
        game.load(record)?;
        Ok(game)
    }
}
