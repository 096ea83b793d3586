//! Game configuration types.
//!
//! Callers configure a match by providing:
//! - `Variant`: which rule set to play (Gomoku, Go, Reversi)
//! - `GameConfig`: variant plus board size
//!
//! The factory turns a `GameConfig` into a ready-to-play `Game`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// Smallest supported board side.
pub const MIN_BOARD_SIZE: usize = 8;

/// Largest supported board side.
pub const MAX_BOARD_SIZE: usize = 19;

/// Rule variant identifier.
///
/// Parses from the lowercase identifiers used by the persistence and relay
/// formats (`"gomoku"`, `"go"`, `"reversi"`). `"othello"` is accepted as an
/// alias for Reversi.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Five in a row.
    Gomoku,
    /// Go with simplified area scoring.
    Go,
    /// Reversi / Othello.
    Reversi,
}

impl Variant {
    /// All supported variants.
    pub const ALL: [Variant; 3] = [Variant::Gomoku, Variant::Go, Variant::Reversi];

    /// Lowercase identifier used in saved games and relay messages.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Variant::Gomoku => "gomoku",
            Variant::Go => "go",
            Variant::Reversi => "reversi",
        }
    }

    /// Default board side for this variant.
    #[must_use]
    pub const fn default_size(self) -> usize {
        match self {
            Variant::Gomoku => 15,
            Variant::Go => 19,
            Variant::Reversi => 8,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Variant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gomoku" => Ok(Variant::Gomoku),
            "go" => Ok(Variant::Go),
            "reversi" | "othello" => Ok(Variant::Reversi),
            _ => Err(GameError::UnknownVariant(s.to_string())),
        }
    }
}

/// Complete game configuration.
///
/// Reversi is always played on the standard 8x8 board: a requested size is
/// recorded but [`GameConfig::board_size`] reports 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule set.
    pub variant: Variant,

    /// Requested board side.
    pub size: usize,
}

impl GameConfig {
    /// Create a configuration with the variant's default size.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            size: variant.default_size(),
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// The board side the game will actually use.
    #[must_use]
    pub fn board_size(&self) -> usize {
        match self.variant {
            Variant::Reversi => 8,
            _ => self.size,
        }
    }

    /// Check the board size lies in the supported range.
    pub fn validate(&self) -> Result<(), GameError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size()) {
            Ok(())
        } else {
            Err(GameError::InvalidSize(self.size))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!("gomoku".parse::<Variant>(), Ok(Variant::Gomoku));
        assert_eq!("Go".parse::<Variant>(), Ok(Variant::Go));
        assert_eq!(" othello ".parse::<Variant>(), Ok(Variant::Reversi));
        assert_eq!(
            "chess".parse::<Variant>(),
            Err(GameError::UnknownVariant("chess".to_string()))
        );
    }

    #[test]
    fn test_variant_display_matches_tag() {
        for variant in Variant::ALL {
            assert_eq!(format!("{}", variant), variant.tag());
            assert_eq!(variant.tag().parse::<Variant>(), Ok(variant));
        }
    }

    #[test]
    fn test_variant_serde_lowercase() {
        let json = serde_json::to_string(&Variant::Reversi).unwrap();
        assert_eq!(json, "\"reversi\"");
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new(Variant::Go).with_size(9);
        assert_eq!(config.size, 9);
        assert_eq!(config.board_size(), 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reversi_board_is_always_eight() {
        let config = GameConfig::new(Variant::Reversi).with_size(12);
        assert_eq!(config.board_size(), 8);

        let oversized = GameConfig::new(Variant::Reversi).with_size(40);
        assert!(oversized.validate().is_ok());
    }

    #[test]
    fn test_config_size_bounds() {
        assert!(GameConfig::new(Variant::Gomoku).with_size(8).validate().is_ok());
        assert!(GameConfig::new(Variant::Gomoku).with_size(19).validate().is_ok());
        assert_eq!(
            GameConfig::new(Variant::Gomoku).with_size(7).validate(),
            Err(GameError::InvalidSize(7))
        );
        assert_eq!(
            GameConfig::new(Variant::Go).with_size(20).validate(),
            Err(GameError::InvalidSize(20))
        );
    }
}
