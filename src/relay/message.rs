//! Relay messages exchanged with a network peer.
//!
//! The transport collaborator frames and delivers these in order; the engine
//! only converts them to and from façade calls. On the wire they are JSON
//! objects tagged by a `"type"` field:
//!
//! ```json
//! {"type":"MOVE","r":7,"c":7}
//! {"type":"PASS"}
//! {"type":"START","variant":"go","size":9,"assigned_color":"White"}
//! ```

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{Cell, GameConfig, GameError, Move, Variant};
use crate::game::{Game, GameFactory, GameStatus, MoveOutcome};
use crate::rules::Placement;

/// One relay message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelayMessage {
    /// Stone placed at row `r`, column `c`.
    Move { r: usize, c: usize },
    /// Turn passed.
    Pass,
    /// Last move taken back.
    Undo,
    /// Side to move resigned.
    Surrender,
    /// New match; `assigned_color` is the receiver's color.
    Start {
        variant: Variant,
        size: usize,
        assigned_color: Cell,
    },
}

impl RelayMessage {
    /// Apply a message received from the peer to the local game.
    ///
    /// `START` is not a move: it is rejected here and handled by
    /// [`RelayMessage::start_game`].
    #[instrument(skip(game))]
    pub fn apply(&self, game: &mut Game) -> Result<MoveOutcome, GameError> {
        match *self {
            RelayMessage::Move { r, c } => game.attempt_move(r, c),
            RelayMessage::Pass => game.pass_turn(),
            RelayMessage::Undo => game.undo(),
            RelayMessage::Surrender => {
                let resigning = game.current_player();
                let result = game.surrender();
                Ok(MoveOutcome {
                    message: format!("{} resigned, {}", resigning, result),
                    placement: Placement::default(),
                    status: GameStatus::Over(result),
                })
            }
            RelayMessage::Start { .. } => Err(GameError::IllegalMove(
                "START received while a game is in progress".to_string(),
            )),
        }
    }

    /// Build the local game described by a `START` message.
    ///
    /// Returns the game and the local player's color.
    pub fn start_game(&self) -> Result<(Game, Cell), GameError> {
        match *self {
            RelayMessage::Start {
                variant,
                size,
                assigned_color,
            } => {
                if !assigned_color.is_stone() {
                    return Err(GameError::InvalidRecord(
                        "START must assign Black or White".to_string(),
                    ));
                }
                let game = GameFactory::from_config(GameConfig::new(variant).with_size(size))?;
                Ok((game, assigned_color))
            }
            _ => Err(GameError::InvalidRecord(format!("{:?} is not a START message", self))),
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Move> for RelayMessage {
    fn from(m: Move) -> Self {
        match m {
            Move::Place(coord) => RelayMessage::Move {
                r: coord.row,
                c: coord.col,
            },
            Move::Pass => RelayMessage::Pass,
        }
    }
}
