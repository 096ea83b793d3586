//! The `Game` façade: turn order, history and terminal state.
//!
//! ## State machine
//!
//! - `Active` → `Over` on a variant win, double pass, no moves for either
//!   side, or resignation.
//! - `Over` → `Active` only through [`Game::undo`].
//!
//! Every operation is synchronous and total. A rejected operation returns
//! `Err` and leaves board, side to move, move record and history untouched:
//! placements are tried on a scratch copy of the board and committed only
//! when the variant accepts them.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use im::Vector;
use tracing::{debug, info, instrument};

use crate::core::{Board, Cell, Coord, GameConfig, GameError, History, Move, Snapshot, Variant};
use crate::persist::SavedGame;
use crate::rules::{GameResult, Placement, RulesEngine, TurnHook};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are accepted.
    Active,
    /// The game has ended with this result.
    Over(GameResult),
}

/// Report of an accepted operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Human-readable description.
    pub message: String,
    /// Captures and flips caused by a placement (zero for passes).
    pub placement: Placement,
    /// Game status after the operation.
    pub status: GameStatus,
}

/// A single match of one variant.
#[derive(Debug)]
pub struct Game {
    rules: Box<dyn RulesEngine>,
    board: Board,
    current: Cell,
    moves: Vector<Move>,
    history: History,
    status: GameStatus,
    last_captures: usize,
}

fn rejected<T>(err: GameError) -> Result<T, GameError> {
    debug!(%err, "operation rejected");
    Err(err)
}

impl Game {
    /// Create a game on an empty board of side `size`, Black to move.
    ///
    /// The size is not validated here; `GameFactory` is the checked path.
    #[must_use]
    pub(crate) fn new(rules: Box<dyn RulesEngine>, size: usize) -> Self {
        let mut board = Board::new(size);
        rules.setup(&mut board);

        let initial = Snapshot::new(board.clone(), Cell::Black, Vector::new());
        Self {
            rules,
            board,
            current: Cell::Black,
            moves: Vector::new(),
            history: History::new(initial),
            status: GameStatus::Active,
            last_captures: 0,
        }
    }

    // === Queries ===

    /// Variant being played.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.rules.variant()
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn current_player(&self) -> Cell {
        self.current
    }

    /// Move record.
    #[must_use]
    pub fn moves(&self) -> &Vector<Move> {
        &self.moves
    }

    /// Number of snapshots in the undo history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    /// Final result, if the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Over(result) => Some(result),
            GameStatus::Active => None,
        }
    }

    /// Winning color. `None` while active or after a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Cell> {
        self.result().and_then(GameResult::winner)
    }

    /// Stones captured by the last placement (Go).
    #[must_use]
    pub fn last_captures(&self) -> usize {
        self.last_captures
    }

    /// Stones on the board as (black, white).
    #[must_use]
    pub fn stone_counts(&self) -> (usize, usize) {
        (self.board.count(Cell::Black), self.board.count(Cell::White))
    }

    /// Score the board as it stands, using the variant's scoring.
    #[must_use]
    pub fn score(&self) -> GameResult {
        self.rules.score(&self.board)
    }

    /// Access the variant's rules.
    #[must_use]
    pub fn rules(&self) -> &dyn RulesEngine {
        self.rules.as_ref()
    }

    fn previous_board(&self) -> Option<&Board> {
        self.history.previous().map(|snapshot| &snapshot.board)
    }

    /// All legal placements for the side to move. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.is_over() {
            return Vec::new();
        }
        self.rules.legal_moves(&self.board, self.current, self.previous_board())
    }

    /// Check if the side to move may place at `coord`.
    #[must_use]
    pub fn is_legal(&self, coord: Coord) -> bool {
        !self.is_over() && self.rules.is_legal(&self.board, coord, self.current, self.previous_board())
    }

    // === Operations ===

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.is_over() {
            return rejected(GameError::GameOver);
        }
        Ok(())
    }

    fn push_snapshot(&mut self) {
        self.history.push(Snapshot::new(
            self.board.clone(),
            self.current,
            self.moves.clone(),
        ));
    }

    fn record_pass(&mut self) {
        self.moves.push_back(Move::Pass);
        self.current = self.current.opponent();
        self.push_snapshot();
    }

    fn finish(&mut self, result: GameResult, message: &mut String) {
        info!(variant = %self.variant(), %result, "game over");
        self.status = GameStatus::Over(result);
        let _ = write!(message, "; game over, {}", result);
    }

    /// Place a stone for the side to move.
    ///
    /// On acceptance the move is recorded, the turn switches, a snapshot is
    /// pushed, the terminal check runs and then the variant's post-turn hook.
    #[instrument(skip(self), fields(variant = %self.variant(), player = %self.current))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        let coord = Coord::new(row, col);
        self.ensure_active()?;

        match self.board.get(coord) {
            Ok(Cell::Empty) => {}
            Ok(_) => return rejected(GameError::OccupiedCell(coord)),
            Err(err) => return rejected(err),
        }

        let mover = self.current;
        let mut next = self.board.clone();
        let placement = match self.rules.place(&mut next, coord, mover, self.previous_board()) {
            Ok(placement) => placement,
            Err(err) => return rejected(err),
        };

        self.board = next;
        self.moves.push_back(Move::Place(coord));
        self.current = mover.opponent();
        self.last_captures = placement.captured;
        self.push_snapshot();

        let mut message = format!("{} placed at {}", mover, coord);
        if placement.captured > 0 {
            let _ = write!(message, ", captured {}", placement.captured);
        }
        if placement.flipped > 0 {
            let _ = write!(message, ", flipped {}", placement.flipped);
        }

        if let Some(result) = self.rules.check_terminal(&self.board) {
            self.finish(result, &mut message);
        } else {
            match self.rules.after_move(&self.board, self.current) {
                TurnHook::Continue => {}
                TurnHook::AutoPass => {
                    debug!(passer = %self.current, "no legal move, passing automatically");
                    let _ = write!(message, "; {} has no move and passes", self.current);
                    self.record_pass();
                }
                TurnHook::Finished(result) => self.finish(result, &mut message),
            }
        }

        Ok(MoveOutcome {
            message,
            placement,
            status: self.status,
        })
    }

    /// Pass the turn (Go and Reversi).
    ///
    /// In Go two consecutive passes end the game with area scoring. In
    /// Reversi a pass is only allowed without a legal placement.
    #[instrument(skip(self), fields(variant = %self.variant(), player = %self.current))]
    pub fn pass_turn(&mut self) -> Result<MoveOutcome, GameError> {
        self.ensure_active()?;
        if let Err(err) = self.rules.check_pass(&self.board, self.current) {
            return rejected(err);
        }

        let passer = self.current;
        self.last_captures = 0;
        self.record_pass();

        let mut message = format!("{} passed", passer);
        if let Some(result) = self.rules.after_pass(&self.board, &self.moves, self.current) {
            self.finish(result, &mut message);
        }

        Ok(MoveOutcome {
            message,
            placement: Placement::default(),
            status: self.status,
        })
    }

    /// Take back the last recorded move.
    ///
    /// Restores the snapshot beneath the current one and always resumes an
    /// active game, even if the restored position is terminal by the rules.
    #[instrument(skip(self), fields(variant = %self.variant()))]
    pub fn undo(&mut self) -> Result<MoveOutcome, GameError> {
        let restored = match self.history.undo() {
            Ok(snapshot) => snapshot.clone(),
            Err(err) => return rejected(err),
        };

        self.board = restored.board;
        self.current = restored.current_player;
        self.moves = restored.moves;
        self.status = GameStatus::Active;
        self.last_captures = 0;

        debug!(remaining = self.history.len(), "undo");
        Ok(MoveOutcome {
            message: format!("move taken back, {} to move", self.current),
            placement: Placement::default(),
            status: self.status,
        })
    }

    /// The side to move resigns; the opponent wins.
    #[instrument(skip(self), fields(variant = %self.variant(), player = %self.current))]
    pub fn surrender(&mut self) -> GameResult {
        let result = GameResult::Winner(self.current.opponent());
        info!(%result, "resignation");
        self.status = GameStatus::Over(result);
        result
    }

    // === Persistence ===

    /// Capture the live state as a persistence record.
    #[must_use]
    pub fn to_record(&self, metadata: BTreeMap<String, String>) -> SavedGame {
        SavedGame {
            variant: self.variant(),
            size: self.size(),
            board: self.board.to_codes(),
            current_player: self.current.code(),
            moves: self.moves.iter().copied().collect(),
            metadata,
        }
    }

    /// Replace the live state with a saved record.
    ///
    /// The record is fully validated first, including the fixed 8x8 size of
    /// Reversi; on any error the game is left untouched. On success the undo history restarts from the loaded
    /// position and the game is active.
    #[instrument(skip(self, record), fields(variant = %self.variant()))]
    pub fn load(&mut self, record: &SavedGame) -> Result<(), GameError> {
        if record.variant != self.variant() {
            return rejected(GameError::VariantMismatch {
                expected: self.variant(),
                found: record.variant,
            });
        }

        // Variants with a fixed board (Reversi) only accept that size.
        let fixed = GameConfig::new(self.variant()).with_size(record.size).board_size();
        if fixed != record.size {
            return rejected(GameError::InvalidSize(record.size));
        }

        let snapshot = match record.to_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => return rejected(err),
        };

        self.board = snapshot.board.clone();
        self.current = snapshot.current_player;
        self.moves = snapshot.moves.clone();
        self.history.reset(snapshot);
        self.status = GameStatus::Active;
        self.last_captures = 0;

        info!(moves = self.moves.len(), "game loaded");
        Ok(())
    }
}
