//! Rules engine trait for variant implementations.
//!
//! Variants implement `RulesEngine` to define their rules:
//! - Initial position
//! - Which placements are legal and what they do to the board
//! - Terminal conditions and scoring
//! - Whether and when passing is allowed

use im::Vector;

use crate::core::{Board, Cell, Coord, GameError, Move, Variant};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Cell),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// The winning color, `None` for a draw.
    #[must_use]
    pub fn winner(self) -> Option<Cell> {
        match self {
            GameResult::Winner(cell) => Some(cell),
            GameResult::Draw => None,
        }
    }

    /// Check if a color won.
    #[must_use]
    pub fn is_winner(self, cell: Cell) -> bool {
        self.winner() == Some(cell)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(cell) => write!(f, "{} wins", cell),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Side effects of an accepted placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    /// Stones removed from the board (Go).
    pub captured: usize,
    /// Stones turned to the mover's color (Reversi).
    pub flipped: usize,
}

/// What the game does once an accepted placement has been recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnHook {
    /// The opponent moves next.
    Continue,
    /// The opponent cannot move: record a pass and return the turn to the mover.
    AutoPass,
    /// Neither side can move.
    Finished(GameResult),
}

/// Rules engine trait.
///
/// The `Game` façade calls these methods and never inspects the concrete
/// variant beyond [`RulesEngine::variant`].
///
/// ## Implementation Notes
///
/// - `place`: called on a scratch copy of the board with an in-range, empty
///   target. On `Err` the copy is discarded, so implementations may leave it
///   half-modified.
/// - `previous` is the board of the snapshot beneath the live one, i.e. the
///   position before the opponent's last move.
/// - `check_terminal`: return `None` if the game continues.
pub trait RulesEngine: std::fmt::Debug + Send + Sync {
    /// Variant identifier used by persistence and relay.
    fn variant(&self) -> Variant;

    /// Prepare the initial position on an empty board.
    fn setup(&self, _board: &mut Board) {}

    /// Validate a placement and apply its effects.
    fn place(
        &self,
        board: &mut Board,
        coord: Coord,
        mover: Cell,
        previous: Option<&Board>,
    ) -> Result<Placement, GameError>;

    /// Check for a terminal position right after a placement.
    fn check_terminal(&self, board: &Board) -> Option<GameResult>;

    /// Post-turn hook run when `check_terminal` found nothing.
    ///
    /// `next` is the player now to move.
    fn after_move(&self, _board: &Board, _next: Cell) -> TurnHook {
        TurnHook::Continue
    }

    /// Check whether `passer` may pass in this position.
    fn check_pass(&self, board: &Board, passer: Cell) -> Result<(), GameError>;

    /// Terminal check after a pass has been recorded and the turn switched.
    fn after_pass(&self, board: &Board, moves: &Vector<Move>, next: Cell) -> Option<GameResult>;

    /// Score the board as it stands.
    fn score(&self, board: &Board) -> GameResult;

    // === Convenience Methods ===

    /// Check whether `mover` may place at `coord`.
    ///
    /// Default implementation tries the placement on a copy of the board.
    fn is_legal(&self, board: &Board, coord: Coord, mover: Cell, previous: Option<&Board>) -> bool {
        if !board.is_empty_at(coord) {
            return false;
        }
        let mut scratch = board.clone();
        self.place(&mut scratch, coord, mover, previous).is_ok()
    }

    /// Enumerate all legal placements for `mover` in row-major order.
    fn legal_moves(&self, board: &Board, mover: Cell, previous: Option<&Board>) -> Vec<Coord> {
        board
            .coords()
            .filter(|&coord| self.is_legal(board, coord, mover, previous))
            .collect()
    }
}
