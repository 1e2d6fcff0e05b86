use thiserror::Error;

use crate::board::side::Side;

/// Domain errors surfaced by the board, rules engine, search bot, and the
/// game orchestrator. System faults (panics from a faulty pluggable scoring
/// implementation, worker panics) are deliberately not mapped here; they
/// propagate as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// A board- or rules-level operation was asked to enumerate a side that
    /// cannot own figures.
    #[error("expected Black or Red, got {0:?}")]
    InvalidSide(Side),

    /// A player chose a move that was not offered this turn. Covers walk
    /// moves outside the legal set as well as undo/redo with no history.
    #[error("chosen move is not available this turn")]
    NoSuchMove,

    /// Both players were registered for the same side.
    #[error("players must take different sides")]
    PlayersOnSameSide,
}
