use crate::board::figure::Figure;
use crate::board::side::Side;
use crate::board::square_board::SquareBoard;
use crate::rules::move_sequence::MoveSequence;

/// One ply of game history: enough to undo (restore `board_before`) and to
/// redo (re-apply `sequence` to `board_before`).
#[derive(Debug, Clone)]
pub struct History {
    pub side: Side,
    pub figure: Figure,
    pub sequence: MoveSequence,
    pub board_before: SquareBoard,
    pub turn: u32,
}
