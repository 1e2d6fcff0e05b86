use std::fmt;

use crate::board::point::Point;

/// One atomic transition inside a turn. The step kind set is closed, so the
/// applier can match it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStep {
    /// Simple slide into an adjacent empty cell.
    Move(Point),
    /// Capture jump over an enemy figure, landing two cells away.
    Jump(Point),
    /// King promotion on the figure's current cell; moves nothing.
    PromoteKing,
}

impl MoveStep {
    /// Landing square of the step; [`Point::NOP`] for a promotion.
    #[inline]
    pub fn target(self) -> Point {
        match self {
            MoveStep::Move(p) | MoveStep::Jump(p) => p,
            MoveStep::PromoteKing => Point::NOP,
        }
    }
}

impl fmt::Display for MoveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStep::Move(p) => write!(f, "Move{p}"),
            MoveStep::Jump(p) => write!(f, "Jump{p}"),
            MoveStep::PromoteKing => write!(f, "PromoteKing"),
        }
    }
}
