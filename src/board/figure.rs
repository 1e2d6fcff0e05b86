use std::fmt;

use crate::board::direction::Direction;
use crate::board::point::Point;
use crate::board::side::Side;

/// Immutable snapshot of one piece: position, owner, king flag.
///
/// Figures are transient query results derived from the board; the board's
/// bit masks stay the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Figure {
    pub point: Point,
    pub side: Side,
    pub is_king: bool,
}

impl Figure {
    /// The "no figure" sentinel returned for empty or invalid cells.
    pub const NOP: Figure = Figure {
        point: Point::NOP,
        side: Side::Nop,
        is_king: false,
    };

    #[inline]
    pub const fn new(point: Point, side: Side, is_king: bool) -> Figure {
        Figure { point, side, is_king }
    }

    pub const fn simple(row: i32, col: i32, side: Side) -> Figure {
        Figure::new(Point::at(row, col), side, false)
    }

    pub const fn king(row: i32, col: i32, side: Side) -> Figure {
        Figure::new(Point::at(row, col), side, true)
    }

    /// Legal movement directions for this figure kind: all four diagonals for
    /// a king, the two forward diagonals for a simple piece, nothing for the
    /// sentinel.
    pub fn directions(&self) -> &'static [Direction] {
        if self.is_king {
            return &Direction::ALL;
        }
        match self.side {
            Side::Black => &Direction::UPPER,
            Side::Red => &Direction::BOTTOM,
            Side::Nop | Side::Empty => &[],
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let king_mark = if self.is_king { "*" } else { "" };
        write!(f, "{}:{:?}{}", self.point, self.side, king_mark)
    }
}
