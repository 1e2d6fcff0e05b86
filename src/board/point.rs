use std::fmt;

/// Board coordinate. Row 0 is the far row from Black's starting side; rows
/// grow toward Red's starting side.
///
/// The reserved [`Point::NOP`] value stands for "no position". Any arithmetic
/// that walks off the top or left edge of the board collapses to it, so a
/// single equality check rejects invalid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// The "no position" sentinel. Compares unequal to every valid coordinate.
    pub const NOP: Point = Point { row: -1, col: -1 };

    /// Builds a coordinate, collapsing any negative component to [`Point::NOP`].
    #[inline]
    pub const fn at(row: i32, col: i32) -> Point {
        if row < 0 || col < 0 {
            return Point::NOP;
        }
        Point { row, col }
    }

    #[inline]
    pub const fn is_nop(self) -> bool {
        self.row < 0 || self.col < 0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
