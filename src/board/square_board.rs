use std::fmt;

use crate::board::figure::Figure;
use crate::board::point::Point;
use crate::board::side::Side;
use crate::errors::GameError;

/// N×N board state packed into three parallel bit masks: Black occupancy,
/// Red occupancy, and the king flags. A set bit in `kings` is only meaningful
/// when the same bit is set in one of the occupancy masks.
///
/// The board is a plain value: copying it is the mechanism for producing
/// independent search branches, so every cell operation stays O(1) and the
/// whole state fits in a handful of machine words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareBoard {
    black: u64,
    red: u64,
    kings: u64,
    size: i32,
}

impl SquareBoard {
    /// Creates an empty board. `size` must not exceed 8 so every cell maps
    /// into the 64-bit masks.
    pub fn new(size: i32) -> SquareBoard {
        debug_assert!((1..=8).contains(&size));
        SquareBoard {
            black: 0,
            red: 0,
            kings: 0,
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Figure at `p`, or [`Figure::NOP`] for an empty sentinel or
    /// out-of-bounds coordinate.
    pub fn get(&self, p: Point) -> Figure {
        if !self.in_bounds(p) {
            return Figure::NOP;
        }
        let bit = self.bit(p);
        if self.black >> bit & 1 == 1 {
            return Figure::new(p, Side::Black, self.kings >> bit & 1 == 1);
        }
        if self.red >> bit & 1 == 1 {
            return Figure::new(p, Side::Red, self.kings >> bit & 1 == 1);
        }
        Figure::new(p, Side::Empty, false)
    }

    /// Out-of-bounds cells count as non-empty, so an off-board jump target is
    /// never mistaken for a legal landing square.
    pub fn is_empty(&self, p: Point) -> bool {
        if !self.in_bounds(p) {
            return false;
        }
        let bit = self.bit(p);
        self.black >> bit & 1 == 0 && self.red >> bit & 1 == 0
    }

    pub fn no_figures(&self, side: Side) -> bool {
        match side {
            Side::Black => self.black == 0,
            Side::Red => self.red == 0,
            Side::Nop | Side::Empty => true,
        }
    }

    /// Places `figure` on the board, clearing the opposite-side bit and
    /// syncing the king flag. A `Side::Empty` figure clears the cell's
    /// occupancy without touching any other cell.
    pub fn set(&mut self, figure: Figure) {
        if !self.in_bounds(figure.point) {
            return;
        }
        let mask = 1u64 << self.bit(figure.point);
        if figure.is_king {
            self.kings |= mask;
        } else {
            self.kings &= !mask;
        }
        match figure.side {
            Side::Black => {
                self.black |= mask;
                self.red &= !mask;
            }
            Side::Red => {
                self.red |= mask;
                self.black &= !mask;
            }
            Side::Nop | Side::Empty => {
                self.black &= !mask;
                self.red &= !mask;
            }
        }
    }

    pub fn clear(&mut self, p: Point) {
        if !self.in_bounds(p) {
            return;
        }
        let mask = 1u64 << self.bit(p);
        self.black &= !mask;
        self.red &= !mask;
        self.kings &= !mask;
    }

    pub fn set_king(&mut self, p: Point) {
        if !self.in_bounds(p) {
            return;
        }
        self.kings |= 1u64 << self.bit(p);
    }

    pub fn clear_king(&mut self, p: Point) {
        if !self.in_bounds(p) {
            return;
        }
        self.kings &= !(1u64 << self.bit(p));
    }

    /// All figures of a playing side, in row-major board order. Enumerating
    /// the non-player sides is a usage error.
    pub fn get_all(&self, side: Side) -> Result<Vec<Figure>, GameError> {
        if !side.is_player() {
            return Err(GameError::InvalidSide(side));
        }
        let figures = match side {
            Side::Black => self.black,
            _ => self.red,
        };
        let mut result = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let bit = self.size * col + row;
                if figures >> bit & 1 == 1 {
                    result.push(Figure::new(
                        Point::at(row, col),
                        side,
                        self.kings >> bit & 1 == 1,
                    ));
                }
            }
        }
        Ok(result)
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.size && p.col >= 0 && p.col < self.size
    }

    #[inline]
    fn bit(&self, p: Point) -> u32 {
        (self.size * p.col + p.row) as u32
    }
}

impl fmt::Display for SquareBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = self.get(Point::at(row, col));
                let mark = match (cell.side, cell.is_king) {
                    (Side::Black, true) => 'B',
                    (Side::Black, false) => 'b',
                    (Side::Red, true) => 'R',
                    (Side::Red, false) => 'r',
                    _ => '.',
                };
                write!(f, "{mark} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
