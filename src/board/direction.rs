use crate::board::point::Point;

/// One of the four diagonal movement directions.
///
/// "Upper" means toward row 0 (Black's promotion row), "bottom" toward the
/// last row (Red's promotion row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    UpperLeft,
    UpperRight,
    BottomLeft,
    BottomRight,
}

impl Direction {
    /// King movement set. The order fixes enumeration order for kings.
    pub const ALL: [Direction; 4] = [
        Direction::BottomLeft,
        Direction::BottomRight,
        Direction::UpperLeft,
        Direction::UpperRight,
    ];

    /// Forward directions of a simple Black figure.
    pub const UPPER: [Direction; 2] = [Direction::UpperLeft, Direction::UpperRight];

    /// Forward directions of a simple Red figure.
    pub const BOTTOM: [Direction; 2] = [Direction::BottomLeft, Direction::BottomRight];

    /// Walks `steps` cells along this diagonal. Falls off the top or left
    /// edge as [`Point::NOP`].
    #[inline]
    pub const fn apply(self, p: Point, steps: i32) -> Point {
        match self {
            Direction::UpperLeft => Point::at(p.row - steps, p.col - steps),
            Direction::UpperRight => Point::at(p.row - steps, p.col + steps),
            Direction::BottomLeft => Point::at(p.row + steps, p.col - steps),
            Direction::BottomRight => Point::at(p.row + steps, p.col + steps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;
    use crate::board::point::Point;

    #[test]
    fn single_and_double_steps() {
        let origin = Point::at(4, 4);
        assert_eq!(Point::at(3, 3), Direction::UpperLeft.apply(origin, 1));
        assert_eq!(Point::at(2, 6), Direction::UpperRight.apply(origin, 2));
        assert_eq!(Point::at(6, 2), Direction::BottomLeft.apply(origin, 2));
        assert_eq!(Point::at(5, 5), Direction::BottomRight.apply(origin, 1));
    }

    #[test]
    fn walking_off_the_edge_yields_nop() {
        assert_eq!(Point::NOP, Direction::UpperLeft.apply(Point::at(0, 0), 1));
        assert_eq!(Point::NOP, Direction::UpperRight.apply(Point::at(1, 7), 2));
    }
}
