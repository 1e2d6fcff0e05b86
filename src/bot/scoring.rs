use crate::board::side::Side;
use crate::board::square_board::SquareBoard;

/// Static board evaluator consumed at search-horizon leaves.
///
/// `evaluate` must be a pure function of the board: the search calls it
/// concurrently from sibling branches.
pub trait BoardScoring {
    /// Score from `side`'s perspective; positive means `side` is better off.
    fn evaluate(&self, board: &SquareBoard, side: Side) -> i32;
}

impl<S: BoardScoring + ?Sized> BoardScoring for &S {
    fn evaluate(&self, board: &SquareBoard, side: Side) -> i32 {
        (**self).evaluate(board, side)
    }
}

/// Baseline material count: a simple piece is worth 1, a king 3; the score is
/// the own total minus the enemy total.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaterialScoring;

impl BoardScoring for MaterialScoring {
    fn evaluate(&self, board: &SquareBoard, side: Side) -> i32 {
        side_score(board, side) - side_score(board, side.opposite())
    }
}

fn side_score(board: &SquareBoard, side: Side) -> i32 {
    let Ok(figures) = board.get_all(side) else {
        return 0;
    };
    figures
        .iter()
        .map(|figure| if figure.is_king { 3 } else { 1 })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{BoardScoring, MaterialScoring};
    use crate::board::figure::Figure;
    use crate::board::side::Side;
    use crate::board::square_board::SquareBoard;

    #[test]
    fn empty_board_scores_zero_for_both_sides() {
        let board = SquareBoard::new(8);
        assert_eq!(0, MaterialScoring.evaluate(&board, Side::Black));
        assert_eq!(0, MaterialScoring.evaluate(&board, Side::Red));
    }

    #[test]
    fn kings_weigh_three_and_simple_pieces_one() {
        let mut board = SquareBoard::new(8);
        board.set(Figure::simple(5, 2, Side::Black));
        board.set(Figure::king(2, 3, Side::Red));
        board.set(Figure::simple(1, 2, Side::Red));
        board.set(Figure::simple(3, 4, Side::Red));

        // Black: 1; Red: 3 + 1 + 1.
        assert_eq!(1 - 5, MaterialScoring.evaluate(&board, Side::Black));
        assert_eq!(5 - 1, MaterialScoring.evaluate(&board, Side::Red));
    }
}
