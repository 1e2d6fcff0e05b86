use crate::board::figure::Figure;
use crate::board::side::Side;
use crate::board::square_board::SquareBoard;

/// Produces the starting layout of a game. Implementations own the full
/// layout contract; callers only promise to invoke `build` once per game.
pub trait BoardBuilder {
    fn build(&self) -> SquareBoard;
}

/// Standard 8×8 English draughts opening: three rows of Red at the top,
/// three rows of Black at the bottom, dark squares only.
#[derive(Debug, Default, Clone, Copy)]
pub struct DraughtsBoardBuilder;

impl BoardBuilder for DraughtsBoardBuilder {
    fn build(&self) -> SquareBoard {
        let mut board = SquareBoard::new(8);
        for row in 0..board.size() {
            if row == 3 || row == 4 {
                continue;
            }
            let side = if row < 3 { Side::Red } else { Side::Black };
            for col in 0..board.size() {
                if row % 2 != col % 2 {
                    board.set(Figure::simple(row, col, side));
                }
            }
        }
        board
    }
}

/// Tiny fixed endgame layout, handy for manual play and demos.
#[derive(Debug, Default, Clone, Copy)]
pub struct PresetBoardBuilder;

impl BoardBuilder for PresetBoardBuilder {
    fn build(&self) -> SquareBoard {
        let mut board = SquareBoard::new(8);
        board.set(Figure::simple(0, 7, Side::Red));
        board.set(Figure::simple(0, 3, Side::Red));
        board.set(Figure::simple(2, 1, Side::Black));
        board.set(Figure::simple(7, 0, Side::Black));
        board
    }
}
