//! Move application: replays a [`MoveSequence`] against a board value.

use crate::board::figure::Figure;
use crate::board::point::Point;
use crate::board::square_board::SquareBoard;
use crate::rules::move_sequence::MoveSequence;
use crate::rules::move_step::MoveStep;

/// Applies every step of `sequence` in order, threading the moving figure's
/// position and king state from one step to the next.
///
/// The input board is taken by value, so the caller's board is untouched and
/// the result is an independent copy that search branches can own outright.
pub fn apply_sequence(figure: Figure, board: SquareBoard, sequence: &MoveSequence) -> SquareBoard {
    let mut board = board;
    let mut current = figure;
    for step in sequence {
        (board, current) = apply_step(board, current, *step);
    }
    board
}

fn apply_step(mut board: SquareBoard, figure: Figure, step: MoveStep) -> (SquareBoard, Figure) {
    match step {
        MoveStep::Move(target) => {
            board.clear(figure.point);
            let moved = Figure::new(target, figure.side, figure.is_king);
            board.set(moved);
            (board, moved)
        }
        MoveStep::Jump(target) => {
            let source = figure.point;
            board.clear(source);
            let moved = Figure::new(target, figure.side, figure.is_king);
            board.set(moved);

            // The captured figure sits on the single cell between source and
            // target. The rules engine already guaranteed an enemy is there,
            // so no re-check is needed.
            let row_offset = if source.row > target.row { -1 } else { 1 };
            let col_offset = if source.col > target.col { -1 } else { 1 };
            board.clear(Point::at(source.row + row_offset, source.col + col_offset));
            (board, moved)
        }
        MoveStep::PromoteKing => {
            board.set_king(figure.point);
            (board, Figure::new(figure.point, figure.side, true))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::apply_sequence;
    use crate::board::figure::Figure;
    use crate::board::point::Point;
    use crate::board::side::Side;
    use crate::board::square_board::SquareBoard;
    use crate::rules::english_draughts::{EnglishDraughtsRules, Rules};
    use crate::rules::move_sequence::MoveSequence;
    use crate::rules::move_step::MoveStep;

    #[test]
    fn simple_move_relocates_the_figure() {
        let figure = Figure::simple(3, 3, Side::Black);
        let mut board = SquareBoard::new(5);
        board.set(figure);

        let result = apply_sequence(
            figure,
            board,
            &MoveSequence::single(MoveStep::Move(Point::at(2, 2))),
        );

        assert!(result.is_empty(Point::at(3, 3)));
        assert_eq!(Side::Black, result.get(Point::at(2, 2)).side);
        // Input board value is untouched.
        assert_eq!(Side::Black, board.get(Point::at(3, 3)).side);
    }

    #[test]
    fn jump_removes_the_captured_figure() {
        let figure = Figure::simple(3, 3, Side::Black);
        let mut board = SquareBoard::new(5);
        board.set(figure);
        board.set(Figure::simple(2, 2, Side::Red));

        let result = apply_sequence(
            figure,
            board,
            &MoveSequence::single(MoveStep::Jump(Point::at(1, 1))),
        );

        assert_eq!(Side::Black, result.get(Point::at(1, 1)).side);
        assert!(result.is_empty(Point::at(2, 2)));
        assert!(result.is_empty(Point::at(3, 3)));
    }

    #[test]
    fn jump_direction_offsets_cover_all_four_diagonals() {
        let king = Figure::king(2, 2, Side::Red);
        for (enemy, landing) in [
            (Point::at(1, 1), Point::at(0, 0)),
            (Point::at(1, 3), Point::at(0, 4)),
            (Point::at(3, 1), Point::at(4, 0)),
            (Point::at(3, 3), Point::at(4, 4)),
        ] {
            let mut board = SquareBoard::new(5);
            board.set(king);
            board.set(Figure::new(enemy, Side::Black, false));

            let result =
                apply_sequence(king, board, &MoveSequence::single(MoveStep::Jump(landing)));

            assert!(result.is_empty(enemy), "captured cell {enemy} not cleared");
            assert!(result.get(landing).is_king);
        }
    }

    #[test]
    fn promotion_sets_the_king_flag_in_place() {
        let figure = Figure::simple(0, 2, Side::Black);
        let mut board = SquareBoard::new(5);
        board.set(figure);

        let result = apply_sequence(figure, board, &MoveSequence::single(MoveStep::PromoteKing));

        let promoted = result.get(Point::at(0, 2));
        assert_eq!(Side::Black, promoted.side);
        assert!(promoted.is_king);
    }

    #[test]
    fn multi_jump_then_promote_ends_in_final_position_and_state() {
        /* . . . . .
         * . r . r .
         * . . . . .
         * . r . . .
         * b . . . . */
        let figure = Figure::simple(4, 0, Side::Black);
        let mut board = SquareBoard::new(5);
        board.set(figure);
        board.set(Figure::simple(3, 1, Side::Red));
        board.set(Figure::simple(1, 1, Side::Red));
        board.set(Figure::simple(1, 3, Side::Red));

        let sequence = MoveSequence::of([
            MoveStep::Jump(Point::at(2, 2)),
            MoveStep::Jump(Point::at(0, 4)),
            MoveStep::PromoteKing,
        ]);
        let result = apply_sequence(figure, board, &sequence);

        let finished = result.get(Point::at(0, 4));
        assert_eq!(Side::Black, finished.side);
        assert!(finished.is_king);
        assert!(result.is_empty(Point::at(3, 1)));
        assert!(result.is_empty(Point::at(1, 3)));
        assert!(result.is_empty(Point::at(4, 0)));
        // The red piece off the jump path survives.
        assert_eq!(Side::Red, result.get(Point::at(1, 1)).side);
    }

    #[test]
    fn every_enumerated_sequence_round_trips_through_the_applier() {
        let board = {
            let mut b = SquareBoard::new(7);
            b.set(Figure::simple(1, 1, Side::Red));
            b.set(Figure::simple(1, 3, Side::Red));
            b.set(Figure::simple(1, 5, Side::Red));
            b.set(Figure::simple(3, 5, Side::Red));
            b.set(Figure::simple(4, 6, Side::Black));
            b.set(Figure::king(2, 0, Side::Black));
            b
        };

        let moves = EnglishDraughtsRules
            .get_moves(&board, Side::Black)
            .expect("moves");
        for (figure, sequences) in moves {
            for sequence in sequences {
                let result = apply_sequence(figure, board, &sequence);

                let mut final_target = figure.point;
                let mut becomes_king = figure.is_king;
                for step in &sequence {
                    match step {
                        MoveStep::PromoteKing => becomes_king = true,
                        _ => final_target = step.target(),
                    }
                }
                let landed = result.get(final_target);
                assert_eq!(figure.side, landed.side);
                assert_eq!(becomes_king, landed.is_king);

                // Every jumped-over cell along the way is cleared.
                let mut from = figure.point;
                for step in &sequence {
                    if let MoveStep::Jump(to) = step {
                        let row_offset = if from.row > to.row { -1 } else { 1 };
                        let col_offset = if from.col > to.col { -1 } else { 1 };
                        let captured = Point::at(from.row + row_offset, from.col + col_offset);
                        assert!(result.is_empty(captured), "captured cell {captured} still occupied");
                        from = *to;
                    }
                }
            }
        }
    }
}
