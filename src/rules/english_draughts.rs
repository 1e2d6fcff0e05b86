//! English draughts rules: legal-move enumeration with mandatory captures,
//! multi-jump chains, and king promotion.

use std::collections::BTreeMap;

use crate::board::direction::Direction;
use crate::board::figure::Figure;
use crate::board::point::Point;
use crate::board::side::Side;
use crate::board::square_board::SquareBoard;
use crate::errors::GameError;
use crate::rules::move_sequence::MoveSequence;
use crate::rules::move_step::MoveStep;

/// Legal moves per figure. Ordered by figure so enumeration order, and with
/// it search tie-breaking, is deterministic.
pub type MoveMap = BTreeMap<Figure, Vec<MoveSequence>>;

/// Rule set boundary consumed by the search bot and the game orchestrator.
pub trait Rules {
    fn first_move_side(&self) -> Side;
    fn get_moves(&self, board: &SquareBoard, side: Side) -> Result<MoveMap, GameError>;
    fn game_is_over(&self, board: &SquareBoard) -> Result<bool, GameError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishDraughtsRules;

impl Rules for EnglishDraughtsRules {
    fn first_move_side(&self) -> Side {
        Side::Red
    }

    fn get_moves(&self, board: &SquareBoard, side: Side) -> Result<MoveMap, GameError> {
        let figures = board.get_all(side)?;
        let mut jump_moves = MoveMap::new();
        let mut simple_moves = MoveMap::new();
        for figure in figures {
            let mut jumps = Vec::new();
            build_jump_sequences(board, figure, &MoveSequence::new(), &mut jumps);
            if !jumps.is_empty() {
                jump_moves.insert(figure, jumps);
                continue;
            }

            let simple = build_simple_moves(board, figure);
            if !simple.is_empty() {
                simple_moves.insert(figure, simple);
            }
        }

        // Capture priority is board-wide: one available jump suppresses
        // every simple move for the side.
        if !jump_moves.is_empty() {
            return Ok(jump_moves);
        }
        Ok(simple_moves)
    }

    /// A side with zero legal moves has lost; this doubles as the
    /// no-mobility loss condition.
    fn game_is_over(&self, board: &SquareBoard) -> Result<bool, GameError> {
        let black_moves = self.get_moves(board, Side::Black)?;
        let red_moves = self.get_moves(board, Side::Red)?;
        Ok(black_moves.is_empty() || red_moves.is_empty())
    }
}

/// Depth-first expansion of capture chains starting from `figure`.
///
/// A branch that reaches a promotion-eligible cell appends the promotion
/// step and stops; a branch with no further jump and a non-empty partial
/// sequence is complete. Landing squares already in the sequence are skipped
/// so a chain can never cycle.
fn build_jump_sequences(
    board: &SquareBoard,
    figure: Figure,
    sequence: &MoveSequence,
    out: &mut Vec<MoveSequence>,
) {
    if should_promote(figure, board.size()) {
        let mut promoted = sequence.clone();
        promoted.push(MoveStep::PromoteKing);
        out.push(promoted);
        return;
    }

    let mut end_of_sequence = true;
    for direction in figure.directions() {
        let (landing, _) = jump_probe(board, figure, *direction);
        if landing == Point::NOP || sequence.contains(landing) {
            continue;
        }

        end_of_sequence = false;
        let figure_after_jump = Figure::new(landing, figure.side, figure.is_king);
        let mut next = sequence.clone();
        next.push(MoveStep::Jump(landing));
        build_jump_sequences(board, figure_after_jump, &next, out);
    }

    if end_of_sequence && !sequence.is_empty() {
        out.push(sequence.clone());
    }
}

fn build_simple_moves(board: &SquareBoard, figure: Figure) -> Vec<MoveSequence> {
    let mut moves = Vec::new();
    for direction in figure.directions() {
        let (landing, neighbour) = jump_probe(board, figure, *direction);
        if landing == Point::NOP && neighbour.side == Side::Empty {
            let mut sequence = MoveSequence::single(MoveStep::Move(neighbour.point));
            let moved = Figure::new(neighbour.point, figure.side, figure.is_king);
            if !figure.is_king && should_promote(moved, board.size()) {
                sequence.push(MoveStep::PromoteKing);
            }
            moves.push(sequence);
        }
    }
    moves
}

/// A non-king figure promotes on the farthest row from its starting side.
fn should_promote(figure: Figure, board_size: i32) -> bool {
    if figure.is_king {
        return false;
    }
    match figure.side {
        Side::Black => figure.point.row == 0,
        Side::Red => figure.point.row == board_size - 1,
        Side::Nop | Side::Empty => false,
    }
}

/// Landing square of a capture jump along `direction`, or [`Point::NOP`] when
/// no capture is possible there. Also yields the adjacent figure so simple
/// move enumeration can reuse the probe.
#[inline]
fn jump_probe(board: &SquareBoard, figure: Figure, direction: Direction) -> (Point, Figure) {
    let neighbour = board.get(direction.apply(figure.point, 1));
    if neighbour.side == figure.side.opposite() {
        let landing = direction.apply(figure.point, 2);
        if board.is_empty(landing) {
            return (landing, neighbour);
        }
    }
    (Point::NOP, neighbour)
}
