use std::collections::HashSet;
use std::fmt;

use crate::board::point::Point;
use crate::rules::move_step::MoveStep;

/// Ordered list of steps making up one turn, plus the set of landing squares
/// already used. The set forbids revisiting a square within a capture chain,
/// which is what keeps jump enumeration cycle-free.
///
/// Equality is order-sensitive over the steps: two sequences visiting the
/// same squares in a different order (or with different step kinds) are
/// different moves.
#[derive(Debug, Clone, Default)]
pub struct MoveSequence {
    steps: Vec<MoveStep>,
    visited: HashSet<Point>,
}

impl MoveSequence {
    pub fn new() -> MoveSequence {
        MoveSequence::default()
    }

    pub fn single(step: MoveStep) -> MoveSequence {
        let mut sequence = MoveSequence::new();
        sequence.push(step);
        sequence
    }

    pub fn of(steps: impl IntoIterator<Item = MoveStep>) -> MoveSequence {
        let mut sequence = MoveSequence::new();
        for step in steps {
            sequence.push(step);
        }
        sequence
    }

    pub fn push(&mut self, step: MoveStep) {
        self.visited.insert(step.target());
        self.steps.push(step);
    }

    /// Whether `p` was already used as a landing square in this sequence.
    pub fn contains(&self, p: Point) -> bool {
        self.visited.contains(&p)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[MoveStep] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveStep> {
        self.steps.iter()
    }
}

impl PartialEq for MoveSequence {
    fn eq(&self, other: &MoveSequence) -> bool {
        // The visited set is derived from the steps, so it carries no extra
        // identity.
        self.steps == other.steps
    }
}

impl Eq for MoveSequence {}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a MoveStep;
    type IntoIter = std::slice::Iter<'a, MoveStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence(")?;
        for (index, step) in self.steps.iter().enumerate() {
            if index > 0 {
                write!(f, "->")?;
            }
            write!(f, "{step}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::MoveSequence;
    use crate::board::point::Point;
    use crate::rules::move_step::MoveStep;

    #[test]
    fn remembers_visited_landing_squares() {
        let sequence = MoveSequence::of([
            MoveStep::Jump(Point::at(2, 2)),
            MoveStep::Jump(Point::at(0, 4)),
        ]);

        assert!(sequence.contains(Point::at(2, 2)));
        assert!(sequence.contains(Point::at(0, 4)));
        assert!(!sequence.contains(Point::at(4, 0)));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let forward = MoveSequence::of([
            MoveStep::Jump(Point::at(2, 2)),
            MoveStep::Jump(Point::at(0, 4)),
        ]);
        let backward = MoveSequence::of([
            MoveStep::Jump(Point::at(0, 4)),
            MoveStep::Jump(Point::at(2, 2)),
        ]);

        assert_ne!(forward, backward);
        assert_eq!(forward, forward.clone());
    }

    #[test]
    fn equality_distinguishes_step_kinds() {
        let jump = MoveSequence::single(MoveStep::Jump(Point::at(1, 1)));
        let slide = MoveSequence::single(MoveStep::Move(Point::at(1, 1)));
        assert_ne!(jump, slide);
    }

    #[test]
    fn displays_steps_in_order() {
        let sequence = MoveSequence::of([
            MoveStep::Jump(Point::at(2, 2)),
            MoveStep::PromoteKing,
        ]);
        assert_eq!("Sequence(Jump(2, 2)->PromoteKing)", sequence.to_string());
    }
}
