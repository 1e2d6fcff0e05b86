use crate::board::figure::Figure;

/// Result of a search: which figure to move, which of its enumerated
/// sequences to play, and the score backing the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub figure: Figure,
    pub sequence_index: usize,
    pub score: i32,
}

impl BotMove {
    pub fn new(figure: Figure, sequence_index: usize, score: i32) -> BotMove {
        BotMove {
            figure,
            sequence_index,
            score,
        }
    }

    /// A "no move" value carrying only a score, produced at terminal and
    /// leaf nodes.
    pub fn leaf(score: i32) -> BotMove {
        BotMove {
            figure: Figure::NOP,
            sequence_index: 0,
            score,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.figure == Figure::NOP
    }
}
