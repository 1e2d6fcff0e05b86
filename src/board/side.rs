/// Owner of a board cell.
///
/// `Nop` marks out-of-bounds or otherwise invalid cells, `Empty` a valid cell
/// with no figure on it. Only `Black` and `Red` take part in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Nop,
    Empty,
    Black,
    Red,
}

impl Side {
    /// Opponent of a playing side. Defined only for `Black` and `Red`;
    /// everything else maps to `Nop`.
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Black => Side::Red,
            Side::Red => Side::Black,
            Side::Nop | Side::Empty => Side::Nop,
        }
    }

    #[inline]
    pub const fn is_player(self) -> bool {
        matches!(self, Side::Black | Side::Red)
    }
}
