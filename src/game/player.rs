//! Player abstractions for the game loop, plus the two built-in players.

use std::sync::Mutex;
use std::time::Duration;

use rand::prelude::IndexedRandom;
use tracing::warn;

use crate::board::figure::Figure;
use crate::board::side::Side;
use crate::board::square_board::SquareBoard;
use crate::bot::cancel::CancelToken;
use crate::bot::negamax_bot::{BotOptions, NegaMaxBot};
use crate::bot::scoring::MaterialScoring;
use crate::rules::english_draughts::EnglishDraughtsRules;
use crate::rules::move_sequence::MoveSequence;

/// A choice the game offers to a player on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameMove {
    Walk {
        figure: Figure,
        sequence: MoveSequence,
    },
    Undo,
    Redo,
}

impl GameMove {
    pub fn is_walk(&self) -> bool {
        matches!(self, GameMove::Walk { .. })
    }
}

/// A participant in a game. `choose` returning `None` stops the game.
pub trait Player {
    fn side(&self) -> Side;

    /// Picks one of the offered moves, or `None` to stop playing.
    fn choose(&mut self, moves: &[GameMove], board: &SquareBoard) -> Option<GameMove>;

    /// Asks the player to wrap up a `choose` in progress. Best effort.
    fn cancel(&self) {}
}

/// Plays a uniformly random walk move. Never undoes or redoes.
pub struct RandomPlayer {
    side: Side,
}

impl RandomPlayer {
    pub fn new(side: Side) -> RandomPlayer {
        RandomPlayer { side }
    }
}

impl Player for RandomPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn choose(&mut self, moves: &[GameMove], _board: &SquareBoard) -> Option<GameMove> {
        let walks: Vec<&GameMove> = moves.iter().filter(|m| m.is_walk()).collect();
        let mut rng = rand::rng();
        walks.choose(&mut rng).map(|&walk| walk.clone())
    }
}

/// Plays the move found by a NegaMax search, bounded by a per-turn deadline.
pub struct BotPlayer {
    side: Side,
    bot: NegaMaxBot<EnglishDraughtsRules, MaterialScoring>,
    options: BotOptions,
    turn_time: Duration,
    // The token for the search currently in flight, so `cancel` can reach it
    // from another thread.
    current_search: Mutex<CancelToken>,
}

impl BotPlayer {
    pub fn new(side: Side, max_depth: u32, turn_time: Duration) -> BotPlayer {
        let options = BotOptions {
            max_depth,
            allow_pruning: true,
            ..BotOptions::default()
        };
        BotPlayer {
            side,
            bot: NegaMaxBot::new(EnglishDraughtsRules, MaterialScoring),
            options,
            turn_time,
            current_search: Mutex::new(CancelToken::new()),
        }
    }
}

impl Player for BotPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn choose(&mut self, moves: &[GameMove], board: &SquareBoard) -> Option<GameMove> {
        let token = CancelToken::with_deadline(self.turn_time);
        if let Ok(mut current) = self.current_search.lock() {
            *current = token.clone();
        }

        let best = match self.bot.find_best_move(*board, self.side, &token, self.options) {
            Ok(best) => best,
            Err(error) => {
                warn!("search failed: {error}");
                return None;
            }
        };
        if best.is_leaf() {
            return None;
        }

        // The offered walks for one figure keep the enumeration order the
        // search saw, so the index picks the exact sequence it chose.
        moves
            .iter()
            .filter(|m| matches!(m, GameMove::Walk { figure, .. } if *figure == best.figure))
            .nth(best.sequence_index)
            .cloned()
    }

    fn cancel(&self) {
        if let Ok(current) = self.current_search.lock() {
            current.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{BotPlayer, GameMove, Player, RandomPlayer};
    use crate::board::figure::Figure;
    use crate::board::side::Side;
    use crate::board::square_board::SquareBoard;
    use crate::rules::english_draughts::{EnglishDraughtsRules, Rules};

    fn offered_walks(board: &SquareBoard, side: Side) -> Vec<GameMove> {
        let mut offered = Vec::new();
        let moves = EnglishDraughtsRules.get_moves(board, side).expect("moves");
        for (figure, sequences) in moves {
            for sequence in sequences {
                offered.push(GameMove::Walk { figure, sequence });
            }
        }
        offered
    }

    #[test]
    fn random_player_picks_only_walk_moves() {
        let mut board = SquareBoard::new(5);
        board.set(Figure::simple(2, 2, Side::Black));
        board.set(Figure::simple(4, 4, Side::Black));

        let mut offered = offered_walks(&board, Side::Black);
        offered.push(GameMove::Undo);

        let mut player = RandomPlayer::new(Side::Black);
        for _ in 0..20 {
            let chosen = player.choose(&offered, &board).expect("a walk exists");
            assert!(chosen.is_walk());
        }
    }

    #[test]
    fn random_player_stops_when_only_undo_is_offered() {
        let board = SquareBoard::new(5);
        let mut player = RandomPlayer::new(Side::Red);
        assert_eq!(None, player.choose(&[GameMove::Undo], &board));
    }

    #[test]
    fn bot_player_selects_the_searched_walk() {
        /*   0 1 2 3 4
           0 . . . . r
           1 . . . . .
           2 . . . . b
           3 . . . . .
           4 . . . . b   */
        let mut board = SquareBoard::new(5);
        board.set(Figure::simple(0, 4, Side::Red));
        board.set(Figure::simple(2, 4, Side::Black));
        board.set(Figure::simple(4, 4, Side::Black));

        let offered = offered_walks(&board, Side::Black);
        let mut player = BotPlayer::new(Side::Black, 2, Duration::from_secs(10));
        let chosen = player.choose(&offered, &board).expect("bot finds a move");

        match chosen {
            GameMove::Walk { figure, .. } => {
                assert_eq!(Figure::simple(4, 4, Side::Black), figure);
            }
            other => panic!("expected a walk, got {other:?}"),
        }
    }

    #[test]
    fn bot_player_stops_without_any_walk_to_offer() {
        let board = SquareBoard::new(5);
        let mut player = BotPlayer::new(Side::Black, 2, Duration::from_secs(1));
        assert_eq!(None, player.choose(&[], &board));
    }
}
